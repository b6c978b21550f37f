//! Cells of a [`Chain`](crate::Chain)

/// A single link owning its value and the rest of the chain
#[derive(Debug)]
pub(crate) struct Node<T> {
	pub(crate) value: T,
	/// Following node, `None` when this is the last one
	pub(crate) next: Option<Box<Self>>,
}

impl<T> Node<T> {
	pub(crate) const fn new(value: T, next: Option<Box<Self>>) -> Self {
		Self { value, next }
	}

	/// Wraps the node so it can be linked behind another one
	pub(crate) fn boxed(value: T, next: Option<Box<Self>>) -> Box<Self> {
		Box::new(Self::new(value, next))
	}
}
