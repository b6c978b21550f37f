//! Singly linked list used as the bucket storage of [`LexiconSet`](crate::LexiconSet)
//!
//! Indexing follows two conventions inherited from the bucket usage:
//! - [`Chain::get`] and [`Chain::insert_at`] are 0-based
//! - [`Chain::remove_at`] is 1-based, valid positions are `1..=len`

use crate::node::Node;
use std::{fmt, iter::FusedIterator};

/// Ordered, append-oriented sequence of owned nodes
pub struct Chain<T> {
	head: Option<Box<Node<T>>>,
	/// Number of elements reachable from `head`
	len: usize,
}

impl<T> Default for Chain<T> {
	fn default() -> Self {
		Self { head: None, len: 0 }
	}
}

impl<T> Chain<T> {
	/// Creates an empty chain
	#[must_use]
	pub const fn new() -> Self {
		Self { head: None, len: 0 }
	}

	/// Number of elements in the chain
	#[must_use]
	pub const fn len(&self) -> usize {
		self.len
	}

	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Links `value` after the last element, walking the whole chain
	pub fn push(&mut self, value: T) {
		let mut cursor = &mut self.head;
		while let Some(node) = cursor {
			cursor = &mut node.next;
		}
		*cursor = Some(Node::boxed(value, None));
		self.len += 1;
	}

	/// Returns the element at `index`, or `None` when out of range
	#[must_use]
	pub fn get(&self, index: usize) -> Option<&T> {
		self.iter().nth(index)
	}

	/// Inserts `value` so it ends up at `index`
	///
	/// The walk stops at the last element, an `index` past the end appends.
	pub fn insert_at(&mut self, value: T, index: usize) {
		let mut cursor = &mut self.head;
		for _ in 0..index {
			match cursor {
				Some(node) => cursor = &mut node.next,
				None => break,
			}
		}

		let next = cursor.take();
		*cursor = Some(Node::boxed(value, next));
		self.len += 1;
	}

	/// Unlinks the element at the 1-based `position`
	///
	/// Returns `false` without touching the chain when `position` is `0` or
	/// greater than [`Chain::len`].
	pub fn remove_at(&mut self, position: usize) -> bool {
		if position == 0 || position > self.len {
			return false;
		}

		let mut cursor = &mut self.head;
		for _ in 1..position {
			match cursor {
				Some(node) => cursor = &mut node.next,
				None => return false,
			}
		}

		match cursor.take() {
			Some(removed) => {
				let Node { next, .. } = *removed;
				*cursor = next;
				self.len -= 1;
				true
			}
			None => false,
		}
	}

	/// Iterates over the elements from the first one
	#[must_use]
	pub fn iter(&self) -> Iter<'_, T> {
		Iter {
			next: self.head.as_deref(),
			remaining: self.len,
		}
	}
}

// Unlink one node at a time, the default drop would recurse once per node
impl<T> Drop for Chain<T> {
	fn drop(&mut self) {
		let mut cursor = self.head.take();
		while let Some(mut node) = cursor {
			cursor = node.next.take();
		}
	}
}

impl<T: fmt::Display> fmt::Display for Chain<T> {
	/// Must look like
	/// [first][second][third]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for value in self {
			write!(f, "[{value}]")?;
		}
		Ok(())
	}
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<T> Extend<T> for Chain<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		iter.into_iter().for_each(|value| self.push(value));
	}
}

impl<T> FromIterator<T> for Chain<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut chain = Self::new();
		chain.extend(iter);
		chain
	}
}

impl<'a, T> IntoIterator for &'a Chain<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Borrowing cursor over a [`Chain`], created by [`Chain::iter`]
#[derive(Debug)]
pub struct Iter<'a, T> {
	next: Option<&'a Node<T>>,
	/// Bounded by the chain length when the cursor was created
	remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
	fn clone(&self) -> Self {
		Self {
			next: self.next,
			remaining: self.remaining,
		}
	}
}

impl<'a, T> Iterator for Iter<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}

		let node = self.next?;
		self.next = node.next.as_deref();
		self.remaining -= 1;
		Some(&node.value)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
	use super::*;

	fn letters() -> Chain<char> {
		['a', 'b', 'c'].into_iter().collect()
	}

	#[test]
	fn push_keeps_order() {
		let mut chain = Chain::new();
		assert!(chain.is_empty());

		chain.push("first");
		chain.push("second");

		assert_eq!(chain.len(), 2);
		assert_eq!(chain.get(0), Some(&"first"));
		assert_eq!(chain.get(1), Some(&"second"));
		assert_eq!(chain.get(2), None);
	}

	#[test]
	fn get_on_empty_chain_is_absent() {
		let chain = Chain::<u8>::default();
		assert_eq!(chain.get(0), None);
		assert_eq!(chain.get(usize::MAX), None);
	}

	#[test]
	fn insert_at_places_value_at_index() {
		let mut chain = letters();
		chain.insert_at('x', 0);
		chain.insert_at('y', 2);
		assert_eq!(chain.iter().collect::<String>(), "xaybc");
		assert_eq!(chain.len(), 5);
	}

	#[test]
	fn insert_at_past_the_end_appends() {
		let mut chain = letters();
		chain.insert_at('z', 42);
		assert_eq!(chain.to_string(), "[a][b][c][z]");

		let mut empty = Chain::new();
		empty.insert_at('z', 3);
		assert_eq!(empty.get(0), Some(&'z'));
	}

	#[test]
	fn remove_at_is_one_based() {
		let mut chain = letters();

		assert!(chain.remove_at(1));
		assert_eq!(chain.to_string(), "[b][c]");

		assert!(chain.remove_at(2));
		assert_eq!(chain.to_string(), "[b]");
		assert_eq!(chain.len(), 1);
	}

	#[test]
	fn remove_at_rejects_out_of_range_positions() {
		let mut chain = letters();

		assert!(!chain.remove_at(0));
		assert!(!chain.remove_at(chain.len() + 1));

		assert_eq!(chain.len(), 3);
		assert_eq!(chain.to_string(), "[a][b][c]");
		assert!(!Chain::<char>::new().remove_at(1));
	}

	#[test]
	fn iteration_is_restartable() {
		let chain = letters();
		let iter = chain.iter();
		assert_eq!(iter.len(), 3);
		assert_eq!(iter.clone().count(), 3);
		assert_eq!(iter.copied().collect::<Vec<_>>(), vec!['a', 'b', 'c']);
		assert_eq!((&chain).into_iter().count(), 3);
	}

	#[test]
	fn debug_renders_as_list() {
		assert_eq!(format!("{:?}", letters()), "['a', 'b', 'c']");
	}

	#[test]
	fn long_chain_drops_without_overflow() {
		let mut chain = Chain::new();
		for n in 0..200_000_u32 {
			chain.insert_at(n, 0);
		}
		assert_eq!(chain.len(), 200_000);
		assert_eq!(chain.get(0), Some(&199_999));
		drop(chain);
	}
}
