//! Fixed-size hash set with separate chaining
//!
//! The bucket count is computed once from an expected number of entries,
//! targeting a load factor of `0.75`, and is never resized afterwards. Lookups
//! stay `O(1 + load)` as long as the expected count is accurate.

use crate::chain::Chain;
use std::{
	borrow::Borrow,
	fmt,
	hash::{BuildHasher, Hash},
	iter,
};

/// Ways sizing a [`LexiconSet`] could go wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CapacityError {
	/// A table sized for nothing would have no bucket to address
	#[error("lexicon cannot be sized for zero entries")]
	Empty,

	/// Bucket count does not fit in memory addressing
	#[error("lexicon cannot be sized for {0} entries")]
	Overflow(usize),
}

/// Hash set whose buckets are [`Chain`]s
pub struct LexiconSet<T, S = ahash::RandomState> {
	buckets: Box<[Chain<T>]>,
	/// Number of inserted elements, duplicates included
	len: usize,
	hasher: S,
}

/// Number of buckets needed to hold `expected` entries at a `0.75` load factor
///
/// This is `expected / 0.75` rounded to the nearest integer.
fn bucket_count_for(expected: usize) -> Result<usize, CapacityError> {
	if expected == 0 {
		return Err(CapacityError::Empty);
	}

	let scaled = expected
		.checked_mul(4)
		.ok_or(CapacityError::Overflow(expected))?;

	// `scaled` is a multiple of 4, the increment cannot overflow
	Ok((scaled + 1) / 3)
}

/// Mathematical modulo of a hash, always within `0..bucket_count`
#[allow(
	clippy::cast_possible_wrap,
	clippy::cast_possible_truncation,
	clippy::cast_sign_loss
)]
const fn bucket_index(hash: u64, bucket_count: usize) -> usize {
	let signed = hash as i64 as i128;
	signed.rem_euclid(bucket_count as i128) as usize
}

impl<T: Hash + Eq> LexiconSet<T> {
	/// # Errors
	///
	/// Will error if `expected` is zero or too large to size the table.
	pub fn with_capacity(expected: usize) -> Result<Self, CapacityError> {
		Self::with_capacity_and_hasher(expected, ahash::RandomState::new())
	}
}

impl<T: Hash + Eq, S: BuildHasher> LexiconSet<T, S> {
	/// Sizes the table for `expected` entries and hashes with `hasher`
	///
	/// # Errors
	///
	/// Will error if `expected` is zero or too large to size the table.
	pub fn with_capacity_and_hasher(expected: usize, hasher: S) -> Result<Self, CapacityError> {
		let bucket_count = bucket_count_for(expected)?;
		let buckets = iter::repeat_with(Chain::new).take(bucket_count).collect();

		Ok(Self {
			buckets,
			len: 0,
			hasher,
		})
	}

	/// Appends `value` to its bucket
	///
	/// Equal values are not merged, each insertion is stored.
	pub fn insert(&mut self, value: T) {
		let bucket = self.bucket_of(&value);
		self.buckets[bucket].push(value);
		self.len += 1;
	}

	/// Returns the stored value equal to `value`, scanning only its bucket
	pub fn get<Q>(&self, value: &Q) -> Option<&T>
	where
		T: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.buckets[self.bucket_of(value)]
			.iter()
			.find(|stored| Borrow::<Q>::borrow(*stored) == value)
	}

	pub fn contains<Q>(&self, value: &Q) -> bool
	where
		T: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.get(value).is_some()
	}

	fn bucket_of<Q: Hash + ?Sized>(&self, value: &Q) -> usize {
		bucket_index(self.hasher.hash_one(value), self.buckets.len())
	}
}

impl<T, S> LexiconSet<T, S> {
	/// Total number of insertions
	#[must_use]
	pub const fn len(&self) -> usize {
		self.len
	}

	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Number of buckets, fixed at construction
	#[must_use]
	pub const fn bucket_count(&self) -> usize {
		self.buckets.len()
	}
}

impl<T: fmt::Debug, S> fmt::Debug for LexiconSet<T, S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LexiconSet")
			.field("len", &self.len)
			.field("bucket_count", &self.buckets.len())
			.finish_non_exhaustive()
	}
}
