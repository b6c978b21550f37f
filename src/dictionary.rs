//! High level interface to query a word list
//!
//! Entrypoint methods are
//! - [`Dictionary::is_known`]: checks whether a word is part of the lexicon
//! - [`Dictionary::suggest`]: lists known words a single edit away from a word
//! - [`Dictionary::check`]: normalizes user input and runs both of the above

use crate::{lexicon::CapacityError, wordlist::WordList, LexiconSet};
use std::{io, path::Path};

/// Lexicon built once from a word list, read-only afterwards
#[derive(Debug)]
pub struct Dictionary {
	pub(crate) lexicon: LexiconSet<String>,
}

/// Ways initializing a [`Dictionary`] could go wrong
#[derive(Debug, thiserror::Error)]
pub enum InitializeError {
	/// Could not parse the word list
	#[error("Could not parse file: {0}")]
	Parser(String),

	/// Could not correctly open given file
	#[error(transparent)]
	Io(#[from] io::Error),

	/// Could not size the lexicon for the given word count
	#[error(transparent)]
	Capacity(#[from] CapacityError),
}

/// Constructors
impl Dictionary {
	/// Builds the lexicon sized for the number of supplied words
	///
	/// # Errors
	///
	/// Will error if no word is supplied, an empty lexicon cannot be sized.
	pub fn from_words<I>(words: I) -> Result<Self, InitializeError>
	where
		I: IntoIterator<Item = String>,
	{
		let words = words.into_iter().collect::<Vec<_>>();
		let capacity = words.len();
		Self::from_words_with_capacity(words, capacity)
	}

	/// Builds the lexicon sized for `capacity` entries, whatever the number of
	/// supplied words
	///
	/// The table never grows, a `capacity` far below the real word count slows
	/// every lookup down.
	///
	/// # Errors
	///
	/// Will error if `capacity` is zero or too large.
	pub fn from_words_with_capacity<I>(words: I, capacity: usize) -> Result<Self, InitializeError>
	where
		I: IntoIterator<Item = String>,
	{
		let mut lexicon = LexiconSet::with_capacity(capacity)?;
		words.into_iter().for_each(|word| lexicon.insert(word));

		log::debug!(
			"Built lexicon of {} words over {} buckets",
			lexicon.len(),
			lexicon.bucket_count()
		);

		Ok(Self { lexicon })
	}

	/// Parses a word list, one word per line
	///
	/// # Errors
	///
	/// Will error if the list cannot be parsed or holds no word.
	pub fn from_slice(content: &str) -> Result<Self, InitializeError> {
		Self::from_words(WordList::new(content)?.into_words())
	}

	/// Reads and parses the word list at `path`
	///
	/// # Errors
	///
	/// Will error if the file cannot be read, cannot be parsed or holds no
	/// word.
	pub fn from_file(path: &Path) -> Result<Self, InitializeError> {
		Self::from_words(WordList::file(path)?.into_words())
	}

	/// Same as [`Dictionary::from_file`] with an explicit lexicon capacity
	///
	/// # Errors
	///
	/// Will error if the file cannot be read or parsed, or if `capacity` is
	/// zero or too large.
	pub fn from_file_with_capacity(path: &Path, capacity: usize) -> Result<Self, InitializeError> {
		Self::from_words_with_capacity(WordList::file(path)?.into_words(), capacity)
	}
}

impl Dictionary {
	/// Number of words in the lexicon
	#[must_use]
	pub const fn len(&self) -> usize {
		self.lexicon.len()
	}

	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.lexicon.is_empty()
	}

	#[must_use]
	pub const fn lexicon(&self) -> &LexiconSet<String> {
		&self.lexicon
	}
}
