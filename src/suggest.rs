//! Logic of the [`Dictionary`] to suggests words
//!
//! Suggestions are every known word a single edit away from the input. Edits
//! are tried in a fixed order, each pass working on the original word:
//! 1. swapping two adjacent characters
//! 2. deleting a character
//! 3. inserting a letter between two characters
//! 4. replacing a character with a letter
//!
//! Letters come from the lowercase ASCII alphabet. Results keep the order in
//! which they were first found.

use crate::{Dictionary, LexiconSet};
use std::{iter, ops::RangeInclusive};

/// Letters tried by insertions and substitutions
const ALPHABET: RangeInclusive<char> = 'a'..='z';

/// Methods for suggesting words based on the dictionary
impl Dictionary {
	/// Known words reachable from `word` with a single edit
	///
	/// A known `word` is not special cased, it may appear in its own
	/// suggestions as substituting a letter with itself reproduces it.
	#[must_use]
	pub fn suggest(&self, word: &str) -> Vec<String> {
		let chars = word.chars().collect::<Vec<_>>();
		if chars.is_empty() {
			return vec![];
		}

		let mut candidates = Candidates::new(&self.lexicon);
		candidates.transpositions(&chars);
		candidates.deletions(&chars);
		candidates.insertions(&chars);
		candidates.substitutions(&chars);
		candidates.found
	}
}

/// Accumulates known words for a single [`Dictionary::suggest`] call
struct Candidates<'lex> {
	lexicon: &'lex LexiconSet<String>,
	found: Vec<String>,
}

impl<'lex> Candidates<'lex> {
	const fn new(lexicon: &'lex LexiconSet<String>) -> Self {
		Self {
			lexicon,
			found: Vec::new(),
		}
	}

	/// Keeps `candidate` if it is known and was not found before
	fn offer(&mut self, candidate: String) {
		if !self.lexicon.contains(candidate.as_str()) || self.found.contains(&candidate) {
			return;
		}

		log::trace!("Found suggestion `{candidate}`");
		self.found.push(candidate);
	}

	fn transpositions(&mut self, chars: &[char]) {
		let mut word = chars.to_vec();
		for i in 1..word.len() {
			word.swap(i - 1, i);
			self.offer(word.iter().collect());
			word.swap(i - 1, i);
		}
	}

	fn deletions(&mut self, chars: &[char]) {
		for i in 0..chars.len() {
			self.offer(chars[..i].iter().chain(&chars[i + 1..]).collect());
		}
	}

	// Only between two characters, never before the first or after the last
	fn insertions(&mut self, chars: &[char]) {
		for i in 1..chars.len() {
			for letter in ALPHABET {
				let candidate = chars[..i]
					.iter()
					.copied()
					.chain(iter::once(letter))
					.chain(chars[i..].iter().copied())
					.collect();
				self.offer(candidate);
			}
		}
	}

	fn substitutions(&mut self, chars: &[char]) {
		let mut word = chars.to_vec();
		for i in 0..word.len() {
			let original = word[i];
			for letter in ALPHABET {
				word[i] = letter;
				self.offer(word.iter().collect());
			}
			word[i] = original;
		}
	}
}
