//! Logic of the [`Dictionary`] to validate a word

use crate::Dictionary;
use std::fmt;

/// Lowercases and trims a user supplied token before it is checked
#[must_use]
pub fn normalize(token: &str) -> String {
	token.trim().to_lowercase()
}

/// Outcome of [`Dictionary::check`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
	/// Word is part of the lexicon
	Known(String),
	/// Word is unknown, `suggestions` is empty when nothing is one edit away
	Misspelled {
		word: String,
		suggestions: Vec<String>,
	},
}

impl Verdict {
	#[must_use]
	pub const fn is_known(&self) -> bool {
		matches!(self, Self::Known(_))
	}

	/// Corrections for a misspelled word, empty for a known one
	#[must_use]
	pub fn suggestions(&self) -> &[String] {
		match self {
			Self::Known(_) => &[],
			Self::Misspelled { suggestions, .. } => suggestions,
		}
	}
}

impl fmt::Display for Verdict {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Known(word) => write!(f, "The word `{word}` is spelled correctly"),
			Self::Misspelled { word, suggestions } if suggestions.is_empty() => {
				write!(f, "The word `{word}` is misspelled, no suggestions found")
			}
			Self::Misspelled { word, suggestions } => {
				write!(f, "The word `{word}` is misspelled, did you mean: {}", suggestions.join(" "))
			}
		}
	}
}

/// Methods for querying the dictionary
impl Dictionary {
	/// Whether `word` is in the lexicon, compared as is
	#[must_use]
	pub fn is_known(&self, word: &str) -> bool {
		self.lexicon.contains(word)
	}

	/// Normalizes `token`, then only looks for suggestions when it is unknown
	#[must_use]
	pub fn check(&self, token: &str) -> Verdict {
		let word = normalize(token);

		if self.is_known(&word) {
			log::debug!("Word `{word}` was found in the dictionary");
			return Verdict::Known(word);
		}

		let suggestions = self.suggest(&word);
		log::debug!(
			"Word `{word}` wasn't found in the dictionary, {} suggestion(s)",
			suggestions.len()
		);

		Verdict::Misspelled { word, suggestions }
	}
}
