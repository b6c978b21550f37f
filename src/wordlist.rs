use crate::dictionary::InitializeError;
use nom::{
	character::complete::{line_ending, not_line_ending},
	multi::separated_list0,
	Parser,
};
use nom_supreme::ParserExt;
use std::{fs::File, io::Read, path::Path};

/// Known words, one per line of the source text, in file order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct WordList {
	words: Vec<String>,
}

impl WordList {
	pub(crate) fn new(content: &str) -> Result<Self, InitializeError> {
		let parser_err = |e: nom::Err<nom::error::Error<_>>| InitializeError::Parser(e.to_string());

		let (_, lines) = separated_list0(line_ending, not_line_ending)
			.all_consuming()
			.parse(content)
			.map_err(parser_err)?;

		let mut words = Vec::with_capacity(lines.len());
		for (number, line) in lines.into_iter().enumerate() {
			let word = line.trim();
			if word.is_empty() {
				log::debug!("Skipping blank line {} of word list", number + 1);
				continue;
			}
			words.push(word.to_owned());
		}

		Ok(Self { words })
	}

	pub(crate) fn file(path: &Path) -> Result<Self, InitializeError> {
		let mut file = File::open(path)?;
		let mut buffer = String::new();
		file.read_to_string(&mut buffer)?;
		Self::new(&buffer)
	}

	pub(crate) fn into_words(self) -> Vec<String> {
		self.words
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn can_parse_lines() -> Result<(), InitializeError> {
		let list = WordList::new("hello\nworld\n")?;
		assert_eq!(list.into_words(), ["hello", "world"]);

		let list = WordList::new("no\r\nfinal\r\nnewline")?;
		assert_eq!(list.into_words(), ["no", "final", "newline"]);

		Ok(())
	}

	#[test]
	fn skips_blank_lines_and_padding() -> Result<(), InitializeError> {
		let list = WordList::new("\n  cat \n\n\t\ndog\n")?;
		assert_eq!(list.into_words(), ["cat", "dog"]);

		assert!(WordList::new("")?.into_words().is_empty());

		Ok(())
	}

	#[test]
	fn rejects_stray_carriage_return() {
		assert!(matches!(
			WordList::new("cat\rdog\n"),
			Err(InitializeError::Parser(_))
		));
	}
}
