use spellfix::{Dictionary, InitializeError};
use std::io::Write;

#[test]
fn reads_word_list_from_file() -> Result<(), Box<dyn std::error::Error>> {
	let mut file = tempfile::NamedTempFile::new()?;
	writeln!(file, "hello\r\nworld\r\n")?;

	let dict = Dictionary::from_file(file.path())?;
	assert_eq!(dict.len(), 2);
	assert!(dict.is_known("world"));
	assert_eq!(dict.suggest("wrold"), ["world"]);

	let dict = Dictionary::from_file_with_capacity(file.path(), 30)?;
	assert_eq!(dict.lexicon().bucket_count(), 40);

	Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
	let dir = tempfile::tempdir().expect("temp dir is created");
	let result = Dictionary::from_file(&dir.path().join("missing.txt"));
	assert!(matches!(result, Err(InitializeError::Io(_))));
}
