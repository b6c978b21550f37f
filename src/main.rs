//! Spellfix CLI
//!
//! Handy test words: `helo`, `cta`

use clap::Parser;
use spellfix::Dictionary;
use std::{
	io::{stdin, stdout, Write},
	path::PathBuf,
};

#[derive(clap::Parser)]
struct Args {
	/// Word(s) to check, separated by whitespace
	word: Option<String>,

	#[arg(long, short)]
	interactive: bool,

	/// Word list, one word per line
	#[arg(long, short, env = "SPELLFIX_DICT", default_value = "dictionary.txt")]
	dictionary: PathBuf,

	/// Number of entries the lexicon is sized for, defaults to the word count
	#[arg(long)]
	capacity: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	pretty_env_logger::init();

	let args = Args::parse();

	let dict = match args.capacity {
		Some(capacity) => Dictionary::from_file_with_capacity(&args.dictionary, capacity)?,
		None => Dictionary::from_file(&args.dictionary)?,
	};
	log::info!(
		"Loaded {} words from {}",
		dict.len(),
		args.dictionary.display()
	);

	if let Some(words) = args.word {
		words
			.split_whitespace()
			.for_each(|word| check_and_print(&dict, word));
		return Ok(());
	}

	if !args.interactive {
		return Err("no action provided".into());
	}

	loop {
		print!("check word(s) ❯ ");
		stdout().flush()?;

		let mut input = String::new();
		if let 0 = stdin().read_line(&mut input)? {
			println!();
			return Ok(());
		};

		input
			.split_whitespace()
			.for_each(|word| check_and_print(&dict, word));
	}
}

fn check_and_print(dict: &Dictionary, word: &str) {
	println!("{}", dict.check(word));
}
