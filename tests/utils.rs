use spellfix::Dictionary;

#[derive(Debug, thiserror::Error)]
#[error("{0} word failed to be correctly spellchecked")]
struct SpellCheckErrors(usize);

/// Builds a dictionary from `words` and checks that every `good` word is known,
/// every `wrong` word is not, and that `wrong` words get the given suggestions
pub(crate) fn test_word_list(
	words: &str,
	good: &[&str],
	wrong: &[&str],
	suggestions: Option<&[Vec<&str>]>,
) -> Result<(), Box<dyn std::error::Error>> {
	let _ = pretty_env_logger::try_init();

	let dict = Dictionary::from_slice(words)?;

	let mut errors = 0;

	errors += good
		.iter()
		.filter(|w| {
			if dict.is_known(w) {
				log::info!("{w} is indeed fine");
				false
			} else {
				log::error!("{w} is supposed to be fine but is wrong");
				true
			}
		})
		.count();

	errors += wrong
		.iter()
		.filter(|w| {
			if dict.is_known(w) {
				log::error!("{w} is supposed to be wrong but is fine");
				true
			} else {
				log::info!("{w} is indeed wrong");
				false
			}
		})
		.count();

	if let Some(suggs) = suggestions {
		assert_eq!(suggs.len(), wrong.len());

		errors += wrong
			.iter()
			.zip(suggs)
			.filter(|(w, expected)| {
				let found = dict.suggest(w);
				if found == **expected {
					log::info!("{w} got {found:?} as expected");
					false
				} else {
					log::error!("{w} is supposed to get {expected:?} but got {found:?}");
					true
				}
			})
			.count();
	}

	if errors == 0 {
		Ok(())
	} else {
		Err(Box::new(SpellCheckErrors(errors)))
	}
}
