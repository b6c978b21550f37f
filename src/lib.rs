//! spellfix
//!
//! Single edit spelling suggestions over a word list, backed by a fixed-size
//! chained hash set.

mod chain;
mod dictionary;
mod lexicon;
mod lookup;
mod node;
mod suggest;
mod wordlist;

pub use chain::{Chain, Iter};
pub use dictionary::{Dictionary, InitializeError};
pub use lexicon::{CapacityError, LexiconSet};
pub use lookup::{normalize, Verdict};
