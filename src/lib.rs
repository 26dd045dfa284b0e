/*!

Spelling correction & Fuzzy search based on a linear scan of the dictionary (LinSpell).

Every dictionary term within a maximum edit distance of the input is a suggestion.
The edit distance is a bounded Damerau-Levenshtein distance (optimal string alignment) with early termination,
suggestions are ranked by edit distance, then by frequency count.

#### Usage of LinSpell Library

```rust
use linspell_rs::{Dictionary, LinSpell, LookupConfig, Verbosity};

//a frequency dictionary: term -> count
let mut dictionary = Dictionary::new();
dictionary.insert("the", 23_135_851_162);
dictionary.insert("thee", 2_134_503);
dictionary.insert("than", 1_020_414_930);
// or load it from a text file of term/count pairs
// dictionary.load_dictionary(Path::new("data/frequency_dictionary_en_82_765.txt"), 0, 1, " ")?;

let max_distance = 2; //maximum edit distance per lookup
let config = LookupConfig::default()
    .with_max_distance(max_distance)
    .with_verbosity(Verbosity::Top); //Top, Closest, All
let linspell = LinSpell::new(dictionary, config);

//lookup suggestions for single-word input strings
let suggestions = linspell.lookup("teh");
assert_eq!(suggestions[0].term, "the");
assert_eq!(suggestions[0].distance, 1);

//all suggestions within max_distance, ordered by distance, then by frequency
let all = linspell.lookup_with("teh", &config.with_verbosity(Verbosity::All));
assert_eq!(all.len(), 2);
```

*/

mod dictionary;
mod edit_distance;
mod linspell;
mod policy;

pub use dictionary::{Dictionary, DictionaryProvider, parse_words};
pub use edit_distance::{EditDistance, UNBOUNDED, damerau_levenshtein_osa};
pub use linspell::{
    DEFAULT_MAX_DISTANCE, DEFAULT_TOP_RESULTS_LIMIT, LinSpell, LookupConfig, SuggestItem,
    Verbosity, lookup, lookup_cancellable,
};

/// Error type for configuration, dictionary I/O and cancelled lookups.
#[derive(Debug, thiserror::Error)]
pub enum LinSpellError {
    #[error("top_results_limit must be at least 1")]
    ZeroResultsLimit,
    #[error("unknown verbosity: {0} (expected top, closest or all)")]
    UnknownVerbosity(String),
    #[error("dictionary i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("lookup cancelled")]
    Cancelled,
}
