// LinSpell: Spelling correction & Fuzzy search by linear scan of the dictionary.
//
// LinSpell does not require edit candidate generation or specialized data structures like a BK-tree or Norvig's algorithm.
// Every dictionary term is checked, but cheap pruning (term length, term frequency) and an edit distance with
// early termination keep the constants small: for dictionaries up to a few hundred thousand terms this is faster
// and requires less memory than index based approaches. LinSpell is language and character set independent.

// Copyright (C) 2025 Wolf Garbe
// Author: Wolf Garbe wolf.garbe@seekstorm.com
// Maintainer: Wolf Garbe wolf.garbe@seekstorm.com
// URL: https://github.com/wolfgarbe/LinSpell
//
// MIT License
// Copyright (c) 2025 Wolf Garbe
// Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated
// documentation files (the "Software"), to deal in the Software without restriction, including without limitation
// the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software,
// and to permit persons to whom the Software is furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.
// https://opensource.org/licenses/MIT

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::atomic::{self, AtomicBool};

use crate::LinSpellError;
use crate::dictionary::{Dictionary, DictionaryProvider};
use crate::edit_distance::{EditDistance, FastVec};
use crate::policy::{AllPolicy, ClosestPolicy, SuggestionPolicy, TopPolicy};

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Suggested correct spelling for a given input word.
///
/// Two suggestions are equal if their terms are equal, regardless of distance and count.
pub struct SuggestItem {
    /// The suggested correctly spelled word.
    pub term: String,
    /// Edit distance between searched for word and suggestion.
    pub distance: usize,
    /// Frequency of suggestion in the dictionary (a measure of how common the word is).
    pub count: u64,
}

impl SuggestItem {
    pub fn new(term: impl Into<String>, distance: usize, count: u64) -> SuggestItem {
        SuggestItem {
            term: term.into(),
            distance,
            count,
        }
    }

    /// Order by distance ascending, then by frequency count descending, then by term.
    pub fn cmp_rank(&self, other: &SuggestItem) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.count.cmp(&self.count))
            .then_with(|| self.term.cmp(&other.term))
    }
}

impl PartialEq for SuggestItem {
    fn eq(&self, other: &SuggestItem) -> bool {
        self.term == other.term
    }
}
impl Eq for SuggestItem {}

impl Hash for SuggestItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.term.hash(state);
    }
}

impl fmt::Display for SuggestItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.term, self.distance, self.count)
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Controls the closeness/quantity of returned spelling suggestions.
pub enum Verbosity {
    /// Top suggestions with the highest term frequency of the suggestions of smallest edit distance found,
    /// at most `top_results_limit` of them.
    #[default]
    Top,
    /// All suggestions of smallest edit distance found, suggestions ordered by term frequency.
    Closest,
    /// All suggestions within max_distance, suggestions ordered by edit distance, then by term frequency (slower, no early termination)
    All,
}

impl FromStr for Verbosity {
    type Err = LinSpellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Verbosity::Top),
            "closest" | "all-of-smallest-distance" => Ok(Verbosity::Closest),
            "all" => Ok(Verbosity::All),
            _ => Err(LinSpellError::UnknownVerbosity(s.to_string())),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verbosity::Top => "top",
            Verbosity::Closest => "closest",
            Verbosity::All => "all",
        })
    }
}

pub const DEFAULT_MAX_DISTANCE: usize = 2;
pub const DEFAULT_TOP_RESULTS_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Parameters of a lookup.
pub struct LookupConfig {
    /// The maximum edit distance between input and suggested words (inclusive).
    pub max_distance: usize,
    /// The value controlling the quantity/closeness of the returned suggestions.
    pub verbosity: Verbosity,
    /// Maximum number of suggestions returned with `Verbosity::Top`.
    pub top_results_limit: NonZeroUsize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            verbosity: Verbosity::Top,
            top_results_limit: NonZeroUsize::new(DEFAULT_TOP_RESULTS_LIMIT)
                .unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl LookupConfig {
    /// Creates a lookup configuration, rejecting a `top_results_limit` of 0.
    pub fn new(
        max_distance: usize,
        verbosity: Verbosity,
        top_results_limit: usize,
    ) -> Result<Self, LinSpellError> {
        Ok(Self {
            max_distance,
            verbosity,
            top_results_limit: NonZeroUsize::new(top_results_limit)
                .ok_or(LinSpellError::ZeroResultsLimit)?,
        })
    }

    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_top_results_limit(mut self, top_results_limit: usize) -> Result<Self, LinSpellError> {
        self.top_results_limit =
            NonZeroUsize::new(top_results_limit).ok_or(LinSpellError::ZeroResultsLimit)?;
        Ok(self)
    }
}

/// Find suggested spellings for a given input word in a dictionary.
/// Returned suggestions are sorted by distance ascending, then by frequency count descending.
///
/// # Arguments
///
/// * `input` - The word being spell checked. Case sensitive.
/// * `config` - Maximum edit distance, verbosity and result limit.
/// * `dictionary` - The terms and their frequency counts.
///
/// # Examples
///
/// ```
/// use linspell_rs::{LookupConfig, lookup};
/// use std::collections::HashMap;
///
/// let dictionary: HashMap<String, u64> = [("house".to_string(), 231_310_420)].into();
/// let suggestions = lookup("hous", &LookupConfig::default(), &dictionary);
/// assert_eq!(suggestions[0].term, "house");
/// assert_eq!(suggestions[0].distance, 1);
/// ```
pub fn lookup<D: DictionaryProvider>(
    input: &str,
    config: &LookupConfig,
    dictionary: &D,
) -> Vec<SuggestItem> {
    let never = AtomicBool::new(false);
    lookup_cancellable(input, config, dictionary, &never).unwrap_or_default()
}

/// Like [`lookup`], but stops scanning as soon as `cancel` is set,
/// e.g. because the user typed another character and the lookup is superseded.
///
/// Returns `LinSpellError::Cancelled` if the scan was abandoned.
pub fn lookup_cancellable<D: DictionaryProvider>(
    input: &str,
    config: &LookupConfig,
    dictionary: &D,
    cancel: &AtomicBool,
) -> Result<Vec<SuggestItem>, LinSpellError> {
    // probably most lookups will be matches, lets get them straight O(1) from the hash table
    if config.verbosity != Verbosity::All {
        if let Some(count) = dictionary.frequency(input) {
            return Ok(vec![SuggestItem::new(input, 0, count)]);
        }
    }

    match config.verbosity {
        Verbosity::Top => scan(
            input,
            config.max_distance,
            dictionary,
            TopPolicy::new(config.max_distance, config.top_results_limit.get()),
            cancel,
        ),
        Verbosity::Closest => scan(
            input,
            config.max_distance,
            dictionary,
            ClosestPolicy::new(config.max_distance),
            cancel,
        ),
        Verbosity::All => scan(
            input,
            config.max_distance,
            dictionary,
            AllPolicy::new(config.max_distance),
            cancel,
        ),
    }
}

// Linear search will be O(n), but with a few tweaks it will be almost always faster than a BK-tree.
fn scan<D: DictionaryProvider, P: SuggestionPolicy>(
    input: &str,
    max_distance: usize,
    dictionary: &D,
    mut policy: P,
    cancel: &AtomicBool,
) -> Result<Vec<SuggestItem>, LinSpellError> {
    let input_chars: FastVec<char> = input.chars().collect();
    let input_len = input_chars.len();

    // early termination - input is too long to possibly match any term
    if let Some(max_term_length) = dictionary.max_term_length() {
        if input_len.saturating_sub(max_distance) > max_term_length {
            return Ok(Vec::new());
        }
    }

    let mut edit_distance = EditDistance::new();
    let mut scored = 0usize;

    for (term, count) in dictionary.entries() {
        if cancel.load(atomic::Ordering::Relaxed) {
            tracing::debug!(input, scored, "lookup cancelled");
            return Err(LinSpellError::Cancelled);
        }

        let budget = policy.budget();

        // skip if the length difference alone is bigger than the current budget
        let term_len = term.chars().count();
        if term_len.abs_diff(input_len) > budget {
            continue;
        }

        if policy.skip(term, count) {
            continue;
        }

        scored += 1;
        let Some(distance) = edit_distance.compare_chars(&input_chars, term, budget) else {
            continue;
        };
        // an empty input yields the exact term length, which may exceed the budget
        if distance > budget || distance > max_distance {
            continue;
        }

        policy.offer(term, distance, count);
    }

    let suggestions = policy.into_suggestions();
    tracing::trace!(
        input,
        entries = dictionary.len(),
        scored,
        results = suggestions.len(),
        "lookup finished"
    );
    Ok(suggestions)
}

/// LinSpell spell checker and corrector: a dictionary plus the default lookup configuration.
///
/// The dictionary is owned and can only be changed through `dictionary_mut`,
/// so it can't change while a lookup is running.
#[derive(Debug, Clone, Default)]
pub struct LinSpell<D = Dictionary> {
    dictionary: D,
    config: LookupConfig,
}

impl<D: DictionaryProvider> LinSpell<D> {
    /// Creates a new LinSpell instance.
    ///
    /// # Arguments
    ///
    /// * `dictionary` - The terms and their frequency counts.
    /// * `config` - The configuration used by `lookup`.
    pub fn new(dictionary: D, config: LookupConfig) -> Self {
        Self { dictionary, config }
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    pub fn dictionary_mut(&mut self) -> &mut D {
        &mut self.dictionary
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LookupConfig) {
        self.config = config;
    }

    /// Get the number of entries in the dictionary.
    pub fn get_dictionary_size(&self) -> usize {
        self.dictionary.len()
    }

    /// Find suggested spellings for a given input word, using the configuration given at construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use linspell_rs::{Dictionary, LinSpell, LookupConfig};
    ///
    /// let mut dictionary = Dictionary::new();
    /// dictionary.insert("house", 231_310_420);
    /// dictionary.insert("mouse", 15_000_000);
    ///
    /// let linspell = LinSpell::new(dictionary, LookupConfig::default());
    /// let suggestions = linspell.lookup("hous");
    /// assert_eq!(suggestions.len(), 1);
    /// assert_eq!(suggestions[0].term, "house");
    /// ```
    pub fn lookup(&self, input: &str) -> Vec<SuggestItem> {
        lookup(input, &self.config, &self.dictionary)
    }

    /// Find suggested spellings for a given input word, overriding the configuration for this call.
    pub fn lookup_with(&self, input: &str, config: &LookupConfig) -> Vec<SuggestItem> {
        lookup(input, config, &self.dictionary)
    }

    /// Cancellable lookup, see [`lookup_cancellable`].
    pub fn lookup_cancellable(
        &self,
        input: &str,
        config: &LookupConfig,
        cancel: &AtomicBool,
    ) -> Result<Vec<SuggestItem>, LinSpellError> {
        lookup_cancellable(input, config, &self.dictionary, cancel)
    }
}
