use ahash::AHashMap;
use itertools::Itertools;
use std::collections::HashMap;
use std::fs::File;
use std::hash::BuildHasher;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::LinSpellError;

/// Source of dictionary terms and their frequency counts for a lookup.
///
/// Implementations must present a consistent snapshot for the duration of a single lookup.
pub trait DictionaryProvider {
    /// Frequency count of a term, if the term is in the dictionary (exact, case sensitive match).
    fn frequency(&self, term: &str) -> Option<u64>;

    /// All terms with their frequency counts, in any order.
    fn entries(&self) -> impl Iterator<Item = (&str, u64)> + '_;

    /// Number of terms.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length in chars of the longest term, if known.
    fn max_term_length(&self) -> Option<usize> {
        None
    }
}

impl<S: BuildHasher> DictionaryProvider for HashMap<String, u64, S> {
    fn frequency(&self, term: &str) -> Option<u64> {
        self.get(term).copied()
    }

    fn entries(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.iter().map(|(term, count)| (term.as_str(), *count))
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Dictionary of unique correct spelling words, and the frequency count for each word.
pub struct Dictionary {
    words: AHashMap<Box<str>, u64>,
    /// Maximum dictionary term length in chars
    max_term_length: usize,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: AHashMap::with_capacity(capacity),
            max_term_length: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, term: &str) -> Option<u64> {
        self.words.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.words.contains_key(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.words.iter().map(|(term, count)| (term.as_ref(), *count))
    }

    /// Length in chars of the longest term ever added.
    pub fn max_term_length(&self) -> usize {
        self.max_term_length
    }

    /// Set the frequency count of a term. An existing count is overwritten.
    ///
    /// Returns the previous count of the term, if any.
    pub fn insert(&mut self, term: impl Into<String>, count: u64) -> Option<u64> {
        let term = term.into();
        self.track_length(&term);
        self.words.insert(term.into_boxed_str(), count)
    }

    /// Add to the frequency count of a term, saturating at `u64::MAX`.
    ///
    /// Returns the updated count.
    pub fn add_count(&mut self, term: &str, count: u64) -> u64 {
        if let Some(entry) = self.words.get_mut(term) {
            *entry = entry.saturating_add(count);
            return *entry;
        }
        self.track_length(term);
        self.words.insert(term.into(), count);
        count
    }

    fn track_length(&mut self, term: &str) {
        let term_len = term.chars().count();
        if term_len > self.max_term_length {
            self.max_term_length = term_len;
        }
    }

    /// Load multiple dictionary entries from a file of word/frequency count pairs.
    /// Existing entries are overwritten by the counts in the file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path+filename of the file.
    /// * `term_index` - The column position of the word.
    /// * `count_index` - The column position of the frequency count.
    /// * `separator` - Separator between word and frequency. A whitespace separator splits at any run of whitespace.
    ///
    /// Returns the number of loaded entries. Malformed lines are skipped.
    pub fn load_dictionary(
        &mut self,
        path: &Path,
        term_index: usize,
        count_index: usize,
        separator: &str,
    ) -> Result<usize, LinSpellError> {
        let file = File::open(path)?;
        let sr = BufReader::new(file);

        let mut loaded = 0;
        for line in sr.lines() {
            let line_str = line?;
            if self.load_dictionary_line(&line_str, term_index, count_index, separator) {
                loaded += 1;
            }
        }

        tracing::debug!(
            path = %path.display(),
            loaded,
            words = self.len(),
            "dictionary loaded"
        );
        Ok(loaded)
    }

    /// Load single dictionary entry from word/frequency count pair.
    ///
    /// # Arguments
    ///
    /// * `line` - word/frequency pair.
    /// * `term_index` - The column position of the word.
    /// * `count_index` - The column position of the frequency count.
    /// * `separator` - Separator between word and frequency
    ///
    /// Returns false if the line is malformed and nothing was loaded.
    pub fn load_dictionary_line(
        &mut self,
        line: &str,
        term_index: usize,
        count_index: usize,
        separator: &str,
    ) -> bool {
        let line_parts: Vec<&str> = if separator.trim().is_empty() {
            line.split_whitespace().collect()
        } else {
            line.split(separator).collect()
        };
        if line_parts.len() < 2 {
            return false;
        }

        let (Some(key), Some(count)) = (line_parts.get(term_index), line_parts.get(count_index))
        else {
            tracing::debug!(line, term_index, count_index, "dictionary line without column");
            return false;
        };
        let Ok(count) = count.trim().parse::<u64>() else {
            tracing::debug!(line, "dictionary line with invalid count");
            return false;
        };

        self.insert(*key, count);
        true
    }

    /// Create a frequency dictionary from a text corpus, counting every word of the text.
    /// Make sure the corpus does not contain spelling errors or invalid terms,
    /// and that the word frequency is representative.
    ///
    /// Returns the number of words read.
    pub fn create_dictionary(&mut self, path: &Path) -> Result<usize, LinSpellError> {
        let file = File::open(path)?;
        let sr = BufReader::new(file);

        let mut word_count = 0;
        for line in sr.lines() {
            let line_str = line?;
            word_count += self.create_dictionary_line(&line_str);
        }

        tracing::debug!(
            path = %path.display(),
            word_count,
            words = self.len(),
            "dictionary created from corpus"
        );
        Ok(word_count)
    }

    /// Count the words of a single line of corpus text. Returns the number of words.
    pub fn create_dictionary_line(&mut self, text: &str) -> usize {
        let words = parse_words(text);
        for word in &words {
            self.add_count(word, 1);
        }
        words.len()
    }

    /// Write the dictionary to a file of word/frequency count pairs.
    /// Useful when the dictionary was built with create_dictionary.
    /// Entries are sorted by frequency count descending.
    ///
    /// # Arguments
    ///
    /// * `path` - The path+filename of the file.
    /// * `separator` - Separator between word and frequency
    pub fn save_dictionary(&self, path: &Path, separator: &str) -> Result<(), LinSpellError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        for (term, count) in self
            .words
            .iter()
            .sorted_unstable_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)))
        {
            writeln!(writer, "{}{}{}", term, separator, count)?;
        }
        writer.flush()?;

        tracing::debug!(path = %path.display(), words = self.len(), "dictionary saved");
        Ok(())
    }
}

impl DictionaryProvider for Dictionary {
    fn frequency(&self, term: &str) -> Option<u64> {
        self.get(term)
    }

    fn entries(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.iter()
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn max_term_length(&self) -> Option<usize> {
        Some(self.max_term_length)
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl<S: Into<String>> Extend<(S, u64)> for Dictionary {
    fn extend<I: IntoIterator<Item = (S, u64)>>(&mut self, iter: I) {
        for (term, count) in iter {
            self.insert(term, count);
        }
    }
}

/// Split a text into words, language independent (e.g. works with Chinese characters).
///
/// A word starts with a letter and continues with letters and apostrophes.
/// Letter groups joined by a hyphen form a single word, e.g. "tick-tick". Letter case is preserved.
pub fn parse_words(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        //start of term
        if !c.is_alphabetic() {
            continue;
        }
        let mut end = start + c.len_utf8();

        // allows apostrophes as part of the word
        while let Some(&(i, c)) = chars.peek() {
            if !(c.is_alphabetic() || c == '\'' || c == '’') {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }

        // hyphen followed by a letter continues the word
        loop {
            let mut lookahead = chars.clone();
            match (lookahead.next(), lookahead.peek()) {
                (Some((_, '-')), Some(&(_, c))) if c.is_alphabetic() => {
                    chars.next();
                    while let Some(&(i, c)) = chars.peek() {
                        if !c.is_alphabetic() {
                            break;
                        }
                        end = i + c.len_utf8();
                        chars.next();
                    }
                }
                _ => break,
            }
        }

        words.push(&text[start..end]);
    }

    words
}
