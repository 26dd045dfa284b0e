// Acceptance and pruning rules of the three verbosity levels.

use std::cmp::Ordering;

use crate::linspell::SuggestItem;

/// Decides which scanned dictionary terms survive, and how far the scan still has to look.
pub(crate) trait SuggestionPolicy {
    /// Current maximum edit distance of interest.
    fn budget(&self) -> usize;

    /// Whether a term can be skipped before its edit distance is calculated.
    fn skip(&self, _term: &str, _count: u64) -> bool {
        false
    }

    /// Offer a term whose edit distance is within the configured maximum.
    fn offer(&mut self, term: &str, distance: usize, count: u64);

    /// Final suggestions, ordered by distance ascending, then by count descending.
    fn into_suggestions(self) -> Vec<SuggestItem>;
}

/// Top suggestions of smallest edit distance, at most `limit`.
pub(crate) struct TopPolicy {
    budget: usize,
    limit: usize,
    // kept ordered, never longer than limit
    best: Vec<SuggestItem>,
}

impl TopPolicy {
    pub(crate) fn new(max_distance: usize, limit: usize) -> Self {
        Self {
            budget: max_distance,
            limit,
            best: Vec::new(),
        }
    }
}

impl SuggestionPolicy for TopPolicy {
    fn budget(&self) -> usize {
        self.budget
    }

    // if there are already enough ed1 suggestions, a term with a smaller count can't make it:
    // no need to calculate damlev
    fn skip(&self, term: &str, count: u64) -> bool {
        if self.best.len() < self.limit || self.best[0].distance != 1 {
            return false;
        }
        match self.best.last() {
            Some(last) => match count.cmp(&last.count) {
                Ordering::Less => true,
                Ordering::Equal => term > last.term.as_str(),
                Ordering::Greater => false,
            },
            None => false,
        }
    }

    fn offer(&mut self, term: &str, distance: usize, count: u64) {
        match self.best.first().map(|best| distance.cmp(&best.distance)) {
            Some(Ordering::Greater) => return,
            Some(Ordering::Equal) => {}
            Some(Ordering::Less) | None => {
                self.best.clear();
                self.budget = distance;
            }
        }

        let item = SuggestItem::new(term, distance, count);
        let position = self
            .best
            .partition_point(|held| held.cmp_rank(&item) == Ordering::Less);
        if position < self.limit {
            self.best.insert(position, item);
            self.best.truncate(self.limit);
        }
    }

    fn into_suggestions(self) -> Vec<SuggestItem> {
        self.best
    }
}

/// All suggestions of smallest edit distance.
pub(crate) struct ClosestPolicy {
    budget: usize,
    suggestions: Vec<SuggestItem>,
}

impl ClosestPolicy {
    pub(crate) fn new(max_distance: usize) -> Self {
        Self {
            budget: max_distance,
            suggestions: Vec::new(),
        }
    }
}

impl SuggestionPolicy for ClosestPolicy {
    fn budget(&self) -> usize {
        self.budget
    }

    fn offer(&mut self, term: &str, distance: usize, count: u64) {
        match self.suggestions.first().map(|best| distance.cmp(&best.distance)) {
            Some(Ordering::Greater) => return,
            Some(Ordering::Equal) => {}
            // remove all existing suggestions of higher distance,
            // from now on only calculate damlev up to the smallest distance found so far
            Some(Ordering::Less) | None => {
                self.suggestions.clear();
                self.budget = distance;
            }
        }
        self.suggestions.push(SuggestItem::new(term, distance, count));
    }

    fn into_suggestions(mut self) -> Vec<SuggestItem> {
        self.suggestions.sort_unstable_by(SuggestItem::cmp_rank);
        self.suggestions
    }
}

/// All suggestions within the maximum edit distance, no early termination.
pub(crate) struct AllPolicy {
    max_distance: usize,
    suggestions: Vec<SuggestItem>,
}

impl AllPolicy {
    pub(crate) fn new(max_distance: usize) -> Self {
        Self {
            max_distance,
            suggestions: Vec::new(),
        }
    }
}

impl SuggestionPolicy for AllPolicy {
    fn budget(&self) -> usize {
        self.max_distance
    }

    fn offer(&mut self, term: &str, distance: usize, count: u64) {
        self.suggestions.push(SuggestItem::new(term, distance, count));
    }

    fn into_suggestions(mut self) -> Vec<SuggestItem> {
        self.suggestions.sort_unstable_by(SuggestItem::cmp_rank);
        self.suggestions
    }
}
