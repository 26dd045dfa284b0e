// Bounded Damerau-Levenshtein edit distance (optimal string alignment).
//
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

use std::{cmp::min, mem};

use smallvec::SmallVec;

const VEC_SIZE: usize = 32;
pub(crate) type FastVec<T> = SmallVec<[T; VEC_SIZE]>;

/// Passing this as `max_distance` disables the ceiling: the distance is always computed.
pub const UNBOUNDED: usize = usize::MAX;

/// Damerau-Levenshtein edit distance, like Levenshtein but allows for adjacent transpositions.
/// Optimal string alignment version (OSA): each substring can only be edited once.
/// E.g., "CA" to "ABC" has an edit distance of 2 for Damerau-Levenshtein, but a distance of 3 when using the optimal string alignment algorithm.
///
/// Returns the edit distance, >= 0 representing the number of edits required to transform one string to the other,
/// or None if the distance is greater than the specified max_distance.
/// If either string is empty, the length of the other string is returned, regardless of max_distance.
///
/// https://en.wikipedia.org/wiki/Damerau%E2%80%93Levenshtein_distance#Optimal_string_alignment_distance
pub fn damerau_levenshtein_osa(a: &str, b: &str, max_distance: usize) -> Option<usize> {
    EditDistance::new().compare(a, b, max_distance)
}

/// Reusable edit distance calculator.
///
/// Owns the character and row buffers, so comparing one input against a whole
/// dictionary does not allocate per dictionary term.
#[derive(Debug, Default, Clone)]
pub struct EditDistance {
    source: FastVec<char>,
    target: FastVec<char>,
    rows: Rows,
}

impl EditDistance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounded OSA distance between `a` and `b`, see [`damerau_levenshtein_osa`].
    pub fn compare(&mut self, a: &str, b: &str, max_distance: usize) -> Option<usize> {
        self.source.clear();
        self.source.extend(a.chars());
        self.target.clear();
        self.target.extend(b.chars());
        self.rows.osa(&self.source, &self.target, max_distance)
    }

    /// Same as [`EditDistance::compare`], with the first string already split into chars.
    pub fn compare_chars(&mut self, a: &[char], b: &str, max_distance: usize) -> Option<usize> {
        self.target.clear();
        self.target.extend(b.chars());
        self.rows.osa(a, &self.target, max_distance)
    }
}

/// Rolling rows of the dynamic programming table.
#[derive(Debug, Default, Clone)]
struct Rows {
    prev_two: FastVec<usize>,
    prev: FastVec<usize>,
    curr: FastVec<usize>,
}

impl Rows {
    fn osa(&mut self, a: &[char], b: &[char], max_distance: usize) -> Option<usize> {
        // shorter string first: the inner loop then spins over the longer one
        let (mut s, mut t) = if a.len() > b.len() { (b, a) } else { (a, b) };
        if s.is_empty() {
            return Some(t.len());
        }

        // suffix common to both strings can be ignored
        let suffix = s
            .iter()
            .rev()
            .zip(t.iter().rev())
            .take_while(|(x, y)| x == y)
            .count();
        s = &s[..s.len() - suffix];
        t = &t[..t.len() - suffix];

        // prefix common to both strings can be ignored
        let prefix = s.iter().zip(t).take_while(|(x, y)| x == y).count();
        s = &s[prefix..];
        t = &t[prefix..];

        let s_len = s.len();
        let t_len = t.len();

        // all of the shorter string matches prefix and/or suffix of the longer one:
        // only the deletes of the additional chars remain
        if s_len == 0 {
            return (t_len <= max_distance).then_some(t_len);
        }

        let len_diff = t_len - s_len;
        let max_distance = if max_distance > t_len {
            t_len
        } else if len_diff > max_distance {
            return None;
        } else {
            max_distance
        };
        let have_max = max_distance < t_len;

        // cells beyond the ceiling are clamped, nothing above max_distance is of interest
        let cap = max_distance + 1;
        // no need to look left of the lower right diagonal - (max_distance - len_diff)
        // or right of the upper left diagonal + max_distance
        let band_left = max_distance - len_diff;

        self.prev_two.clear();
        self.prev_two.resize(t_len + 1, cap);
        self.prev.clear();
        self.prev.extend((0..=t_len).map(|j| min(j, cap)));
        self.curr.clear();
        self.curr.resize(t_len + 1, cap);

        for i in 1..=s_len {
            let s_char = s[i - 1];
            let j_start = if i > band_left { i - band_left } else { 1 };
            let j_end = min(t_len, i + max_distance);

            self.curr[j_start - 1] = if j_start == 1 { min(i, cap) } else { cap };

            for j in j_start..=j_end {
                let t_char = t[j - 1];
                let current = if s_char == t_char {
                    self.prev[j - 1]
                } else {
                    // substitution, deletion, insertion
                    let mut current =
                        min(self.prev[j - 1], min(self.prev[j], self.curr[j - 1])) + 1;
                    // transposition
                    if i > 1 && j > 1 && s_char == t[j - 2] && s[i - 2] == t_char {
                        current = min(current, self.prev_two[j - 2] + 1);
                    }
                    current
                };
                self.curr[j] = min(current, cap);
            }

            if j_end < t_len {
                self.curr[j_end + 1] = cap;
            }

            // the length difference diagonal never decreases: once above max_distance, so is the result
            if have_max && self.curr[i + len_diff] > max_distance {
                return None;
            }

            mem::swap(&mut self.prev_two, &mut self.prev);
            mem::swap(&mut self.prev, &mut self.curr);
        }

        let distance = self.prev[t_len];
        (distance <= max_distance).then_some(distance)
    }
}
