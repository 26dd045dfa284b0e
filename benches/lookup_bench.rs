// Criterion benchmarks for linspell_rs.
//
// The dictionary is synthetic: pseudo-random lowercase terms with Zipf-like
// counts, so the benchmarks need no data files.
//
// Run:
//   cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use linspell_rs::{Dictionary, LookupConfig, Verbosity, damerau_levenshtein_osa, lookup};

// ---------------------------------------------------------------------------
// Synthetic dictionary
// ---------------------------------------------------------------------------

const DICTIONARY_SIZE: usize = 100_000;

/// Deterministic linear congruential generator.
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }
}

fn synthetic_dictionary(size: usize) -> Dictionary {
    let mut rng = Lcg(0x5eed);
    let mut dictionary = Dictionary::with_capacity(size);
    let mut rank = 1u64;
    while dictionary.len() < size {
        let len = 3 + (rng.next_u64() % 9) as usize;
        let term: String = (0..len)
            .map(|_| char::from(b'a' + (rng.next_u64() % 26) as u8))
            .collect();
        if !dictionary.contains(&term) {
            dictionary.insert(term, 1_000_000_000 / rank);
            rank += 1;
        }
    }
    dictionary
}

/// Misspell every dictionary term by swapping two adjacent chars.
fn misspelled_inputs(dictionary: &Dictionary, count: usize) -> Vec<String> {
    dictionary
        .iter()
        .take(count)
        .map(|(term, _)| {
            let mut chars: Vec<char> = term.chars().collect();
            chars.swap(0, 1);
            chars.into_iter().collect()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_edit_distance(c: &mut Criterion) {
    c.bench_function("damerau_levenshtein_osa max 2", |b| {
        b.iter(|| {
            damerau_levenshtein_osa(
                black_box("spellchecker"),
                black_box("spelchekcer"),
                black_box(2),
            )
        })
    });
    c.bench_function("damerau_levenshtein_osa early termination", |b| {
        b.iter(|| {
            damerau_levenshtein_osa(
                black_box("spellchecker"),
                black_box("fuzzysearch!"),
                black_box(2),
            )
        })
    });
}

fn bench_lookup(c: &mut Criterion) {
    let dictionary = synthetic_dictionary(DICTIONARY_SIZE);
    let inputs = misspelled_inputs(&dictionary, 16);

    for verbosity in [Verbosity::Top, Verbosity::Closest, Verbosity::All] {
        let config = LookupConfig::default().with_verbosity(verbosity);
        c.bench_function(&format!("lookup {verbosity} 100k terms"), |b| {
            b.iter(|| {
                for input in &inputs {
                    black_box(lookup(black_box(input), &config, &dictionary));
                }
            })
        });
    }

    let config = LookupConfig::default();
    let (exact, _) = dictionary.iter().next().unwrap_or(("", 0));
    c.bench_function("lookup exact match 100k terms", |b| {
        b.iter(|| black_box(lookup(black_box(exact), &config, &dictionary)))
    });
}

criterion_group!(benches, bench_edit_distance, bench_lookup);
criterion_main!(benches);
