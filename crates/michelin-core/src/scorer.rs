// crates/michelin-core/src/scorer.rs

//! String-similarity scoring used by the location matcher.
//!
//! The matcher prepares every gazetteer entry once through [`Scorer::prepare`]
//! and then compares the prepared query against the prepared candidates on
//! each lookup. Scores are integers on a 0–100 scale.

use crate::text::token_sort_key;

/// A similarity scorer working on a 0–100 scale.
///
/// Implementors must be `Send + Sync` so a matcher can be shared between
/// threads without locking.
pub trait Scorer: Send + Sync {
    /// Turn raw (already accent-folded) text into the form `compare` expects.
    fn prepare(&self, text: &str) -> String;

    /// Score two prepared strings. `100` means identical.
    fn compare(&self, a: &str, b: &str) -> u8;
}

/// Word-order-insensitive similarity.
///
/// Both sides are reduced to their sorted token list (see
/// [`token_sort_key`]) and compared with the Indel-based ratio from
/// `rapidfuzz`. `"saint paul"` and `"paul saint"` score 100.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSortRatio;

impl Scorer for TokenSortRatio {
    fn prepare(&self, text: &str) -> String {
        token_sort_key(text)
    }

    fn compare(&self, a: &str, b: &str) -> u8 {
        if a.is_empty() || b.is_empty() {
            return 0;
        }
        let ratio = rapidfuzz::fuzz::ratio(a.chars(), b.chars());
        to_percent(ratio)
    }
}

/// Scale a `0.0..=1.0` ratio to an integer percentage, rounding half to even.
fn to_percent(ratio: f64) -> u8 {
    (ratio * 100.0).round_ties_even().clamp(0.0, 100.0) as u8
}

/// Find the best candidate for an already prepared query.
///
/// Returns the index of the highest-scoring candidate and its score. When
/// several candidates share the top score the earliest one wins. An empty
/// candidate list yields `None`.
pub fn best_match<'a, S, I>(scorer: &S, query: &str, candidates: I) -> Option<(usize, u8)>
where
    S: Scorer + ?Sized,
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(usize, u8)> = None;
    for (idx, candidate) in candidates.into_iter().enumerate() {
        let score = scorer.compare(query, candidate);
        match best {
            Some((_, top)) if top >= score => {}
            _ => best = Some((idx, score)),
        }
        if score == 100 {
            break;
        }
    }
    best
}
