//! Frequency-weighted ergonomics metrics.
//!
//! Each metric enumerates every n-gram that can be formed by taking one key
//! from each of several hand or finger substrings, and sums the corpus
//! counts of those n-grams.

use crate::corpus::{Count, FrequencyModel};
use crate::keyboard::Keyboard;
use itertools::iproduct;

/// Trigrams typed left-right-left or right-left-right.
pub fn alternate_score(kb: &Keyboard, cf: &FrequencyModel) -> Count {
    trigram_sum(cf, kb.left(), kb.right(), kb.left())
        + trigram_sum(cf, kb.right(), kb.left(), kb.right())
}

/// Single finger bigrams: two different keys typed by the same finger.
pub fn sfb_score(kb: &Keyboard, cf: &FrequencyModel) -> Count {
    kb.groups()
        .map(|group| {
            iproduct!(group.iter().copied(), group.iter().copied())
                .filter(|(a, b)| a != b)
                .map(|(a, b)| cf.bigram(a, b))
                .sum::<Count>()
        })
        .sum()
}

/// Two keys on one hand followed by the other hand, counted in both
/// typing directions.
pub fn roll_score(kb: &Keyboard, cf: &FrequencyModel) -> Count {
    roll_sum(cf, kb.left(), kb.right()) + roll_sum(cf, kb.right(), kb.left())
}

/// Three keys on one hand across adjacent fingers in one direction.
/// Left hand runs from the pinky inwards, right hand mirrors it.
pub fn three_roll_score(kb: &Keyboard, cf: &FrequencyModel) -> Count {
    let left: Count = (0..2)
        .map(|i| trigram_sum(cf, kb.group(i), kb.group(i + 1), kb.group(i + 2)))
        .sum();

    let right: Count = (6..8)
        .rev()
        .map(|i| trigram_sum(cf, kb.group(i), kb.group(i - 1), kb.group(i - 2)))
        .sum();

    left + right
}

/// The objective of the "combined" target: alternation plus rolls minus SFBs.
pub fn combined_score(kb: &Keyboard, cf: &FrequencyModel) -> Count {
    alternate_score(kb, cf) + roll_score(kb, cf) - sfb_score(kb, cf)
}

fn trigram_sum(cf: &FrequencyModel, a: &[char], b: &[char], c: &[char]) -> Count {
    iproduct!(a.iter().copied(), b.iter().copied(), c.iter().copied())
        .map(|(x, y, z)| cf.trigram(x, y, z))
        .sum()
}

fn roll_sum(cf: &FrequencyModel, same: &[char], other: &[char]) -> Count {
    iproduct!(same.iter().copied(), same.iter().copied(), other.iter().copied())
        .map(|(x, y, z)| cf.trigram(x, y, z) + cf.trigram(z, y, x))
        .sum()
}
