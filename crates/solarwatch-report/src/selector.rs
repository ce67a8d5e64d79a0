//! The "pick one of N equivalent phrasings" primitive.
//!
//! All stylistic variety in a report flows through [`PhraseSelector`], so a
//! report is reproducible whenever the selector is: tests inject a
//! [`FixedSelector`], production seeds a [`SeededSelector`] from
//! configuration or OS entropy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses one of `variants` equivalent phrasings.
pub trait PhraseSelector {
    /// Return an index in `0..variants`. Never called with zero variants.
    fn select(&mut self, variants: usize) -> usize;
}

/// Pick a phrase from `variants` through `selector`.
///
/// Returns an empty string for an empty table; out-of-range indices from a
/// misbehaving selector are clamped to the last variant.
pub fn pick<'a>(selector: &mut dyn PhraseSelector, variants: &[&'a str]) -> &'a str {
    if variants.is_empty() {
        return "";
    }
    let index = selector.select(variants.len());
    variants
        .get(index)
        .or_else(|| variants.last())
        .copied()
        .unwrap_or_default()
}

/// Random selection from a seedable generator.
#[derive(Debug, Clone)]
pub struct SeededSelector {
    rng: StdRng,
}

impl SeededSelector {
    /// A selector whose sequence is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A selector seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }
}

impl PhraseSelector for SeededSelector {
    fn select(&mut self, variants: usize) -> usize {
        if variants == 0 {
            return 0;
        }
        self.rng.random_range(0..variants)
    }
}

/// Always selects the same index (modulo the number of variants).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedSelector {
    index: usize,
}

impl FixedSelector {
    /// A selector that always picks `index`.
    pub const fn new(index: usize) -> Self {
        Self { index }
    }
}

impl PhraseSelector for FixedSelector {
    fn select(&mut self, variants: usize) -> usize {
        self.index.checked_rem(variants).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: [&str; 3] = ["one", "two", "three"];

    #[test]
    fn fixed_selector_wraps() {
        let mut selector = FixedSelector::new(4);
        assert_eq!(pick(&mut selector, &VARIANTS), "two");
        assert_eq!(FixedSelector::new(7).select(0), 0);
    }

    #[test]
    fn empty_table_is_empty_phrase() {
        assert_eq!(pick(&mut FixedSelector::default(), &[]), "");
    }

    #[test]
    fn out_of_range_index_is_clamped() {
        struct Broken;
        impl PhraseSelector for Broken {
            fn select(&mut self, _variants: usize) -> usize {
                99
            }
        }
        assert_eq!(pick(&mut Broken, &VARIANTS), "three");
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededSelector::new(42);
        let mut b = SeededSelector::new(42);
        let seq_a: Vec<usize> = (0..32).map(|_| a.select(5)).collect();
        let seq_b: Vec<usize> = (0..32).map(|_| b.select(5)).collect();
        assert_eq!(seq_a, seq_b);
        assert!(seq_a.iter().all(|&i| i < 5));
    }

    #[test]
    fn entropy_selector_stays_in_range() {
        let mut selector = SeededSelector::from_seed_option(None);
        for _ in 0..64 {
            assert!(selector.select(3) < 3);
        }
    }
}
