//! Random alias generation.
//!
//! Aliases are drawn from `A-Z`, `a-z` and `0-9`. Generation makes no
//! uniqueness promise; collisions are caught by the store's unique constraint.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Alias length used when none is configured.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Characters an alias may be built from.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Source of aliases for mappings saved without one.
///
/// Injected into [`crate::application::services::ShortenerService`] so tests
/// can substitute a seeded or mocked generator.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Returns a string of exactly `length` characters from [`ALPHABET`].
    fn generate(&self, length: usize) -> String;
}

/// Builds an alias of `length` characters using `rng`.
pub fn generate_alias<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

/// Generator backed by the thread-local RNG. Used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAliasGenerator;

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self, length: usize) -> String {
        generate_alias(&mut rand::rng(), length)
    }
}

/// Deterministic generator: the same seed always yields the same sequence.
#[derive(Debug)]
pub struct SeededAliasGenerator {
    rng: Mutex<StdRng>,
}

impl SeededAliasGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl AliasGenerator for SeededAliasGenerator {
    fn generate(&self, length: usize) -> String {
        // A poisoned lock still holds a usable RNG state.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        generate_alias(&mut *rng, length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn in_alphabet(alias: &str) -> bool {
        alias.bytes().all(|b| ALPHABET.contains(&b))
    }

    #[test]
    fn test_random_alias_has_requested_length() {
        let generator = RandomAliasGenerator;

        assert_eq!(generator.generate(DEFAULT_ALIAS_LENGTH).len(), 6);
        assert_eq!(generator.generate(1).len(), 1);
        assert_eq!(generator.generate(32).len(), 32);
    }

    #[test]
    fn test_zero_length_is_empty() {
        assert!(RandomAliasGenerator.generate(0).is_empty());
    }

    #[test]
    fn test_random_alias_uses_alphabet() {
        let generator = RandomAliasGenerator;

        for _ in 0..200 {
            let alias = generator.generate(DEFAULT_ALIAS_LENGTH);
            assert!(in_alphabet(&alias), "unexpected character in {alias}");
        }
    }

    #[test]
    fn test_random_aliases_vary() {
        let generator = RandomAliasGenerator;
        let aliases: HashSet<String> = (0..100).map(|_| generator.generate(10)).collect();

        assert!(aliases.len() > 90);
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let a = SeededAliasGenerator::new(42);
        let b = SeededAliasGenerator::new(42);

        for _ in 0..10 {
            assert_eq!(a.generate(8), b.generate(8));
        }
    }

    #[test]
    fn test_seeded_generator_differs_by_seed() {
        let a = SeededAliasGenerator::new(1);
        let b = SeededAliasGenerator::new(2);

        let from_a: Vec<String> = (0..5).map(|_| a.generate(8)).collect();
        let from_b: Vec<String> = (0..5).map(|_| b.generate(8)).collect();

        assert_ne!(from_a, from_b);
    }

    #[test]
    fn test_seeded_alias_uses_alphabet() {
        let generator = SeededAliasGenerator::new(7);
        let alias = generator.generate(64);

        assert_eq!(alias.len(), 64);
        assert!(in_alphabet(&alias));
    }
}
