//! Random alias generation.
//!
//! A single ChaCha-based [`StdRng`] is seeded once from operating system
//! entropy and shared behind a mutex, so rapid or concurrent calls never
//! restart from correlated seeds.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Symbols an alias is drawn from: `A-Z`, `a-z`, `0-9`.
pub const ALIAS_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Source of random alias candidates.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Produces exactly `length` characters drawn uniformly from [`ALIAS_CHARSET`].
    fn generate(&self, length: usize) -> String;
}

/// Alias generator backed by a process-wide CSPRNG.
pub struct RandomAliasGenerator {
    rng: Mutex<StdRng>,
}

impl RandomAliasGenerator {
    /// Seeds the generator from operating system entropy.
    ///
    /// # Errors
    ///
    /// Returns an error if the system random number generator is unavailable.
    pub fn from_os_entropy() -> Result<Self, getrandom::Error> {
        let mut seed = <StdRng as SeedableRng>::Seed::default();
        getrandom::fill(&mut seed)?;

        Ok(Self::from_rng(StdRng::from_seed(seed)))
    }

    /// Wraps an already seeded generator. Useful for reproducible sequences.
    pub fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self, length: usize) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        (0..length)
            .map(|_| char::from(ALIAS_CHARSET[rng.random_range(0..ALIAS_CHARSET.len())]))
            .collect()
    }
}
