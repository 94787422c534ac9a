use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers for the randomized indices.
///
/// Implementations must be shareable across request handlers; each call is an independent draw.
pub trait RandomSource: Send + Sync {
    /// Draws a value in `low..=high`.
    fn uniform_inclusive(&self, low: u8, high: u8) -> u8;
}

/// Unseeded per-thread generator used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn uniform_inclusive(&self, low: u8, high: u8) -> u8 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Deterministic generator for reproducible runs.
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn uniform_inclusive(&self, low: u8, high: u8) -> u8 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(low..=high)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn uniform_inclusive(&self, low: u8, high: u8) -> u8 {
        (**self).uniform_inclusive(low, high)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Arc<T> {
    fn uniform_inclusive(&self, low: u8, high: u8) -> u8 {
        (**self).uniform_inclusive(low, high)
    }
}

/// Picks the seeded generator when a seed is configured, the thread generator otherwise.
pub fn source_for_seed(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandomSource::new(seed)),
        None => Box::new(ThreadRandomSource),
    }
}
