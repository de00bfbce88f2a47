//! Random episode selection for shuffle mode
//!
//! Shuffle does not reorder the playlist. "Next" draws a uniformly random
//! index instead, and may draw the current episode again.

use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

/// Source of shuffle indices
///
/// `pick` is only called with `len > 0` and must return a value in `0..len`.
pub trait IndexPicker {
    /// Draw an index in `0..len`
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform picker backed by the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIndex;

impl IndexPicker for RandomIndex {
    fn pick(&mut self, len: usize) -> usize {
        thread_rng().gen_range(0..len)
    }
}

/// Uniform picker with a fixed seed, for reproducible sessions and tests
#[derive(Debug, Clone)]
pub struct SeededIndex {
    rng: StdRng,
}

impl SeededIndex {
    /// Create a picker from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl IndexPicker for SeededIndex {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

impl<F> IndexPicker for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}
