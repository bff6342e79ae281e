//! Random source used by the generator.
//!
//! Every `rand::Rng` is a `RandomSource`, so callers pass an `StdRng` seeded
//! with `seed_from_u64` for reproducible quizzes or an entropy-seeded one for
//! normal runs.

use rand::{seq::index, seq::SliceRandom, Rng};

pub trait RandomSource {
    /// `amount` distinct indices from `0..len`, in random order.
    /// `amount` is clamped to `len`.
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize>;

    /// Uniform in-place permutation.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// One index from `0..len`; `None` when `len` is zero.
    fn choice(&mut self, len: usize) -> Option<usize>;
}

impl<R: Rng> RandomSource for R {
    fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(self, len, amount.min(len)).into_vec()
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        SliceRandom::shuffle(items, self);
    }

    fn choice(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.gen_range(0..len))
        }
    }
}
