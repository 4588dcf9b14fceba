use lopa_core::VertexId;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Seeded randomness source for randomized walks.
///
/// ChaCha20 so that a fixed seed reproduces the exact walk sequence
/// regardless of platform.
pub struct WalkRng {
    rng: ChaCha20Rng,
}

impl WalkRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    /// Biased coin: true with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.gen_range(0..items.len())]
    }

    /// Uniform start vertex in `[0, n)`.
    pub fn vertex(&mut self, n: usize) -> VertexId {
        self.rng.gen_range(0..n)
    }
}
