//! RNG module - tile spawn randomness
//!
//! Wraps a seedable `StdRng` so the same seed replays the same sequence of
//! spawned tiles (useful for tests and for reproducing a game with `--seed`).
//! Interactive play seeds from OS entropy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Tile, SPAWN_FOUR_ABOVE, SPAWN_ROLL_RANGE};

/// Random source used by the grid when spawning tiles.
#[derive(Debug, Clone)]
pub struct TileRng {
    inner: StdRng,
}

impl TileRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is given, entropy otherwise.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// Generate random value in range [0, max)
    pub fn range(&mut self, max: usize) -> usize {
        self.inner.gen_range(0..max)
    }

    /// Value of the next spawned tile: 4 when the roll lands above 89, else 2.
    pub fn tile_value(&mut self) -> Tile {
        let roll = self.inner.gen_range(0..SPAWN_ROLL_RANGE);
        if roll > SPAWN_FOUR_ABOVE {
            4
        } else {
            2
        }
    }
}

impl Default for TileRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
