use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Uniform;
use std::time::{SystemTime, UNIX_EPOCH};

/// Chance that a duck moves on a given tick.
pub const MOVE_PROBABILITY: f64 = 0.7;
pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 3;

/// Source of per-duck, per-tick movement.
pub trait Stride {
    /// Distance to advance this tick. Zero means the duck stays put.
    fn next_stride(&mut self) -> u32;
}

/// Random walk: move with `MOVE_PROBABILITY`, speed uniform in `MIN_SPEED..=MAX_SPEED`.
pub struct RandomStride {
    rng: StdRng,
    speed: Uniform<u32>,
    seed: u64,
}

impl RandomStride {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            speed: Uniform::new_inclusive(MIN_SPEED, MAX_SPEED),
            seed,
        }
    }

    /// Seeded from the wall clock in nanoseconds.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Stride for RandomStride {
    fn next_stride(&mut self) -> u32 {
        if self.rng.gen::<f64>() < MOVE_PROBABILITY {
            self.rng.sample(self.speed)
        } else {
            0
        }
    }
}
