//! Random generation and mutation of weight vectors.

use rand::prelude::*;

use crate::compute::{NEIGHBOR_COUNT, WeightVector};
use crate::schema::MutationConfig;

/// A single `±1` change applied to one weight slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Perturbation {
    /// Index of the mutation event that produced this change.
    pub event: usize,
    /// Grid whose vector was changed.
    pub grid: usize,
    /// Weight slot.
    pub slot: usize,
    /// `-1` or `+1`.
    pub delta: i32,
}

/// Random number generator wrapper for arena operations.
pub struct WeightRng {
    rng: StdRng,
}

impl WeightRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a weight vector with every slot in the inclusive `bounds`.
    pub fn random_weights(&mut self, bounds: (i32, i32)) -> WeightVector {
        WeightVector::random(&mut self.rng, bounds)
    }

    /// `width` times a multiplier drawn from the half-open `range`.
    ///
    /// An empty range yields `range.0 * width`.
    pub fn width_multiple(&mut self, width: usize, range: (usize, usize)) -> usize {
        if range.0 >= range.1 {
            return range.0 * width;
        }
        self.rng.gen_range(range.0..range.1) * width
    }

    /// Shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Apply a random number of mutation events to `weights`.
    ///
    /// Each event targets one vector uniformly and nudges a random number of
    /// uniformly chosen slots by `±1`. Slots and vectors may be hit repeatedly.
    pub fn mutate(
        &mut self,
        weights: &mut [WeightVector],
        config: &MutationConfig,
    ) -> Vec<Perturbation> {
        let mut applied = Vec::new();
        if weights.is_empty() {
            return applied;
        }

        let events = self.rng.gen_range(config.events.0..=config.events.1);
        for event in 0..events {
            let grid = self.rng.gen_range(0..weights.len());
            let hits = self
                .rng
                .gen_range(config.perturbations.0..=config.perturbations.1);

            for _ in 0..hits {
                let slot = self.rng.gen_range(0..NEIGHBOR_COUNT);
                let delta = if self.rng.gen_bool(0.5) { 1 } else { -1 };
                weights[grid].nudge(slot, delta);
                applied.push(Perturbation {
                    event,
                    grid,
                    slot,
                    delta,
                });
            }
        }

        applied
    }

    /// Borrow the underlying generator (for pattern generation).
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}
