//! Weighted neighborhood environment.
//!
//! The environment of a cell is the sum of the weights whose neighbor is
//! alive. With all-ones weights it is the classic live-neighbor count.

use std::fmt;
use std::ops::{Index, IndexMut};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::topology::{Coord, GridBounds, LiveCells, NEIGHBOR_COUNT};

/// Per-neighbor influence weights, indexed like [`super::NEIGHBOR_OFFSETS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightVector(pub [i32; NEIGHBOR_COUNT]);

impl WeightVector {
    /// Every neighbor contributes 1.
    pub const ONES: Self = Self([1; NEIGHBOR_COUNT]);

    pub const fn new(weights: [i32; NEIGHBOR_COUNT]) -> Self {
        Self(weights)
    }

    /// Draw each weight uniformly from the inclusive `bounds`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: (i32, i32)) -> Self {
        let mut weights = [0; NEIGHBOR_COUNT];
        for w in &mut weights {
            *w = rng.gen_range(bounds.0..=bounds.1);
        }
        Self(weights)
    }

    /// Add `delta` to one slot. No clamping.
    #[inline]
    pub fn nudge(&mut self, slot: usize, delta: i32) {
        self.0[slot] += delta;
    }

    #[inline]
    pub fn as_array(&self) -> &[i32; NEIGHBOR_COUNT] {
        &self.0
    }
}

impl Index<usize> for WeightVector {
    type Output = i32;

    #[inline]
    fn index(&self, k: usize) -> &i32 {
        &self.0[k]
    }
}

impl IndexMut<usize> for WeightVector {
    #[inline]
    fn index_mut(&mut self, k: usize) -> &mut i32 {
        &mut self.0[k]
    }
}

impl fmt::Display for WeightVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Compute the weighted environment of `coord`.
///
/// Walks the full offset table and skips out-of-bounds neighbors, so the
/// weight used for a neighbor never depends on which other neighbors exist.
#[inline]
pub fn environment(
    coord: Coord,
    weights: &WeightVector,
    live: &LiveCells,
    bounds: GridBounds,
) -> i32 {
    bounds
        .indexed_neighbors(coord)
        .filter(|(_, n)| live.contains(n))
        .map(|(k, _)| weights[k])
        .sum()
}
