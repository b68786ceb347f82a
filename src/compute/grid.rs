//! A single evolving grid: live cells plus the weight vector driving them.

use rand::Rng;

use crate::schema::{Pattern, RuleThresholds};

use super::automaton;
use super::environment::WeightVector;
use super::topology::{Coord, GridBounds, LiveCells};

/// One of the arena's independent populations.
#[derive(Debug, Clone)]
pub struct PopulationGrid {
    live: LiveCells,
    weights: WeightVector,
    bounds: GridBounds,
}

impl PopulationGrid {
    /// Create an empty grid.
    pub fn new(bounds: GridBounds, weights: WeightVector) -> Self {
        Self {
            live: LiveCells::new(),
            weights,
            bounds,
        }
    }

    /// Create a grid with the given live cells. Out-of-bounds cells are dropped.
    pub fn with_cells<I>(bounds: GridBounds, weights: WeightVector, cells: I) -> Self
    where
        I: IntoIterator<Item = Coord>,
    {
        let live = cells.into_iter().filter(|&c| bounds.contains(c)).collect();
        Self {
            live,
            weights,
            bounds,
        }
    }

    /// Advance one step.
    pub fn tick(&mut self, thresholds: &RuleThresholds) {
        self.live = automaton::step(&self.live, &self.weights, thresholds, self.bounds);
    }

    /// Fitness: the number of live cells.
    #[inline]
    pub fn score(&self) -> usize {
        self.live.len()
    }

    /// Replace the live cells with `count` draws from the centre third.
    pub fn reseed<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        self.reseed_with(&Pattern::CenterThird { count }, rng);
    }

    /// Replace the live cells with a generated pattern.
    pub fn reseed_with<R: Rng + ?Sized>(&mut self, pattern: &Pattern, rng: &mut R) {
        self.live = pattern
            .generate(self.bounds.width, self.bounds.height, rng)
            .into_iter()
            .map(Coord::from)
            .collect();
    }

    /// Remove every live cell.
    pub fn clear(&mut self) {
        self.live = LiveCells::new();
    }

    /// Flip one cell. Returns `false` (and does nothing) when out of bounds.
    pub fn toggle(&mut self, coord: Coord) -> bool {
        if !self.bounds.contains(coord) {
            return false;
        }
        if !self.live.remove(&coord) {
            self.live.insert(coord);
        }
        true
    }

    #[inline]
    pub fn live_cells(&self) -> &LiveCells {
        &self.live
    }

    #[inline]
    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    /// Install the next generation's weights.
    pub(crate) fn set_weights(&mut self, weights: WeightVector) {
        self.weights = weights;
    }

    #[inline]
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }
}
