//! Weighted life rule.
//!
//! One step reads a single snapshot of the live cells:
//! 1. Survival: each live cell stays alive if its environment is in the
//!    survival band. Every in-bounds neighbor becomes a birth candidate.
//! 2. Birth: each candidate (live or not) is added if its environment is in
//!    the birth band.

use crate::schema::RuleThresholds;

use super::environment::{WeightVector, environment};
use super::topology::{GridBounds, LiveCells};

/// Compute the next live set from `live`.
pub fn step(
    live: &LiveCells,
    weights: &WeightVector,
    thresholds: &RuleThresholds,
    bounds: GridBounds,
) -> LiveCells {
    let mut next = LiveCells::new();
    let mut candidates = LiveCells::new();

    for &cell in live {
        if thresholds
            .survival
            .contains(environment(cell, weights, live, bounds))
        {
            next.insert(cell);
        }
        candidates.extend(bounds.neighbors(cell));
    }

    for cell in candidates {
        if thresholds
            .birth
            .contains(environment(cell, weights, live, bounds))
        {
            next.insert(cell);
        }
    }

    next
}
