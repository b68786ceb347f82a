//! Seed patterns for populating a grid's live cells.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Predefined patterns for (re)initializing a grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Uniform draws from the centre third of the grid.
    CenterThird {
        /// Number of draws. Duplicates collapse, so fewer cells may result.
        count: usize,
    },
    /// Uniform draws across the whole grid.
    Uniform {
        /// Number of draws.
        count: usize,
    },
    /// Explicit `(col, row)` cells.
    Custom {
        /// Cells outside the grid are dropped.
        cells: Vec<(usize, usize)>,
    },
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern::CenterThird { count: 0 }
    }
}

impl Pattern {
    /// Generate `(col, row)` cells for a `width` x `height` grid.
    ///
    /// The result may contain duplicates; callers collect it into a set.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Vec<(usize, usize)> {
        match self {
            Pattern::CenterThird { count } => {
                let third_w = width / 3;
                let third_h = height / 3;
                if third_w == 0 || third_h == 0 {
                    return Vec::new();
                }
                (0..*count)
                    .map(|_| {
                        (
                            rng.gen_range(0..third_w) + third_w,
                            rng.gen_range(0..third_h) + third_h,
                        )
                    })
                    .collect()
            }
            Pattern::Uniform { count } => {
                if width == 0 || height == 0 {
                    return Vec::new();
                }
                (0..*count)
                    .map(|_| (rng.gen_range(0..width), rng.gen_range(0..height)))
                    .collect()
            }
            Pattern::Custom { cells } => cells
                .iter()
                .copied()
                .filter(|&(col, row)| col < width && row < height)
                .collect(),
        }
    }
}
