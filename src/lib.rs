//! Weighted Life - nine cellular automata evolving their own rules.
//!
//! Each grid follows a generalized Game of Life in which every neighbor
//! position carries its own integer weight. A cell's *environment* is the sum
//! of the weights of its live neighbors; survival and birth are decided by
//! fixed bands over that value. After a fixed number of steps the grids are
//! ranked by live-cell count, the best weight vectors are copied into the next
//! generation (biased toward the top ranks) and randomly nudged.
//!
//! # Architecture
//!
//! - `schema`: Configuration, thresholds and seed patterns
//! - `compute`: Neighbor topology, weighted environment, the step rule,
//!   single grids and the evolution arena
//!
//! # Example
//!
//! ```rust,no_run
//! use weighted_life::{ArenaConfig, EvolutionArena};
//!
//! let config = ArenaConfig {
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//! let mut arena = EvolutionArena::new(config).unwrap();
//!
//! for _ in 0..1000 {
//!     arena.tick();
//! }
//!
//! println!("{}: {:?}", arena.status_line(), arena.grid_scores());
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::evolution::{ArenaStats, EvolutionArena, GenerationRecord};
pub use compute::{Coord, LiveCells, PopulationGrid, WeightVector};
pub use schema::{ArenaConfig, Pattern, RuleThresholds};
