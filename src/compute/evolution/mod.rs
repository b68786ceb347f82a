//! Generational selection and mutation over the arena's nine grids.
//!
//! # Overview
//!
//! - **Selection** (`selection`): stable ranking by live-cell count and the
//!   biased slot list that decides which weight vectors survive
//! - **Genome Operations** (`genome`): seeded random weights, shuffling and
//!   `±1` mutation events
//! - **Arena** (`arena`): the nine grids, the step/generation clock and the
//!   boundary that ties selection and mutation together
//!
//! # Example
//!
//! ```rust,no_run
//! use weighted_life::compute::evolution::EvolutionArena;
//! use weighted_life::schema::ArenaConfig;
//!
//! let mut arena = EvolutionArena::new(ArenaConfig::default()).unwrap();
//! loop {
//!     if let Some(record) = arena.tick().boundary {
//!         println!("generation {}: best {:?}", record.generation, record.champion);
//!         break;
//!     }
//! }
//! ```

mod arena;
mod genome;
mod selection;

pub use arena::{ArenaStats, EvolutionArena, GenerationRecord, TickOutcome};
pub use genome::{Perturbation, WeightRng};
pub use selection::{rank, slot_list};
