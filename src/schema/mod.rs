//! Schema module - Configuration and seeding types for the arena.

mod config;
mod seed;

pub use config::*;
pub use seed::*;
