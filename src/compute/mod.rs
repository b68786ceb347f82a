//! Compute module - The weighted automaton and its evolution.

mod automaton;
mod environment;
mod grid;
mod topology;

pub mod evolution;

pub use automaton::*;
pub use environment::*;
pub use grid::*;
pub use topology::*;
