//! Core library for life-like cellular automata on a bounded board.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod pos;
pub mod rule;

pub use board::{Board, Cell};
pub use config::SimConfig;
pub use engine::{Simulation, initialize, step};
pub use error::Error;
pub use pos::Pos2;
pub use rule::{NeighborMask, Rule};
