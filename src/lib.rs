pub mod capture;
pub mod engine;
pub mod error;
pub mod goban;
pub mod stone;

/// Board coordinate as (row, col), 0-indexed.
pub type Point = (u8, u8);

pub use capture::captured_chains;
pub use engine::{Engine, GameState};
pub use error::GoError;
pub use goban::{Captures, Goban, DEFAULT_SIZE};
pub use stone::Stone;
