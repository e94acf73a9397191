pub mod board;
pub mod types;

pub use board::Board;
pub use types::{Difficulty, GameOutcome, Mark};
