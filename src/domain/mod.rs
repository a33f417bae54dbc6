mod algorithm;
mod automaton;
mod bit_grid;
mod grid;
mod rules;
pub mod patterns;

pub use algorithm::StepStrategy;
pub use automaton::Automaton;
pub use bit_grid::{BitGrid, Chunk64};
pub use grid::{Coordinate, Grid, wrap};
pub(crate) use grid::check_dimensions;
pub use patterns::Pattern;
pub use rules::{Rule, TABLE_LEN};
