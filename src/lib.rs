//! Two-state cellular automaton engine.
//!
//! A generalization of Conway's Game of Life: a fixed-size toroidal grid of
//! binary cells advanced synchronously under a birth/survival rule given as
//! two lookup tables indexed by live neighbor count.
//!
//! ```rust
//! use life_engine::{Automaton, Rule};
//!
//! let mut life = Automaton::with_rule(40, 20, Rule::conway())?;
//! life.seed_pattern("glider", (0, 18))?;
//! life.step_n(4);
//! assert_eq!(life.live_cell_count(), 5);
//! # Ok::<(), life_engine::LifeError>(())
//! ```

// Domain layer - grid, rules, patterns and stepping
pub mod domain;

// Serde-backed construction
pub mod config;

pub mod error;

// Re-exports for convenience
pub use config::{AutomatonConfig, SeedConfig};
pub use domain::{Automaton, Coordinate, Grid, Pattern, Rule, StepStrategy, patterns};
pub use error::{LifeError, Result};
