//! Selection of the generation-stepping implementation.
//!
//! Both strategies read from the same immutable previous generation and
//! produce identical results; they differ only in how the work is scheduled.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStrategy {
    /// Cell-by-cell on the calling thread
    #[default]
    Serial,
    /// Rows evaluated on the rayon thread pool
    Parallel,
}

impl StepStrategy {
    pub fn all() -> Vec<StepStrategy> {
        vec![StepStrategy::Serial, StepStrategy::Parallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            StepStrategy::Serial => "Serial",
            StepStrategy::Parallel => "Parallel",
        }
    }
}
