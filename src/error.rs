//! Error type shared by every fallible engine operation.

/// Validation failures raised at construction or seeding time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LifeError {
    #[error("Grid dimensions must be non-zero (got {width}x{height})")]
    InvalidDimension { width: usize, height: usize },
    #[error("Rule table `{table}` must have 9 entries (got {len})")]
    InvalidRuleTable { table: &'static str, len: usize },
    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),
    #[error("Invalid rulestring: {0}")]
    InvalidRuleString(String),
    #[error("Density must be within [0, 1] (got {0})")]
    InvalidDensity(f64),
}

pub type Result<T> = std::result::Result<T, LifeError>;
