use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("{parameter} must be at least 1 (got {value})")]
    InvalidConfiguration {
        parameter: &'static str,
        value: usize,
    },

    #[error("not enough feasible assignments: {found} found, {requested} requested")]
    InsufficientResults { found: usize, requested: usize },

    #[error("{candidates} candidate assignments exceed the configured limit of {limit}")]
    SearchSpaceTooLarge { candidates: u128, limit: u64 },
}
