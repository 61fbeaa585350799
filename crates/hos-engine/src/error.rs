use hos_core::HosError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanError {
    #[error(transparent)]
    Core(#[from] HosError),

    #[error("invalid input: {field} = {value}")]
    InvalidInput {
        field: String,
        value: f64,
    },

    #[error("planner made no progress at iteration {iteration} ({remaining_miles:.2} mi remaining)")]
    Stalled {
        iteration:       u64,
        remaining_miles: f64,
    },
}

pub type PlanResult<T> = Result<T, PlanError>;
