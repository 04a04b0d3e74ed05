//! Core error types for the MoneyMapp planning engine.
//!
//! Every fallible operation in this crate returns [`Result`]. Simulation
//! failures are split into caller-correctable input problems and plans that
//! can never complete.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the planning engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Simulation failed: {0}")]
    Simulation(#[from] SimulationError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised by the debt and goal simulators.
///
/// Both kinds are raised synchronously and never retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Malformed or infeasible records. The caller can fix the input and retry.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The plan cannot finish within the safety cap.
    #[error(
        "Plan does not complete within {max_months} months; increase your minimum payment or extra payment"
    )]
    NonConvergence { max_months: u32 },

    /// A savings goal cannot be funded within the given number of months.
    #[error(
        "Goal is not reached within {months} months; increase your contribution or allow more time"
    )]
    GoalNotReached { months: u32 },
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Returns true when a debt plan or savings goal cannot finish in time.
    pub fn is_non_convergence(&self) -> bool {
        matches!(
            self,
            Error::Simulation(
                SimulationError::NonConvergence { .. } | SimulationError::GoalNotReached { .. }
            )
        )
    }

    /// Returns true when the caller can correct the request.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::Simulation(SimulationError::InvalidInput(_)) | Error::Validation(_)
        )
    }
}
