//! MoneyMapp Core - planning models, simulators, and services.
//!
//! This crate holds the computational side of MoneyMapp: debt payoff
//! simulation under snowball/avalanche strategies and savings goal
//! projection. It performs no I/O; callers supply the records and receive
//! fully computed plans.

pub mod constants;
pub mod debts;
pub mod errors;
pub mod goals;
pub mod options;
pub mod utils;

pub use options::SimulationOptions;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
