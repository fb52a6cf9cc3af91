//! Deterministic test harness for Undercover.
//!
//! Seeded implementation of the `Environment` trait plus the tools the
//! integration tests use: a reference model of the reveal protocol and
//! frequency tallies for checking that role assignment is fair.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation for model-based
//! testing. Operations are applied to both the model and real implementation,
//! and their observable states are compared.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;
pub mod sim_env;
pub mod stats;

pub use model::{ModelSession, ObservableState, Operation, OperationError, OperationResult};
pub use sim_env::SimEnv;
pub use stats::{Tally, binomial};
