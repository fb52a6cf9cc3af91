//! Reference model for model-based testing.
//!
//! The model is a simplified implementation that captures the rules of the
//! pass-and-reveal protocol without the state-machine encoding of the real
//! session. It serves as the oracle against which the real implementation is
//! verified.
//!
//! # Design Principles
//!
//! - Simplicity: The model should be obviously correct
//! - Rules not encoding: Captures WHAT, not HOW
//! - Deterministic: Same inputs produce same outputs

pub mod operation;
mod session;

pub use operation::{Operation, OperationError, OperationResult};
pub use session::{ModelSession, ObservableState};
