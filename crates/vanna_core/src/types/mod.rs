//! Core shared types.
//!
//! This module provides:
//! - `error`: Structured error types for solver operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`SolverError`] from `error`

pub mod error;

// Re-export commonly used types at module level
pub use error::SolverError;
