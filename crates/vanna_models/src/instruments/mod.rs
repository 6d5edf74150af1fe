//! Financial instrument definitions.
//!
//! This module provides the European option contract together with its
//! side enum and validation errors.
//!
//! # Instrument Types
//!
//! - [`EuropeanOption`]: validated contract with on-demand pricing and Greeks
//! - [`OptionSide`]: Call/Put enum with case-insensitive parsing
//! - [`InstrumentError`]: construction and mutation errors
//!
//! # Examples
//!
//! ```
//! use vanna_models::instruments::{EuropeanOption, OptionSide};
//!
//! let mut option = EuropeanOption::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionSide::Call).unwrap();
//! assert!((option.price() - 10.45).abs() < 0.01);
//!
//! // Mutate and reprice
//! option.set_volatility(0.3).unwrap();
//! assert!(option.price() > 10.45);
//! ```

mod error;
mod european;
mod side;

pub use error::InstrumentError;
pub use european::EuropeanOption;
pub use side::OptionSide;
