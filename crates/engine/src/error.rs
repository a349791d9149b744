//! The module contains the errors the engine can throw.
//!
//! The errors are:
//!
//! - [`Validation`] thrown when a candidate record violates field rules. It
//!   carries the full field to message mapping produced by the validator.
//! - [`KeyNotFound`] thrown when a cash flow id is not in the store.
//!
//!  [`Validation`]: EngineError::Validation
//!  [`KeyNotFound`]: EngineError::KeyNotFound
use std::collections::HashMap;

use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("invalid cash flow data")]
    Validation(HashMap<String, String>),
}
