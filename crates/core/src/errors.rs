//! Core error types for the report generation engine.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (from the hosting application's database layer) are converted to these
//! types by the repository implementations.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use crate::quarter::QuarterError;
use crate::reports::ReportError;
use crate::valuation::ValuationError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the report engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Valuation error: {0}")]
    Valuation(#[from] ValuationError),

    #[error("Quarter reconciliation error: {0}")]
    Quarter(#[from] QuarterError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for report input parameters.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
