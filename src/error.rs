//! Error types for binary similarity evaluation.

use thiserror::Error;

/// The main error type for similarity operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimilarityError {
    /// Input kind is not one of the recognized shapes, or two inputs
    /// of different kinds were combined.
    #[error("Type of data not supported: {0}")]
    UnsupportedInputKind(String),

    /// Array inputs that must be compared element-wise differ in length.
    #[error("Length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Length of the first array.
        expected: usize,
        /// Length of the offending array.
        actual: usize,
    },

    /// No built-in or registered formula has this name.
    #[error("Unknown formula: {0}")]
    UnknownFormula(String),

    /// A formula produced a non-finite value (division by zero, log or
    /// sqrt of a non-positive number, inverse trig out of domain).
    #[error("Arithmetic fault in {formula}: result is {value}")]
    ArithmeticFault {
        /// Name of the formula that faulted.
        formula: String,
        /// The non-finite value it produced.
        value: f64,
    },

    /// Invalid evaluator configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for similarity operations.
pub type Result<T> = std::result::Result<T, SimilarityError>;
