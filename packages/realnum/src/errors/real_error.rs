use thiserror::Error;

use super::math_error::{
    ConversionOverflowError, Decimal128RangeExceeded, DivideByZeroError, DivisionError,
    OverflowError, OverflowOperation,
};

/// Structured error type for parsing, arithmetic and decoding.
///
/// Every operation that can fail returns either one of the narrow error types
/// from this module (e.g. [`OverflowError`] from `checked_add`) or this enum.
/// The narrow types convert into `RealError` so `?` works across both.
///
/// Checklist for adding a new error:
/// - Add enum case
/// - Add creator function below
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RealError {
    /// A decimal or integer literal that does not match the expected grammar
    #[error("Invalid format: {msg}")]
    InvalidFormat { msg: String },
    #[error("Overflow: {source}")]
    Overflow {
        #[from]
        source: OverflowError,
    },
    #[error("Divide by zero: {source}")]
    DivideByZero {
        #[from]
        source: DivideByZeroError,
    },
    /// The codec received a byte sequence of the wrong size
    #[error("Length mismatch: expected={expected} actual={actual}")]
    LengthMismatch { expected: u64, actual: u64 },
    /// The input of a construction exceeds the representable range
    #[error("Out of range: {msg}")]
    OutOfRange { msg: String },
    #[error("Cannot convert negative value {value} to {target_type}")]
    NegativeValue {
        value: String,
        target_type: &'static str,
    },
    #[error("Invalid hex string: {msg}")]
    InvalidHex { msg: String },
    /// Whenever there is no specific error type available
    #[error("Error parsing into type {target_type}: {msg}")]
    ParseErr {
        /// the target type that was attempted
        target_type: String,
        msg: String,
    },
    #[error("Error serializing type {source_type}: {msg}")]
    SerializeErr {
        /// the source type that was attempted
        source_type: String,
        msg: String,
    },
}

impl RealError {
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        RealError::InvalidFormat { msg: msg.into() }
    }

    pub fn overflow(operation: OverflowOperation) -> Self {
        RealError::Overflow {
            source: OverflowError::new(operation),
        }
    }

    pub fn divide_by_zero() -> Self {
        RealError::DivideByZero {
            source: DivideByZeroError::new(),
        }
    }

    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        RealError::LengthMismatch {
            // Cast is safe because usize is 32 or 64 bit large in all environments we support
            expected: expected as u64,
            actual: actual as u64,
        }
    }

    pub fn out_of_range(msg: impl ToString) -> Self {
        RealError::OutOfRange {
            msg: msg.to_string(),
        }
    }

    pub fn negative_value(value: impl ToString, target_type: &'static str) -> Self {
        RealError::NegativeValue {
            value: value.to_string(),
            target_type,
        }
    }

    pub fn invalid_hex(msg: impl ToString) -> Self {
        RealError::InvalidHex {
            msg: msg.to_string(),
        }
    }

    pub fn parse_err(target: impl Into<String>, msg: impl ToString) -> Self {
        RealError::ParseErr {
            target_type: target.into(),
            msg: msg.to_string(),
        }
    }

    pub fn serialize_err(source: impl Into<String>, msg: impl ToString) -> Self {
        RealError::SerializeErr {
            source_type: source.into(),
            msg: msg.to_string(),
        }
    }
}

impl From<DivisionError> for RealError {
    fn from(source: DivisionError) -> Self {
        match source {
            DivisionError::DivideByZero => Self::divide_by_zero(),
            DivisionError::Overflow => Self::overflow(OverflowOperation::Mul),
        }
    }
}

impl From<ConversionOverflowError> for RealError {
    fn from(source: ConversionOverflowError) -> Self {
        Self::out_of_range(source)
    }
}

impl From<Decimal128RangeExceeded> for RealError {
    fn from(source: Decimal128RangeExceeded) -> Self {
        Self::out_of_range(source)
    }
}

/// The return type of all fallible operations that are not covered by a
/// narrow error type.
pub type RealResult<T> = core::result::Result<T, RealError>;
