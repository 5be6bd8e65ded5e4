use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OverflowOperation {
    Add,
    Sub,
    Mul,
    Pow,
    Convert,
}

impl core::fmt::Display for OverflowOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Cannot {operation} with given operands")]
pub struct OverflowError {
    pub operation: OverflowOperation,
}

impl OverflowError {
    pub fn new(operation: OverflowOperation) -> Self {
        Self { operation }
    }
}

/// The error returned by [`TryFrom`] conversions that overflow, for example
/// when converting from [`Uint256`] to [`Uint64`].
///
/// [`Uint256`]: crate::Uint256
/// [`Uint64`]: crate::Uint64
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Error converting {source_type} to {target_type}")]
pub struct ConversionOverflowError {
    pub source_type: &'static str,
    pub target_type: &'static str,
}

impl ConversionOverflowError {
    pub fn new(source_type: &'static str, target_type: &'static str) -> Self {
        Self {
            source_type,
            target_type,
        }
    }
}

#[derive(Error, Debug, Default, PartialEq, Eq)]
#[error("Cannot divide by zero")]
pub struct DivideByZeroError;

impl DivideByZeroError {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DivisionError {
    #[error("Divide by zero")]
    DivideByZero,

    #[error("Overflow in division")]
    Overflow,
}

impl From<DivideByZeroError> for DivisionError {
    fn from(_: DivideByZeroError) -> Self {
        DivisionError::DivideByZero
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Decimal128 range exceeded")]
pub struct Decimal128RangeExceeded;
