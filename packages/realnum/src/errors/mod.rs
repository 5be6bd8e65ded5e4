mod math_error;
mod real_error;

pub use math_error::{
    ConversionOverflowError, Decimal128RangeExceeded, DivideByZeroError, DivisionError,
    OverflowError, OverflowOperation,
};
pub use real_error::{RealError, RealResult};
