mod codec;
mod encoding;
mod errors;
mod forward_ref;
mod math;
mod serde;

pub use crate::codec::{encoded_size, from_raw, raw_size, to_raw_vec, FixedWidth};
pub use crate::encoding::{from_hex, to_hex};
pub use crate::errors::{
    ConversionOverflowError, Decimal128RangeExceeded, DivideByZeroError, DivisionError,
    OverflowError, OverflowOperation, RealError, RealResult,
};
pub use crate::math::{
    resize_le_int, reverse_bytes, Decimal128, FixedInt, FixedUint, Int128, Int16, Int256, Int32,
    Int512, Int64, Int8, Uint128, Uint16, Uint256, Uint32, Uint512, Uint64, Uint8,
};
pub use crate::serde::{from_json, to_json_string, to_json_vec};
