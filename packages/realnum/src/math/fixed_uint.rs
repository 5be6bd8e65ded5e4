use core::fmt;
use core::str::FromStr;

use bnum::BUintD8;
use serde::{de, ser, Deserialize, Deserializer, Serialize};

use crate::errors::{
    ConversionOverflowError, DivideByZeroError, DivisionError, OverflowError, OverflowOperation,
    RealError,
};
use crate::forward_ref::impl_int_ops;

use super::conversion::{resize_le_int, reverse_bytes};

/// An unsigned integer of exactly `BYTES * 8` bits.
///
/// The width lives in the type, never in the value: every `FixedUint<BYTES>`
/// occupies `BYTES` bytes, both in memory and when encoded with
/// [`FixedWidth`](crate::FixedWidth).
///
/// Strings are used for JSON encoding/decoding, such that the full range can
/// be used for clients that convert JSON numbers to floats, like JavaScript
/// and jq.
///
/// # Examples
///
/// Use `try_from` to create instances out of primitive uint types or
/// `from_le_bytes` to provide raw bytes:
///
/// ```
/// # use realnum::Uint64;
/// let a = Uint64::try_from(258u64).unwrap();
/// let b = Uint64::from_le_bytes([2, 1, 0, 0, 0, 0, 0, 0]);
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedUint<const BYTES: usize>(pub(crate) BUintD8<BYTES>);

pub type Uint8 = FixedUint<1>;
pub type Uint16 = FixedUint<2>;
pub type Uint32 = FixedUint<4>;
pub type Uint64 = FixedUint<8>;
pub type Uint128 = FixedUint<16>;
pub type Uint256 = FixedUint<32>;
pub type Uint512 = FixedUint<64>;

impl<const BYTES: usize> FixedUint<BYTES> {
    /// The number of bits of this integer type.
    pub const BITS: u32 = (BYTES * 8) as u32;

    pub const MAX: Self = Self(BUintD8::MAX);
    pub const MIN: Self = Self(BUintD8::ZERO);

    /// Creates a FixedUint(0)
    #[inline]
    pub const fn zero() -> Self {
        Self(BUintD8::ZERO)
    }

    /// Creates a FixedUint(1)
    #[inline]
    pub const fn one() -> Self {
        Self(BUintD8::ONE)
    }

    #[must_use]
    pub const fn from_le_bytes(data: [u8; BYTES]) -> Self {
        Self(BUintD8::from_digits(data))
    }

    #[must_use]
    pub const fn from_be_bytes(data: [u8; BYTES]) -> Self {
        Self::from_le_bytes(reverse_bytes(data))
    }

    /// Returns a copy of the number as little endian bytes.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn to_le_bytes(self) -> [u8; BYTES] {
        *self.0.digits()
    }

    /// Returns a copy of the number as big endian bytes.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn to_be_bytes(self) -> [u8; BYTES] {
        reverse_bytes(*self.0.digits())
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Converts to another width, failing if the value does not fit.
    ///
    /// ```
    /// # use realnum::{Uint64, Uint256};
    /// let wide = Uint256::try_from(7u64).unwrap();
    /// let narrow: Uint64 = wide.resize().unwrap();
    /// assert_eq!(narrow, Uint64::try_from(7u64).unwrap());
    /// assert!(Uint256::MAX.resize::<8>().is_err());
    /// ```
    pub fn resize<const OUT: usize>(self) -> Result<FixedUint<OUT>, ConversionOverflowError> {
        resize_le_int::<BYTES, OUT>(self.to_le_bytes(), false)
            .map(FixedUint::from_le_bytes)
            .ok_or_else(|| ConversionOverflowError::new("FixedUint", "FixedUint"))
    }

    pub fn checked_add(self, other: Self) -> Result<Self, OverflowError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or_else(|| OverflowError::new(OverflowOperation::Add))
    }

    pub fn checked_sub(self, other: Self) -> Result<Self, OverflowError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or_else(|| OverflowError::new(OverflowOperation::Sub))
    }

    pub fn checked_mul(self, other: Self) -> Result<Self, OverflowError> {
        self.0
            .checked_mul(other.0)
            .map(Self)
            .ok_or_else(|| OverflowError::new(OverflowOperation::Mul))
    }

    pub fn checked_div(self, other: Self) -> Result<Self, DivisionError> {
        self.0
            .checked_div(other.0)
            .map(Self)
            .ok_or(DivisionError::DivideByZero)
    }

    pub fn checked_rem(self, other: Self) -> Result<Self, DivideByZeroError> {
        self.0
            .checked_rem(other.0)
            .map(Self)
            .ok_or(DivideByZeroError)
    }

    /// Parses the magnitude part of a literal: hexadecimal with a `0x`/`0X`
    /// prefix, decimal otherwise.
    pub(crate) fn parse_magnitude(s: &str) -> Result<Self, RealError> {
        let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => (hex, 16),
            None => (s, 10),
        };
        if digits.is_empty() {
            return Err(RealError::invalid_format(format!(
                "Parsing Uint{}: received empty string",
                Self::BITS
            )));
        }
        if let Some(c) = digits.chars().find(|c| !c.is_digit(radix)) {
            return Err(RealError::invalid_format(format!(
                "Parsing Uint{}: unexpected character '{c}'",
                Self::BITS
            )));
        }
        // With the digits validated, the only remaining failure is a value that is too large
        BUintD8::from_str_radix(digits, radix)
            .map(Self)
            .map_err(|_| RealError::out_of_range(format!("{s} does not fit into Uint{}", Self::BITS)))
    }
}

impl<const BYTES: usize> Default for FixedUint<BYTES> {
    fn default() -> Self {
        Self::zero()
    }
}

impl_int_ops!(FixedUint);

impl<const BYTES: usize> TryFrom<u128> for FixedUint<BYTES> {
    type Error = ConversionOverflowError;

    fn try_from(value: u128) -> Result<Self, Self::Error> {
        resize_le_int::<16, BYTES>(value.to_le_bytes(), false)
            .map(Self::from_le_bytes)
            .ok_or_else(|| ConversionOverflowError::new("u128", "FixedUint"))
    }
}

impl<const BYTES: usize> TryFrom<u64> for FixedUint<BYTES> {
    type Error = ConversionOverflowError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        resize_le_int::<8, BYTES>(value.to_le_bytes(), false)
            .map(Self::from_le_bytes)
            .ok_or_else(|| ConversionOverflowError::new("u64", "FixedUint"))
    }
}

impl<const BYTES: usize> TryFrom<FixedUint<BYTES>> for u128 {
    type Error = ConversionOverflowError;

    fn try_from(value: FixedUint<BYTES>) -> Result<Self, Self::Error> {
        resize_le_int::<BYTES, 16>(value.to_le_bytes(), false)
            .map(u128::from_le_bytes)
            .ok_or_else(|| ConversionOverflowError::new("FixedUint", "u128"))
    }
}

impl<const BYTES: usize> TryFrom<FixedUint<BYTES>> for u64 {
    type Error = ConversionOverflowError;

    fn try_from(value: FixedUint<BYTES>) -> Result<Self, Self::Error> {
        resize_le_int::<BYTES, 8>(value.to_le_bytes(), false)
            .map(u64::from_le_bytes)
            .ok_or_else(|| ConversionOverflowError::new("FixedUint", "u64"))
    }
}

impl<const BYTES: usize> TryFrom<&str> for FixedUint<BYTES> {
    type Error = RealError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        Self::from_str(val)
    }
}

impl<const BYTES: usize> FromStr for FixedUint<BYTES> {
    type Err = RealError;

    /// Parses a decimal literal, or a hexadecimal one with a `0x` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_magnitude(s)
    }
}

impl<const BYTES: usize> From<FixedUint<BYTES>> for String {
    fn from(original: FixedUint<BYTES>) -> Self {
        original.to_string()
    }
}

impl<const BYTES: usize> fmt::Display for FixedUint<BYTES> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<const BYTES: usize> fmt::Debug for FixedUint<BYTES> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Uint{}({})", Self::BITS, self.0)
    }
}

impl<const BYTES: usize> fmt::LowerHex for FixedUint<BYTES> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl<const BYTES: usize> fmt::UpperHex for FixedUint<BYTES> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl<A, const BYTES: usize> core::iter::Sum<A> for FixedUint<BYTES>
where
    Self: core::ops::Add<A, Output = Self>,
{
    fn sum<I: Iterator<Item = A>>(iter: I) -> Self {
        iter.fold(Self::zero(), core::ops::Add::add)
    }
}

impl<const BYTES: usize> Serialize for FixedUint<BYTES> {
    /// Serializes as an integer string using base 10
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, const BYTES: usize> Deserialize<'de> for FixedUint<BYTES> {
    /// Deserialized from an integer string using base 10
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(FixedUintVisitor::<BYTES>)
    }
}

struct FixedUintVisitor<const BYTES: usize>;

impl<const BYTES: usize> de::Visitor<'_> for FixedUintVisitor<BYTES> {
    type Value = FixedUint<BYTES>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("string-encoded integer")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        FixedUint::try_from(v).map_err(|e| {
            E::custom(format!(
                "invalid Uint{} '{v}' - {e}",
                FixedUint::<BYTES>::BITS
            ))
        })
    }
}

#[cfg(feature = "schema")]
impl<const BYTES: usize> schemars::JsonSchema for FixedUint<BYTES> {
    fn schema_name() -> String {
        format!("Uint{}", Self::BITS)
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        <String as schemars::JsonSchema>::json_schema(gen)
    }
}
