use core::fmt;
use core::ops::Neg;
use core::str::FromStr;

use bnum::BIntD8;
use serde::{de, ser, Deserialize, Deserializer, Serialize};

use crate::errors::{
    ConversionOverflowError, DivisionError, OverflowError, OverflowOperation, RealError,
};
use crate::forward_ref::impl_int_ops;

use super::conversion::{resize_le_int, reverse_bytes};
use super::fixed_uint::FixedUint;

/// A signed two's complement integer of exactly `BYTES * 8` bits.
///
/// Like [`FixedUint`], the width is part of the type and the encoding always
/// takes `BYTES` bytes.
///
/// # Examples
///
/// ```
/// # use realnum::Int64;
/// let a = Int64::try_from(-258i64).unwrap();
/// let b = Int64::from_le_bytes([0xfe, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
/// assert_eq!(a, b);
/// assert!(a.is_negative());
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedInt<const BYTES: usize>(pub(crate) BIntD8<BYTES>);

pub type Int8 = FixedInt<1>;
pub type Int16 = FixedInt<2>;
pub type Int32 = FixedInt<4>;
pub type Int64 = FixedInt<8>;
pub type Int128 = FixedInt<16>;
pub type Int256 = FixedInt<32>;
pub type Int512 = FixedInt<64>;

impl<const BYTES: usize> FixedInt<BYTES> {
    pub const BITS: u32 = (BYTES * 8) as u32;

    pub const MAX: Self = Self(BIntD8::MAX);
    pub const MIN: Self = Self(BIntD8::MIN);

    #[inline]
    pub const fn zero() -> Self {
        Self(BIntD8::ZERO)
    }

    #[inline]
    pub const fn one() -> Self {
        Self(BIntD8::ONE)
    }

    /// Interprets the bytes as a little endian two's complement number.
    #[must_use]
    pub const fn from_le_bytes(data: [u8; BYTES]) -> Self {
        Self(BIntD8::from_bits(FixedUint::from_le_bytes(data).0))
    }

    #[must_use]
    pub const fn from_be_bytes(data: [u8; BYTES]) -> Self {
        Self::from_le_bytes(reverse_bytes(data))
    }

    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn to_le_bytes(self) -> [u8; BYTES] {
        FixedUint(self.0.to_bits()).to_le_bytes()
    }

    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub const fn to_be_bytes(self) -> [u8; BYTES] {
        reverse_bytes(self.to_le_bytes())
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Converts to another width, sign-extending when growing.
    pub fn resize<const OUT: usize>(self) -> Result<FixedInt<OUT>, ConversionOverflowError> {
        resize_le_int::<BYTES, OUT>(self.to_le_bytes(), true)
            .map(FixedInt::from_le_bytes)
            .ok_or_else(|| ConversionOverflowError::new("FixedInt", "FixedInt"))
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

    /// Fails with [`DivisionError::Overflow`] for `MIN / -1`.
    pub fn checked_div(self, other: Self) -> Result<Self, DivisionError> {
        if other.is_zero() {
            return Err(DivisionError::DivideByZero);
        }
        self.0
            .checked_div(other.0)
            .map(Self)
            .ok_or(DivisionError::Overflow)
    }

    pub fn checked_rem(self, other: Self) -> Result<Self, DivisionError> {
        if other.is_zero() {
            return Err(DivisionError::DivideByZero);
        }
        self.0
            .checked_rem(other.0)
            .map(Self)
            .ok_or(DivisionError::Overflow)
    }

    pub fn checked_neg(self) -> Result<Self, OverflowError> {
        self.0
            .checked_neg()
            .map(Self)
            .ok_or_else(|| OverflowError::new(OverflowOperation::Sub))
    }
}

impl<const BYTES: usize> Default for FixedInt<BYTES> {
    fn default() -> Self {
        Self::zero()
    }
}

impl_int_ops!(FixedInt);

impl<const BYTES: usize> Neg for FixedInt<BYTES> {
    type Output = Self;

    #[track_caller]
    fn neg(self) -> Self::Output {
        self.checked_neg()
            .unwrap_or_else(|_| panic!("attempt to negate with overflow"))
    }
}

impl<const BYTES: usize> TryFrom<i128> for FixedInt<BYTES> {
    type Error = ConversionOverflowError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        resize_le_int::<16, BYTES>(value.to_le_bytes(), true)
            .map(Self::from_le_bytes)
            .ok_or_else(|| ConversionOverflowError::new("i128", "FixedInt"))
    }
}

impl<const BYTES: usize> TryFrom<i64> for FixedInt<BYTES> {
    type Error = ConversionOverflowError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        resize_le_int::<8, BYTES>(value.to_le_bytes(), true)
            .map(Self::from_le_bytes)
            .ok_or_else(|| ConversionOverflowError::new("i64", "FixedInt"))
    }
}

impl<const BYTES: usize> TryFrom<FixedInt<BYTES>> for i128 {
    type Error = ConversionOverflowError;

    fn try_from(value: FixedInt<BYTES>) -> Result<Self, Self::Error> {
        resize_le_int::<BYTES, 16>(value.to_le_bytes(), true)
            .map(i128::from_le_bytes)
            .ok_or_else(|| ConversionOverflowError::new("FixedInt", "i128"))
    }
}

impl<const BYTES: usize> TryFrom<FixedInt<BYTES>> for i64 {
    type Error = ConversionOverflowError;

    fn try_from(value: FixedInt<BYTES>) -> Result<Self, Self::Error> {
        resize_le_int::<BYTES, 8>(value.to_le_bytes(), true)
            .map(i64::from_le_bytes)
            .ok_or_else(|| ConversionOverflowError::new("FixedInt", "i64"))
    }
}

impl<const BYTES: usize> TryFrom<&str> for FixedInt<BYTES> {
    type Error = RealError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        Self::from_str(val)
    }
}

impl<const BYTES: usize> FromStr for FixedInt<BYTES> {
    type Err = RealError;

    /// Parses `[-]digits` or `[-]0xhexdigits`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, magnitude) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let out_of_range =
            || RealError::out_of_range(format!("{s} does not fit into Int{}", Self::BITS));

        let bits = FixedUint::<BYTES>::parse_magnitude(magnitude).map_err(|e| match e {
            RealError::OutOfRange { .. } => out_of_range(),
            RealError::InvalidFormat { msg } => {
                RealError::invalid_format(msg.replace("Parsing Uint", "Parsing Int"))
            }
            other => other,
        })?;

        if negative && bits.0 == BIntD8::<BYTES>::MIN.to_bits() {
            // |MIN| is not representable as a positive number
            return Ok(Self::MIN);
        }
        let positive = BIntD8::from_bits(bits.0);
        if positive.is_negative() {
            return Err(out_of_range());
        }
        if negative {
            BIntD8::ZERO
                .checked_sub(positive)
                .map(Self)
                .ok_or_else(out_of_range)
        } else {
            Ok(Self(positive))
        }
    }
}

impl<const BYTES: usize> From<FixedInt<BYTES>> for String {
    fn from(original: FixedInt<BYTES>) -> Self {
        original.to_string()
    }
}

impl<const BYTES: usize> fmt::Display for FixedInt<BYTES> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<const BYTES: usize> fmt::Debug for FixedInt<BYTES> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Int{}({})", Self::BITS, self.0)
    }
}

impl<const BYTES: usize> fmt::LowerHex for FixedInt<BYTES> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl<const BYTES: usize> fmt::UpperHex for FixedInt<BYTES> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl<A, const BYTES: usize> core::iter::Sum<A> for FixedInt<BYTES>
where
    Self: core::ops::Add<A, Output = Self>,
{
    fn sum<I: Iterator<Item = A>>(iter: I) -> Self {
        iter.fold(Self::zero(), core::ops::Add::add)
    }
}

impl<const BYTES: usize> Serialize for FixedInt<BYTES> {
    /// Serializes as an integer string using base 10
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, const BYTES: usize> Deserialize<'de> for FixedInt<BYTES> {
    /// Deserialized from an integer string using base 10
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(FixedIntVisitor::<BYTES>)
    }
}

struct FixedIntVisitor<const BYTES: usize>;

impl<const BYTES: usize> de::Visitor<'_> for FixedIntVisitor<BYTES> {
    type Value = FixedInt<BYTES>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("string-encoded integer")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        FixedInt::try_from(v).map_err(|e| {
            E::custom(format!(
                "invalid Int{} '{v}' - {e}",
                FixedInt::<BYTES>::BITS
            ))
        })
    }
}

#[cfg(feature = "schema")]
impl<const BYTES: usize> schemars::JsonSchema for FixedInt<BYTES> {
    fn schema_name() -> String {
        format!("Int{}", Self::BITS)
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        <String as schemars::JsonSchema>::json_schema(gen)
    }
}
