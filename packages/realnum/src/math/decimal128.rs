use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use bnum::types::U256;
use forward_ref::{forward_ref_binop, forward_ref_op_assign};

use crate::errors::{
    Decimal128RangeExceeded, DivisionError, OverflowError, OverflowOperation, RealError,
    RealResult,
};
use crate::forward_ref_partial_eq;

/// A signed fixed-point decimal value with 18 fractional digits,
/// i.e. Decimal128(1_000_000_000_000_000_000) == 1.0
///
/// The value is stored as a 128 bit magnitude plus a sign flag. Zero is
/// never negative, so two values are equal exactly when their fields are.
///
/// The largest value that can be represented is
/// 340282366920938463463.374607431768211455 (which is (2^128 - 1) / 10^18),
/// the smallest is its negation.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Decimal128 {
    magnitude: u128,
    negative: bool,
}

forward_ref_partial_eq!(Decimal128, Decimal128);

impl Decimal128 {
    /// The number of decimal places. Since decimal types are fixed-point rather than
    /// floating-point, this is a constant.
    pub const DECIMAL_PLACES: u32 = 18;

    const DECIMAL_FRACTIONAL: u128 = 1_000_000_000_000_000_000; // 1*10**18

    /// The largest value that can be represented by this decimal type.
    pub const MAX: Self = Self::from_parts(u128::MAX, false);

    /// The smallest value that can be represented by this decimal type.
    pub const MIN: Self = Self::from_parts(u128::MAX, true);

    /// Creates a value from its scaled magnitude and sign. A negative zero
    /// becomes zero.
    const fn from_parts(magnitude: u128, negative: bool) -> Self {
        Self {
            magnitude,
            negative: negative && magnitude != 0,
        }
    }

    /// Creates a non-negative Decimal128 from a raw magnitude scaled by 10^18.
    ///
    /// ```
    /// # use realnum::Decimal128;
    /// assert_eq!(Decimal128::from_fixed(1_500_000_000_000_000_000).to_string(), "1.5");
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_fixed(magnitude: u128) -> Self {
        Self::from_parts(magnitude, false)
    }

    #[inline]
    pub const fn one() -> Self {
        Self::from_parts(Self::DECIMAL_FRACTIONAL, false)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::from_parts(0, false)
    }

    /// Convert x% into Decimal128
    pub const fn percent(x: i64) -> Self {
        Self::from_parts(x.unsigned_abs() as u128 * 10_000_000_000_000_000, x < 0)
    }

    /// Convert permille (x/1000) into Decimal128
    pub const fn permille(x: i64) -> Self {
        Self::from_parts(x.unsigned_abs() as u128 * 1_000_000_000_000_000, x < 0)
    }

    /// Creates a non-negative decimal from an integer `atomics` and a number
    /// of `decimal_places`. Places beyond 18 are truncated.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use realnum::Decimal128;
    /// let a = Decimal128::from_atomics(1234u128, 3).unwrap();
    /// assert_eq!(a.to_string(), "1.234");
    ///
    /// let a = Decimal128::from_atomics(1234u128, 0).unwrap();
    /// assert_eq!(a.to_string(), "1234.");
    ///
    /// let a = Decimal128::from_atomics(1u128, 18).unwrap();
    /// assert_eq!(a.to_string(), "0.000000000000000001");
    /// ```
    pub fn from_atomics(
        atomics: u128,
        decimal_places: u32,
    ) -> Result<Self, Decimal128RangeExceeded> {
        let magnitude = match decimal_places.cmp(&Self::DECIMAL_PLACES) {
            Ordering::Less => {
                // at most 18 digits, so the factor fits
                let factor = 10u128.pow(Self::DECIMAL_PLACES - decimal_places);
                atomics.checked_mul(factor).ok_or(Decimal128RangeExceeded)?
            }
            Ordering::Equal => atomics,
            Ordering::Greater => {
                let digits = decimal_places - Self::DECIMAL_PLACES;
                // a factor above u128::MAX divides everything down to zero
                10u128.checked_pow(digits).map_or(0, |factor| atomics / factor)
            }
        };
        Ok(Self::from_fixed(magnitude))
    }

    /// The raw magnitude, scaled by 10^18.
    #[must_use]
    pub const fn fixed(&self) -> u128 {
        self.magnitude
    }

    /// A decimal is an integer of atomic units plus a number that specifies the
    /// position of the decimal dot. So any decimal can be expressed as two numbers.
    ///
    /// The atomics are the absolute value; the sign is available through
    /// [`Decimal128::is_negative`].
    #[must_use]
    pub const fn atomics(&self) -> u128 {
        self.magnitude
    }

    /// The number of decimal places. This is a constant value for now
    /// but this could potentially change as the type evolves.
    ///
    /// See also [`Decimal128::atomics()`].
    #[must_use]
    pub const fn decimal_places(&self) -> u32 {
        Self::DECIMAL_PLACES
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.magnitude == 0
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    #[must_use]
    pub const fn abs(&self) -> Self {
        Self::from_parts(self.magnitude, false)
    }

    /// Rounds towards zero, dropping the fractional part.
    ///
    /// ```
    /// # use realnum::Decimal128;
    /// # use core::str::FromStr;
    /// let d = Decimal128::from_str("-12.75").unwrap();
    /// assert_eq!(d.trunc().to_string(), "-12.");
    /// ```
    #[must_use]
    pub const fn trunc(&self) -> Self {
        Self::from_parts(
            self.magnitude - self.magnitude % Self::DECIMAL_FRACTIONAL,
            self.negative,
        )
    }

    /// Converts to `u64`, truncating the fractional part.
    ///
    /// Any negative value is rejected, even one whose integer part is zero.
    ///
    /// ```
    /// # use realnum::Decimal128;
    /// # use core::str::FromStr;
    /// let d = Decimal128::from_str("12345.6789").unwrap();
    /// assert_eq!(d.to_u64().unwrap(), 12345);
    /// assert!(Decimal128::from_str("-0.5").unwrap().to_u64().is_err());
    /// ```
    pub fn to_u64(&self) -> RealResult<u64> {
        if self.negative {
            return Err(RealError::negative_value(self, "u64"));
        }
        u64::try_from(self.magnitude / Self::DECIMAL_FRACTIONAL)
            .map_err(|_| RealError::overflow(OverflowOperation::Convert))
    }

    fn signed_sum(
        self,
        other_magnitude: u128,
        other_negative: bool,
        operation: OverflowOperation,
    ) -> Result<Self, OverflowError> {
        if self.negative == other_negative {
            return self
                .magnitude
                .checked_add(other_magnitude)
                .map(|magnitude| Self::from_parts(magnitude, self.negative))
                .ok_or_else(|| OverflowError::new(operation));
        }
        // opposite signs never overflow, the larger magnitude wins the sign
        Ok(if self.magnitude >= other_magnitude {
            Self::from_parts(self.magnitude - other_magnitude, self.negative)
        } else {
            Self::from_parts(other_magnitude - self.magnitude, other_negative)
        })
    }

    pub fn checked_add(self, other: Self) -> Result<Self, OverflowError> {
        self.signed_sum(other.magnitude, other.negative, OverflowOperation::Add)
    }

    pub fn checked_sub(self, other: Self) -> Result<Self, OverflowError> {
        self.signed_sum(other.magnitude, !other.negative, OverflowOperation::Sub)
    }

    /// Multiplies one `Decimal128` by another, truncating toward zero.
    pub fn checked_mul(self, other: Self) -> Result<Self, OverflowError> {
        // (a / 10^18) * (b / 10^18) = (a * b / 10^18) / 10^18
        let wide = widen(self.magnitude) * widen(other.magnitude) / widen(Self::DECIMAL_FRACTIONAL);
        narrow(wide)
            .map(|magnitude| Self::from_parts(magnitude, self.negative != other.negative))
            .ok_or_else(|| OverflowError::new(OverflowOperation::Mul))
    }

    /// Raises a value to the power of `exp`, returns an error on overflow.
    pub fn checked_pow(self, exp: u32) -> Result<Self, OverflowError> {
        // This uses the exponentiation by squaring algorithm:
        // https://en.wikipedia.org/wiki/Exponentiation_by_squaring#Basic_method

        fn inner(mut x: Decimal128, mut n: u32) -> Result<Decimal128, OverflowError> {
            if n == 0 {
                return Ok(Decimal128::one());
            }

            let mut y = Decimal128::one();

            while n > 1 {
                if n % 2 == 0 {
                    x = x.checked_mul(x)?;
                    n /= 2;
                } else {
                    y = x.checked_mul(y)?;
                    x = x.checked_mul(x)?;
                    n = (n - 1) / 2;
                }
            }

            x.checked_mul(y)
        }

        inner(self, exp).map_err(|_| OverflowError::new(OverflowOperation::Pow))
    }

    /// Raises a value to the power of `exp`, panics if an overflow occurred.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn pow(self, exp: u32) -> Self {
        match self.checked_pow(exp) {
            Ok(value) => value,
            Err(_) => panic!("Multiplication overflow"),
        }
    }

    /// Divides one `Decimal128` by another, truncating toward zero.
    pub fn checked_div(self, other: Self) -> Result<Self, DivisionError> {
        if other.is_zero() {
            return Err(DivisionError::DivideByZero);
        }
        // (a / 10^18) / (b / 10^18) = (a * 10^18 / b) / 10^18
        let wide = widen(self.magnitude) * widen(Self::DECIMAL_FRACTIONAL) / widen(other.magnitude);
        narrow(wide)
            .map(|magnitude| Self::from_parts(magnitude, self.negative != other.negative))
            .ok_or(DivisionError::Overflow)
    }
}

/// Lifts a magnitude into the 256 bit intermediate.
const fn widen(value: u128) -> U256 {
    U256::from_digits([value as u64, (value >> 64) as u64, 0, 0])
}

/// Returns the intermediate as a magnitude if it fits into 128 bits.
fn narrow(value: U256) -> Option<u128> {
    let digits = value.digits();
    if digits[2] != 0 || digits[3] != 0 {
        return None;
    }
    Some((u128::from(digits[1]) << 64) | u128::from(digits[0]))
}

impl Ord for Decimal128 {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Decimal128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Decimal128 {
                fn from(value: $t) -> Self {
                    Self::from_parts(u128::from(value) * Self::DECIMAL_FRACTIONAL, false)
                }
            }
        )+
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Decimal128 {
                fn from(value: $t) -> Self {
                    Self::from_parts(
                        u128::from(value.unsigned_abs()) * Self::DECIMAL_FRACTIONAL,
                        value < 0,
                    )
                }
            }
        )+
    };
}

// u64::MAX * 10^18 < u128::MAX, so none of these can overflow
impl_from_unsigned!(u8, u16, u32, u64);
impl_from_signed!(i8, i16, i32, i64);

impl TryFrom<u128> for Decimal128 {
    type Error = RealError;

    fn try_from(value: u128) -> Result<Self, Self::Error> {
        value
            .checked_mul(Self::DECIMAL_FRACTIONAL)
            .map(Self::from_fixed)
            .ok_or(Decimal128RangeExceeded)
            .map_err(RealError::from)
    }
}

impl TryFrom<i128> for Decimal128 {
    type Error = RealError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        value
            .unsigned_abs()
            .checked_mul(Self::DECIMAL_FRACTIONAL)
            .map(|magnitude| Self::from_parts(magnitude, value < 0))
            .ok_or(Decimal128RangeExceeded)
            .map_err(RealError::from)
    }
}

impl TryFrom<Decimal128> for u64 {
    type Error = RealError;

    fn try_from(value: Decimal128) -> Result<Self, Self::Error> {
        value.to_u64()
    }
}

impl Neg for Decimal128 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_parts(self.magnitude, !self.negative)
    }
}

impl Add for Decimal128 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match self.checked_add(other) {
            Ok(value) => value,
            Err(_) => panic!("attempt to add with overflow"),
        }
    }
}
forward_ref_binop!(impl Add, add for Decimal128, Decimal128);

impl AddAssign for Decimal128 {
    fn add_assign(&mut self, rhs: Decimal128) {
        *self = *self + rhs;
    }
}
forward_ref_op_assign!(impl AddAssign, add_assign for Decimal128, Decimal128);

impl Sub for Decimal128 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        match self.checked_sub(other) {
            Ok(value) => value,
            Err(_) => panic!("attempt to subtract with overflow"),
        }
    }
}
forward_ref_binop!(impl Sub, sub for Decimal128, Decimal128);

impl SubAssign for Decimal128 {
    fn sub_assign(&mut self, rhs: Decimal128) {
        *self = *self - rhs;
    }
}
forward_ref_op_assign!(impl SubAssign, sub_assign for Decimal128, Decimal128);

impl Mul for Decimal128 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        match self.checked_mul(other) {
            Ok(value) => value,
            Err(_) => panic!("attempt to multiply with overflow"),
        }
    }
}
forward_ref_binop!(impl Mul, mul for Decimal128, Decimal128);

impl MulAssign for Decimal128 {
    fn mul_assign(&mut self, rhs: Decimal128) {
        *self = *self * rhs;
    }
}
forward_ref_op_assign!(impl MulAssign, mul_assign for Decimal128, Decimal128);

impl Div for Decimal128 {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        match self.checked_div(other) {
            Ok(value) => value,
            Err(DivisionError::DivideByZero) => {
                panic!("Division failed - denominator must not be zero")
            }
            Err(DivisionError::Overflow) => {
                panic!("Division failed - multiplication overflow")
            }
        }
    }
}
forward_ref_binop!(impl Div, div for Decimal128, Decimal128);

impl DivAssign for Decimal128 {
    fn div_assign(&mut self, rhs: Decimal128) {
        *self = *self / rhs;
    }
}
forward_ref_op_assign!(impl DivAssign, div_assign for Decimal128, Decimal128);

/// Arithmetic with a primitive integer on the right hand side, which is treated
/// as an integral decimal.
macro_rules! impl_integral_rhs {
    ($($t:ty),+) => {
        $(
            impl Add<$t> for Decimal128 {
                type Output = Self;

                fn add(self, rhs: $t) -> Self {
                    self + Decimal128::from(rhs)
                }
            }

            impl Sub<$t> for Decimal128 {
                type Output = Self;

                fn sub(self, rhs: $t) -> Self {
                    self - Decimal128::from(rhs)
                }
            }

            impl Mul<$t> for Decimal128 {
                type Output = Self;

                fn mul(self, rhs: $t) -> Self {
                    self * Decimal128::from(rhs)
                }
            }

            impl Div<$t> for Decimal128 {
                type Output = Self;

                fn div(self, rhs: $t) -> Self {
                    self / Decimal128::from(rhs)
                }
            }

            impl AddAssign<$t> for Decimal128 {
                fn add_assign(&mut self, rhs: $t) {
                    *self = *self + rhs;
                }
            }

            impl SubAssign<$t> for Decimal128 {
                fn sub_assign(&mut self, rhs: $t) {
                    *self = *self - rhs;
                }
            }

            impl MulAssign<$t> for Decimal128 {
                fn mul_assign(&mut self, rhs: $t) {
                    *self = *self * rhs;
                }
            }

            impl DivAssign<$t> for Decimal128 {
                fn div_assign(&mut self, rhs: $t) {
                    *self = *self / rhs;
                }
            }
        )+
    };
}

impl_integral_rhs!(u64, i64);

impl<A> core::iter::Sum<A> for Decimal128
where
    Self: Add<A, Output = Self>,
{
    fn sum<I: Iterator<Item = A>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}
