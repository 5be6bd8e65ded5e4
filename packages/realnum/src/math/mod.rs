mod conversion;
mod decimal128;
mod decimal128_text;
mod fixed_int;
mod fixed_uint;

pub use conversion::{resize_le_int, reverse_bytes};
pub use decimal128::Decimal128;
pub use fixed_int::{FixedInt, Int128, Int16, Int256, Int32, Int512, Int64, Int8};
pub use fixed_uint::{FixedUint, Uint128, Uint16, Uint256, Uint32, Uint512, Uint64, Uint8};

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::{Debug, Display};
    use core::ops::*;
    use core::str::FromStr;

    /// A trait that ensures other traits are implemented for our number types
    trait AllImpl<'a>:
        Add
        + Add<&'a Self>
        + AddAssign
        + AddAssign<&'a Self>
        + Sub
        + Sub<&'a Self>
        + SubAssign
        + SubAssign<&'a Self>
        + Mul
        + Mul<&'a Self>
        + MulAssign
        + MulAssign<&'a Self>
        + Div
        + Div<&'a Self>
        + DivAssign
        + DivAssign<&'a Self>
        + Copy
        + Clone
        + Default
        + Debug
        + Display
        + PartialEq
        + PartialOrd
        + Ord
        + FromStr
        + core::iter::Sum
        + serde::Serialize
        + serde::de::DeserializeOwned
        + Send
        + Sync
    where
        Self: 'a,
    {
    }

    /// A trait that ensures other traits are implemented for our integer types
    trait IntImpl<'a>:
        AllImpl<'a>
        + Rem
        + Rem<&'a Self>
        + RemAssign
        + RemAssign<&'a Self>
        + core::fmt::LowerHex
        + core::fmt::UpperHex
        + core::hash::Hash
        + crate::FixedWidth
    where
        Self: 'a,
    {
    }

    trait SignedDecimalImpl<'a>: AllImpl<'a> + Neg<Output = Self> + PartialEq<&'a Self>
    where
        Self: 'a,
    {
    }

    trait SignedImpl<'a>: IntImpl<'a> + Neg<Output = Self> {}

    impl AllImpl<'_> for Decimal128 {}
    impl SignedDecimalImpl<'_> for Decimal128 {}

    impl AllImpl<'_> for Uint64 {}
    impl AllImpl<'_> for Uint256 {}
    impl AllImpl<'_> for Uint512 {}
    impl AllImpl<'_> for Int64 {}
    impl AllImpl<'_> for Int256 {}
    impl AllImpl<'_> for Int512 {}

    impl IntImpl<'_> for Uint64 {}
    impl IntImpl<'_> for Uint256 {}
    impl IntImpl<'_> for Uint512 {}
    impl IntImpl<'_> for Int64 {}
    impl IntImpl<'_> for Int256 {}
    impl IntImpl<'_> for Int512 {}

    impl SignedImpl<'_> for Int64 {}
    impl SignedImpl<'_> for Int256 {}
    impl SignedImpl<'_> for Int512 {}
}
