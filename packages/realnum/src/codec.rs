//! Size-exact binary packing of numeric values.
//!
//! Every implementor of [`FixedWidth`] occupies the same number of bytes no
//! matter which value it holds. There are no length prefixes, and integers
//! are written least significant byte first.

use static_assertions::{assert_eq_size, const_assert_eq};

use crate::errors::{RealError, RealResult};
use crate::math::{Decimal128, FixedInt, FixedUint};

/// Returns the number of bytes a `width_bits` wide integer packs into.
///
/// Panics for widths that are not a multiple of eight, which is a
/// compile time error when evaluated in a const context.
pub const fn encoded_size(width_bits: usize) -> usize {
    assert!(width_bits % 8 == 0, "bit width must be a multiple of eight");
    width_bits / 8
}

const_assert_eq!(encoded_size(64), 8);
const_assert_eq!(encoded_size(256), 32);
assert_eq_size!(FixedUint<32>, [u8; 32]);
assert_eq_size!(FixedInt<64>, [u8; 64]);

/// A value with a fixed binary encoding.
pub trait FixedWidth: Sized {
    /// The exact number of bytes written by [`FixedWidth::encode_into`].
    const ENCODED_SIZE: usize;

    fn encoded_size() -> usize {
        Self::ENCODED_SIZE
    }

    /// Appends exactly [`FixedWidth::ENCODED_SIZE`] bytes to `sink`.
    fn encode_into(&self, sink: &mut Vec<u8>);

    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::ENCODED_SIZE);
        self.encode_into(&mut out);
        out
    }

    /// Decodes a value from exactly [`FixedWidth::ENCODED_SIZE`] bytes.
    fn decode(bytes: &[u8]) -> RealResult<Self>;

    /// Decodes a value from the front of `source` and advances it past the
    /// consumed bytes. On error `source` is left untouched.
    fn unpack_from(source: &mut &[u8]) -> RealResult<Self> {
        if source.len() < Self::ENCODED_SIZE {
            return Err(RealError::length_mismatch(Self::ENCODED_SIZE, source.len()));
        }
        let (head, tail) = source.split_at(Self::ENCODED_SIZE);
        let value = Self::decode(head)?;
        *source = tail;
        Ok(value)
    }
}

fn exact<const N: usize>(bytes: &[u8]) -> RealResult<[u8; N]> {
    bytes
        .try_into()
        .map_err(|_| RealError::length_mismatch(N, bytes.len()))
}

macro_rules! impl_native_fixed_width {
    ($($t:ty),+) => {
        $(
            impl FixedWidth for $t {
                const ENCODED_SIZE: usize = core::mem::size_of::<$t>();

                fn encode_into(&self, sink: &mut Vec<u8>) {
                    sink.extend_from_slice(&self.to_le_bytes());
                }

                fn decode(bytes: &[u8]) -> RealResult<Self> {
                    exact::<{ core::mem::size_of::<$t>() }>(bytes).map(<$t>::from_le_bytes)
                }
            }
        )+
    };
}

impl_native_fixed_width!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl<const BYTES: usize> FixedWidth for FixedUint<BYTES> {
    const ENCODED_SIZE: usize = BYTES;

    fn encode_into(&self, sink: &mut Vec<u8>) {
        sink.extend_from_slice(&self.to_le_bytes());
    }

    fn decode(bytes: &[u8]) -> RealResult<Self> {
        exact::<BYTES>(bytes).map(Self::from_le_bytes)
    }
}

impl<const BYTES: usize> FixedWidth for FixedInt<BYTES> {
    const ENCODED_SIZE: usize = BYTES;

    fn encode_into(&self, sink: &mut Vec<u8>) {
        sink.extend_from_slice(&self.to_le_bytes());
    }

    fn decode(bytes: &[u8]) -> RealResult<Self> {
        exact::<BYTES>(bytes).map(Self::from_le_bytes)
    }
}

/// 16 bytes of little endian magnitude followed by a sign byte (0 or 1).
impl FixedWidth for Decimal128 {
    const ENCODED_SIZE: usize = 17;

    fn encode_into(&self, sink: &mut Vec<u8>) {
        sink.extend_from_slice(&self.atomics().to_le_bytes());
        sink.push(u8::from(self.is_negative()));
    }

    fn decode(bytes: &[u8]) -> RealResult<Self> {
        let raw = exact::<17>(bytes)?;
        let mut magnitude = [0u8; 16];
        magnitude.copy_from_slice(&raw[..16]);
        let value = Decimal128::from_fixed(u128::from_le_bytes(magnitude));
        match raw[16] {
            0 => Ok(value),
            1 => Ok(-value),
            sign => Err(RealError::invalid_format(format!(
                "Decimal128 sign byte must be 0 or 1, got {sign}"
            ))),
        }
    }
}

/// Packs a value into a fresh vector.
pub fn to_raw_vec<T: FixedWidth>(value: &T) -> Vec<u8> {
    value.encode()
}

/// Unpacks a value from exactly [`raw_size`] bytes.
pub fn from_raw<T: FixedWidth>(bytes: &[u8]) -> RealResult<T> {
    T::decode(bytes)
}

pub fn raw_size<T: FixedWidth>() -> usize {
    T::encoded_size()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;
    use hex_literal::hex;
    use proptest::{prop_assert_eq, property_test};

    use crate::{Int256, Int64, Uint256, Uint512, Uint64};

    #[test]
    fn encoded_size_works() {
        assert_eq!(encoded_size(8), 1);
        assert_eq!(encoded_size(64), 8);
        assert_eq!(encoded_size(512), 64);
        assert_eq!(encoded_size(0), 0);
    }

    #[test]
    #[should_panic(expected = "bit width must be a multiple of eight")]
    fn encoded_size_rejects_partial_bytes() {
        let width = 12;
        encoded_size(width);
    }

    #[test]
    fn raw_size_matches_width() {
        assert_eq!(raw_size::<u8>(), 1);
        assert_eq!(raw_size::<i128>(), 16);
        assert_eq!(raw_size::<Uint64>(), encoded_size(64));
        assert_eq!(raw_size::<Uint256>(), encoded_size(256));
        assert_eq!(raw_size::<Int256>(), 32);
        assert_eq!(raw_size::<Uint512>(), 64);
        assert_eq!(raw_size::<Decimal128>(), 17);
    }

    #[test]
    fn uint64_packs_like_native() {
        let one = Uint64::one();
        assert_eq!(to_raw_vec(&one), to_raw_vec(&1u64));
        assert_eq!(to_raw_vec(&one), hex!("0100000000000000"));
        assert_eq!(from_raw::<u64>(&to_raw_vec(&one)).unwrap(), 1);
    }

    #[test]
    fn uint256_packs_little_endian() {
        let value = Uint256::from_str("0x1234567890ABCDEF0123456789ABCDF").unwrap();
        let packed = to_raw_vec(&value);
        assert_eq!(
            packed,
            hex!("dfbc9a78563412f0debc0a896745230100000000000000000000000000000000")
        );
        assert_eq!(from_raw::<Uint256>(&packed).unwrap(), value);
    }

    #[test]
    fn extremes_round_trip() {
        assert_eq!(to_raw_vec(&Uint64::MAX), [0xffu8; 8]);
        assert_eq!(to_raw_vec(&Uint64::zero()), [0u8; 8]);
        assert_eq!(to_raw_vec(&Uint256::MAX), [0xffu8; 32]);
        assert_eq!(to_raw_vec(&Uint256::zero()), [0u8; 32]);

        for value in [Uint256::zero(), Uint256::one(), Uint256::MAX] {
            assert_eq!(from_raw::<Uint256>(&to_raw_vec(&value)).unwrap(), value);
        }
        for value in [Int256::MIN, Int256::zero(), Int256::MAX] {
            assert_eq!(from_raw::<Int256>(&to_raw_vec(&value)).unwrap(), value);
        }
    }

    #[test]
    fn signed_values_use_twos_complement() {
        let minus_300 = Int64::try_from(-300i64).unwrap();
        assert_eq!(to_raw_vec(&minus_300), hex!("d4feffffffffffff"));
        assert_eq!(to_raw_vec(&minus_300), to_raw_vec(&-300i64));
        assert_eq!(to_raw_vec(&Int256::try_from(-1i64).unwrap()), [0xffu8; 32]);
    }

    #[test]
    fn decimal_packs_magnitude_and_sign() {
        let pi = Decimal128::from_str("3.1415926535").unwrap();
        assert_eq!(
            to_raw_vec(&pi),
            hex!("0027d89cdf2d992b000000000000000000")
        );
        assert_eq!(
            to_raw_vec(&-pi),
            hex!("0027d89cdf2d992b000000000000000001")
        );
        assert_eq!(from_raw::<Decimal128>(&to_raw_vec(&-pi)).unwrap(), -pi);
        assert_eq!(
            from_raw::<Decimal128>(&to_raw_vec(&Decimal128::MIN)).unwrap(),
            Decimal128::MIN
        );
    }

    #[test]
    fn decimal_decode_normalizes_negative_zero() {
        let mut raw = [0u8; 17];
        raw[16] = 1;
        let value = from_raw::<Decimal128>(&raw).unwrap();
        assert_eq!(value, Decimal128::zero());
        assert!(!value.is_negative());
    }

    #[test]
    fn decimal_decode_rejects_bad_sign() {
        let mut raw = [0u8; 17];
        raw[16] = 2;
        match from_raw::<Decimal128>(&raw).unwrap_err() {
            RealError::InvalidFormat { msg } => {
                assert_eq!(msg, "Decimal128 sign byte must be 0 or 1, got 2")
            }
            e => panic!("Unexpected error: {e:?}"),
        }
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert_eq!(
            from_raw::<Uint256>(&[0u8; 31]),
            Err(RealError::length_mismatch(32, 31))
        );
        assert_eq!(
            from_raw::<Uint64>(&[0u8; 9]),
            Err(RealError::length_mismatch(8, 9))
        );
        assert_eq!(from_raw::<u32>(&[]), Err(RealError::length_mismatch(4, 0)));
        assert_eq!(
            from_raw::<Decimal128>(&[0u8; 16]),
            Err(RealError::length_mismatch(17, 16))
        );
    }

    #[test]
    fn unpack_from_consumes_a_stream() {
        let mut stream = Vec::new();
        Uint64::MAX.encode_into(&mut stream);
        (-7i16).encode_into(&mut stream);
        Decimal128::percent(-50).encode_into(&mut stream);
        Uint256::one().encode_into(&mut stream);
        assert_eq!(stream.len(), 8 + 2 + 17 + 32);

        let mut source = stream.as_slice();
        assert_eq!(Uint64::unpack_from(&mut source).unwrap(), Uint64::MAX);
        assert_eq!(i16::unpack_from(&mut source).unwrap(), -7);
        assert_eq!(
            Decimal128::unpack_from(&mut source).unwrap(),
            Decimal128::percent(-50)
        );
        assert_eq!(source.len(), 32);

        // not enough bytes left for a Uint512, nothing is consumed
        assert_eq!(
            Uint512::unpack_from(&mut source),
            Err(RealError::length_mismatch(64, 32))
        );
        assert_eq!(source.len(), 32);

        assert_eq!(Uint256::unpack_from(&mut source).unwrap(), Uint256::one());
        assert!(source.is_empty());
    }

    #[property_test]
    fn uint64_round_trips(value: u64) {
        let wide = Uint64::try_from(value).unwrap();
        let packed = to_raw_vec(&wide);
        prop_assert_eq!(packed.len(), 8);
        prop_assert_eq!(&packed, &to_raw_vec(&value));
        prop_assert_eq!(from_raw::<Uint64>(&packed).unwrap(), wide);
    }

    #[property_test]
    fn uint256_round_trips(bytes: [u8; 32]) {
        let value = Uint256::from_le_bytes(bytes);
        let packed = to_raw_vec(&value);
        prop_assert_eq!(packed.len(), 32);
        prop_assert_eq!(packed.as_slice(), bytes.as_slice());
        prop_assert_eq!(from_raw::<Uint256>(&packed).unwrap(), value);
    }

    #[property_test]
    fn int64_matches_native(value: i64) {
        let fixed = Int64::try_from(value).unwrap();
        prop_assert_eq!(to_raw_vec(&fixed), to_raw_vec(&value));
        let decoded = from_raw::<Int64>(&to_raw_vec(&value)).unwrap();
        prop_assert_eq!(i64::try_from(decoded).unwrap(), value);
    }
}
