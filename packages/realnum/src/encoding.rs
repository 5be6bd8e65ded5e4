use crate::errors::{RealError, RealResult};

/// Renders raw bytes as lowercase hex, in the order they are given.
pub fn to_hex(data: impl AsRef<[u8]>) -> String {
    hex::encode(data)
}

/// Parses a hex string (without `0x` prefix) into raw bytes.
///
/// Upper and lower case digits are both accepted.
pub fn from_hex(input: &str) -> RealResult<Vec<u8>> {
    hex::decode(input).map_err(RealError::invalid_hex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn to_hex_works() {
        assert_eq!(to_hex(b""), "");
        assert_eq!(to_hex(hex!("0001ff")), "0001ff");
        assert_eq!(to_hex(vec![0xab, 0xCD]), "abcd");
    }

    #[test]
    fn from_hex_works() {
        assert_eq!(from_hex("").unwrap(), Vec::<u8>::new());
        assert_eq!(from_hex("0001ff").unwrap(), hex!("0001ff"));
        assert_eq!(from_hex("ABcd").unwrap(), hex!("abcd"));
    }

    #[test]
    fn from_hex_fails_for_invalid_input() {
        match from_hex("abc").unwrap_err() {
            RealError::InvalidHex { msg } => assert_eq!(msg, "Odd number of digits"),
            e => panic!("Unexpected error: {e:?}"),
        }
        match from_hex("zz").unwrap_err() {
            RealError::InvalidHex { msg } => {
                assert_eq!(msg, "Invalid character 'z' at position 0")
            }
            e => panic!("Unexpected error: {e:?}"),
        }
    }
}
