use core::fmt::{self, Write};
use core::str::FromStr;

use serde::{de, ser, Deserialize, Deserializer, Serialize};

use crate::errors::{Decimal128RangeExceeded, RealError};

use super::decimal128::Decimal128;

const FRACTIONAL: u128 = 10u128.pow(Decimal128::DECIMAL_PLACES);

/// Parses an unsigned run of ASCII digits, `None` on u128 overflow.
fn parse_digits(digits: &str) -> Option<u128> {
    digits.bytes().try_fold(0u128, |acc, b| {
        acc.checked_mul(10)?.checked_add(u128::from(b - b'0'))
    })
}

fn check_digits(part: &str) -> Result<(), RealError> {
    match part.chars().find(|c| !c.is_ascii_digit()) {
        Some(c) => Err(RealError::invalid_format(format!(
            "Parsing Decimal128: unexpected character '{c}'"
        ))),
        None => Ok(()),
    }
}

impl FromStr for Decimal128 {
    type Err = RealError;

    /// Converts the decimal string to a Decimal128
    /// Possible inputs: "1.23", "1", "000012", "1.123000000", "-0.5", "7."
    /// Disallowed: "", ".23", "+1", "1e3"
    ///
    /// Fractional digits beyond the 18th are truncated.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (negative, unsigned) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };
        let (whole_part, fractional_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if whole_part.is_empty() {
            return Err(RealError::invalid_format(
                "Parsing Decimal128: missing integer part",
            ));
        }
        check_digits(whole_part)?;
        check_digits(fractional_part)?;

        let whole = parse_digits(whole_part)
            .and_then(|whole| whole.checked_mul(FRACTIONAL))
            .ok_or(Decimal128RangeExceeded)?;

        // only ASCII digits remain, so byte indexing is safe
        let fractional_part =
            &fractional_part[..fractional_part.len().min(Decimal128::DECIMAL_PLACES as usize)];
        let exp = Decimal128::DECIMAL_PLACES - fractional_part.len() as u32;
        // at most 18 digits, so this always fits
        let fractional = parse_digits(fractional_part).unwrap_or_default() * 10u128.pow(exp);

        let magnitude = whole
            .checked_add(fractional)
            .ok_or(Decimal128RangeExceeded)?;
        let value = Decimal128::from_fixed(magnitude);
        Ok(if negative { -value } else { value })
    }
}

impl fmt::Display for Decimal128 {
    /// Always prints the decimal dot, e.g. "0.", "12345." or "-3.14".
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let whole = self.atomics() / FRACTIONAL;
        let fractional = self.atomics() % FRACTIONAL;

        if self.is_negative() {
            f.write_char('-')?;
        }
        write!(f, "{whole}.")?;
        if fractional != 0 {
            let fractional_string = format!(
                "{:0>padding$}",
                fractional,
                padding = Decimal128::DECIMAL_PLACES as usize
            );
            f.write_str(fractional_string.trim_end_matches('0'))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Decimal128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal128({self})")
    }
}

impl TryFrom<&str> for Decimal128 {
    type Error = RealError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        Self::from_str(val)
    }
}

impl From<Decimal128> for String {
    fn from(original: Decimal128) -> Self {
        original.to_string()
    }
}

/// Serializes as a decimal string
impl Serialize for Decimal128 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Deserializes from a decimal string
impl<'de> Deserialize<'de> for Decimal128 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(Decimal128Visitor)
    }
}

struct Decimal128Visitor;

impl de::Visitor<'_> for Decimal128Visitor {
    type Value = Decimal128;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("string-encoded decimal")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match Decimal128::from_str(v) {
            Ok(d) => Ok(d),
            Err(e) => Err(E::custom(format!("Error parsing decimal '{v}': {e}"))),
        }
    }
}

#[cfg(feature = "schema")]
impl schemars::JsonSchema for Decimal128 {
    fn schema_name() -> String {
        "Decimal128".to_string()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        <String as schemars::JsonSchema>::json_schema(gen)
    }
}
