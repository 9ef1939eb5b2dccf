//! # Decimal Amount Codec
//!
//! Rapyd is inconsistent about how it represents monetary amounts on the
//! wire: round values arrive and must be sent as bare JSON integers, while
//! fractional values travel as fixed-point decimal strings (`"99.50"`).
//! `Amount` bridges both representations over a single `f64`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Tolerance for whole-number detection when encoding. Values within 1e-8 of
/// an integer are emitted as that integer. Preserved literally from the
/// upstream API contract; do not change without confirming amount ranges.
const WHOLE_TOLERANCE: f64 = 0.000_000_01;

/// A monetary amount with an optional re-encoding precision.
///
/// Decoded amounts carry no precision; precision only matters when the value
/// is serialized again, and defaults to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amount {
    value: f64,
    places: Option<u8>,
}

impl Amount {
    /// Create an amount that encodes with the default 2 decimal places.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            places: None,
        }
    }

    /// Create an amount with an explicit encoding precision.
    pub fn with_places(value: f64, places: u8) -> Self {
        Self {
            value,
            places: Some(places),
        }
    }

    /// The underlying floating-point value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Fixed-point rendering at the configured precision.
    fn formatted(&self) -> String {
        let places = usize::from(self.places.unwrap_or(2));
        format!("{:.*}", places, self.value)
    }

    /// True when the fractional part of a formatted amount is all zeros.
    fn fraction_is_zero(formatted: &str) -> bool {
        match formatted.split_once('.') {
            Some((_, frac)) => frac.bytes().all(|b| b == b'0'),
            None => true,
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = self.formatted();
        if Self::fraction_is_zero(&formatted) {
            serializer.serialize_i64((self.value + WHOLE_TOLERANCE) as i64)
        } else {
            serializer.serialize_str(&formatted)
        }
    }
}

struct AmountVisitor;

impl Visitor<'_> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer, a float, or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        Ok(Amount::new(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        Ok(Amount::new(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
        Ok(Amount::new(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        v.parse::<f64>()
            .map(Amount::new)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AmountVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn encode(amount: Amount) -> Value {
        serde_json::to_value(amount).unwrap()
    }

    fn decode(value: Value) -> Amount {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_whole_value_encodes_as_bare_integer() {
        assert_eq!(encode(Amount::new(100.0)), json!(100));
        assert_eq!(encode(Amount::new(0.0)), json!(0));
    }

    #[test]
    fn test_fractional_value_encodes_as_decimal_string() {
        assert_eq!(encode(Amount::new(99.5)), json!("99.50"));
        assert_eq!(encode(Amount::new(0.01)), json!("0.01"));
    }

    #[test]
    fn test_precision_override() {
        assert_eq!(encode(Amount::with_places(1.2345, 4)), json!("1.2345"));
        // 3 places and all-zero fraction still collapses to an integer
        assert_eq!(encode(Amount::with_places(7.0, 3)), json!(7));
    }

    #[test]
    fn test_decode_integer_and_string_agree() {
        assert_eq!(decode(json!(100)).value(), 100.0);
        assert_eq!(decode(json!("100.00")).value(), 100.0);
        assert_eq!(decode(json!(99.5)).value(), 99.5);
        assert_eq!(decode(json!("99.50")).value(), 99.5);
    }

    #[test]
    fn test_near_whole_tolerance() {
        // within 1e-8 of 100: formats to "100.00" and re-encodes as 100
        let amount = decode(json!(99.999999995));
        assert_eq!(encode(amount), json!(100));
    }

    #[test]
    fn test_decode_rejects_non_numeric() {
        assert!(serde_json::from_value::<Amount>(json!(true)).is_err());
        assert!(serde_json::from_value::<Amount>(json!({"amount": 1})).is_err());
        assert!(serde_json::from_value::<Amount>(json!("not a number")).is_err());
    }

    #[test]
    fn test_round_trip_is_lossless_at_two_places() {
        for value in [0.0, 0.01, 1.5, 99.5, 100.0, 1234.56, 999_999_999.99] {
            let encoded = encode(Amount::new(value));
            assert_eq!(decode(encoded).value(), value, "round trip of {value}");
        }
    }
}
