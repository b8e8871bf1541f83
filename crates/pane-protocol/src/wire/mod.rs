//! Structured values as they cross the process boundary.
//!
//! [`WireValue`] is a JSON value with one extra variant, [`WireValue::BigInt`],
//! for integers whose magnitude reaches [`SAFE_INTEGER_LIMIT`]. The host on
//! the other side parses numbers as doubles, so such integers never travel as
//! bare JSON numbers; see [`codec`] for how they are tagged in transit.

pub mod codec;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::fmt;

use num_bigint::{BigInt, BigUint};
use pane_common::{EncodingFailure, ProtocolViolation};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use codec::{decode, encode};

/// 10^15. Integers at or above this magnitude are carried as tagged digit
/// strings instead of JSON numbers.
pub const SAFE_INTEGER_LIMIT: u64 = 1_000_000_000_000_000;

/// Digit count of the smallest integer at the limit.
pub const BIG_INTEGER_MIN_DIGITS: usize = 16;

/// Suffix marking a tagged integer string.
pub const SENTINEL: char = 'n';

#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    Null,
    Bool(bool),
    /// A JSON number. Integers stored here stay below [`SAFE_INTEGER_LIMIT`];
    /// use [`WireValue::integer`] to get the canonical representation.
    Number(serde_json::Number),
    /// An integer at or above [`SAFE_INTEGER_LIMIT`] in magnitude.
    BigInt(BigInt),
    String(String),
    Array(Vec<WireValue>),
    Object(BTreeMap<String, WireValue>),
}

impl WireValue {
    /// Canonical representation of an integer: a plain number below the
    /// limit, [`WireValue::BigInt`] at or above it.
    pub fn integer(value: impl Into<BigInt>) -> Self {
        let value = value.into();
        if exceeds_safe_range(&value) {
            return WireValue::BigInt(value);
        }
        match i64::try_from(&value) {
            Ok(small) => WireValue::Number(small.into()),
            Err(_) => WireValue::BigInt(value),
        }
    }

    pub fn object<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, WireValue)>,
        K: Into<String>,
    {
        WireValue::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn get(&self, key: &str) -> Option<&WireValue> {
        match self {
            WireValue::Object(map) => map.get(key),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, WireValue::Null)
    }

    /// Short name of the value's kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            WireValue::Null => "null",
            WireValue::Bool(_) => "bool",
            WireValue::Number(_) => "number",
            WireValue::BigInt(_) => "bigint",
            WireValue::String(_) => "string",
            WireValue::Array(_) => "array",
            WireValue::Object(_) => "object",
        }
    }
}

impl fmt::Display for WireValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

pub(crate) fn exceeds_safe_range(value: &BigInt) -> bool {
    value.magnitude() >= &BigUint::from(SAFE_INTEGER_LIMIT)
}

fn number_exceeds_safe_range(number: &serde_json::Number) -> Option<BigInt> {
    if let Some(unsigned) = number.as_u64() {
        return (unsigned >= SAFE_INTEGER_LIMIT).then(|| BigInt::from(unsigned));
    }
    if let Some(signed) = number.as_i64() {
        return (signed.unsigned_abs() >= SAFE_INTEGER_LIMIT).then(|| BigInt::from(signed));
    }
    None
}

impl From<serde_json::Value> for WireValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => WireValue::Null,
            serde_json::Value::Bool(b) => WireValue::Bool(b),
            serde_json::Value::Number(n) => match number_exceeds_safe_range(&n) {
                Some(big) => WireValue::BigInt(big),
                None => WireValue::Number(n),
            },
            serde_json::Value::String(s) => WireValue::String(s),
            serde_json::Value::Array(items) => {
                WireValue::Array(items.into_iter().map(WireValue::from).collect())
            }
            serde_json::Value::Object(map) => WireValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, WireValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<WireValue> for serde_json::Value {
    type Error = EncodingFailure;

    /// Narrow big integers back to 64-bit JSON numbers for typed decoding.
    fn try_from(value: WireValue) -> Result<Self, Self::Error> {
        Ok(match value {
            WireValue::Null => serde_json::Value::Null,
            WireValue::Bool(b) => serde_json::Value::Bool(b),
            WireValue::Number(n) => serde_json::Value::Number(n),
            WireValue::BigInt(big) => {
                if let Ok(unsigned) = u64::try_from(&big) {
                    serde_json::Value::Number(unsigned.into())
                } else if let Ok(signed) = i64::try_from(&big) {
                    serde_json::Value::Number(signed.into())
                } else {
                    return Err(EncodingFailure::IntegerOutOfRange(big.to_string()));
                }
            }
            WireValue::String(s) => serde_json::Value::String(s),
            WireValue::Array(items) => serde_json::Value::Array(
                items
                    .into_iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            WireValue::Object(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(k, v)| serde_json::Value::try_from(v).map(|v| (k, v)))
                    .collect::<Result<_, _>>()?,
            ),
        })
    }
}

/// Serialize a typed value into its wire form.
pub fn to_wire<T: Serialize + ?Sized>(value: &T) -> Result<WireValue, EncodingFailure> {
    serde_json::to_value(value)
        .map(WireValue::from)
        .map_err(|e| EncodingFailure::Json(e.to_string()))
}

/// Deserialize a typed value from its wire form.
pub fn from_wire<T: DeserializeOwned>(value: WireValue) -> Result<T, ProtocolViolation> {
    let json = serde_json::Value::try_from(value)?;
    serde_json::from_value(json).map_err(ProtocolViolation::from_decode)
}

/// Encode a typed value straight to wire text.
pub fn to_text<T: Serialize + ?Sized>(value: &T) -> Result<String, EncodingFailure> {
    to_wire(value).map(|wire| encode(&wire))
}

/// Decode wire text straight into a typed value.
pub fn from_text<T: DeserializeOwned>(text: &str) -> Result<T, ProtocolViolation> {
    from_wire(decode(text)?)
}
