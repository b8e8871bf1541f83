//! The `{ok}` / `{err}` wrapper around every engine response.

use pane_common::{BridgeError, ProtocolViolation};
use serde::de::DeserializeOwned;

use crate::ops::Op;
use crate::wire::{self, WireValue};

const OK_KEY: &str = "ok";
const ERR_KEY: &str = "err";

/// Exactly one of a value or an engine diagnostic.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T = WireValue> {
    Ok(T),
    Err(String),
}

impl Envelope<WireValue> {
    /// Interpret a decoded response. Anything other than an object with a
    /// single `ok` key or a single string-valued `err` key is rejected.
    pub fn from_wire(value: WireValue) -> Result<Self, ProtocolViolation> {
        let WireValue::Object(mut map) = value else {
            return Err(ProtocolViolation::MalformedEnvelope(format!(
                "expected an object, got {}",
                value.kind()
            )));
        };
        if map.len() != 1 {
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            return Err(ProtocolViolation::MalformedEnvelope(format!(
                "expected exactly one of `ok` or `err`, got {keys:?}"
            )));
        }
        if let Some(ok) = map.remove(OK_KEY) {
            return Ok(Envelope::Ok(ok));
        }
        match map.remove(ERR_KEY) {
            Some(WireValue::String(message)) => Ok(Envelope::Err(message)),
            Some(other) => Err(ProtocolViolation::MalformedEnvelope(format!(
                "`err` must be a string, got {}",
                other.kind()
            ))),
            None => Err(ProtocolViolation::MalformedEnvelope(format!(
                "unexpected key {:?}",
                map.keys().next().map(String::as_str).unwrap_or_default()
            ))),
        }
    }

    /// Decode response text into an envelope.
    pub fn decode(text: &str) -> Result<Self, ProtocolViolation> {
        Self::from_wire(wire::decode(text)?)
    }

    pub fn to_wire(&self) -> WireValue {
        match self {
            Envelope::Ok(value) => WireValue::object([(OK_KEY, value.clone())]),
            Envelope::Err(message) => {
                WireValue::object([(ERR_KEY, WireValue::String(message.clone()))])
            }
        }
    }

    pub fn encode(&self) -> String {
        wire::encode(&self.to_wire())
    }
}

impl<T> Envelope<T> {
    /// The `ok` value, or an [`BridgeError::EngineRejection`] carrying the
    /// engine's message verbatim.
    pub fn into_result(self, op: Op) -> Result<T, BridgeError> {
        match self {
            Envelope::Ok(value) => Ok(value),
            Envelope::Err(message) => Err(BridgeError::EngineRejection {
                op: op.name().to_string(),
                message,
            }),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Envelope::Ok(_))
    }
}

impl<T, E: ToString> From<Result<T, E>> for Envelope<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Envelope::Ok(value),
            Err(err) => Envelope::Err(err.to_string()),
        }
    }
}

/// Decode, unwrap and type a response in one go.
pub fn unwrap_response<T: DeserializeOwned>(op: Op, text: &str) -> Result<T, BridgeError> {
    let value = Envelope::decode(text)?.into_result(op)?;
    Ok(wire::from_wire(value)?)
}
