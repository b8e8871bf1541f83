use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config file already exists: {0}")]
    AlreadyExists(PathBuf),
}

/// Failure to move a value through the textual wire format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingFailure {
    #[error("malformed wire text at byte {offset}: {reason}")]
    Malformed { offset: usize, reason: String },

    #[error("integer {0} does not fit the target type")]
    IntegerOutOfRange(String),

    #[error("json error: {0}")]
    Json(String),
}

/// The engine and the client disagree about the shape of the protocol.
///
/// Never recoverable by retrying the same call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolViolation {
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("unrecognized variant: {0}")]
    UnknownVariant(String),

    #[error("event out of phase order: {0}")]
    OutOfOrderEvent(String),

    #[error(transparent)]
    Encoding(#[from] EncodingFailure),
}

impl ProtocolViolation {
    /// Classify a typed decode failure. Unknown enum tags point at version
    /// skew and are reported separately from other shape mismatches.
    pub fn from_decode(err: serde_json::Error) -> Self {
        let message = err.to_string();
        if message.contains("unknown variant") {
            ProtocolViolation::UnknownVariant(message)
        } else {
            ProtocolViolation::Encoding(EncodingFailure::Json(message))
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// Dispatch attempted without a loaded connection, or with a handle
    /// issued by a connection that has since been unloaded.
    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("protocol violation: {0}")]
    Protocol(#[from] ProtocolViolation),

    /// A well-formed `{err}` envelope. `message` is the engine text, verbatim.
    #[error("engine rejected {op}: {message}")]
    EngineRejection { op: String, message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<EncodingFailure> for BridgeError {
    fn from(err: EncodingFailure) -> Self {
        BridgeError::Protocol(ProtocolViolation::Encoding(err))
    }
}

impl BridgeError {
    /// Transport-level failures (connection, decoding) as opposed to an
    /// application-level rejection by the engine.
    pub fn is_transport_level(&self) -> bool {
        matches!(
            self,
            BridgeError::Precondition(_) | BridgeError::Protocol(_) | BridgeError::Io(_)
        )
    }

    /// The engine's diagnostic when this is an [`BridgeError::EngineRejection`].
    pub fn engine_message(&self) -> Option<&str> {
        match self {
            BridgeError::EngineRejection { message, .. } => Some(message),
            _ => None,
        }
    }
}
