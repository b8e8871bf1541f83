/// A refusal by the engine. The text becomes the `err` envelope message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct EngineError(pub String);

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
