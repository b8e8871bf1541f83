//! The boundary the bridge dispatches across.
//!
//! An [`Engine`] is one loaded instance of the native windowing engine. It
//! receives an operation name, the encoded payload and an optional raw
//! attachment, and always answers with an encoded envelope; it never fails
//! out of band. An [`EngineLoader`] produces engines from a configured
//! [`EngineSource`].

use pane_common::{BridgeError, EngineSource};

/// One encoded engine reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Envelope text (`{"ok": ...}` or `{"err": "..."}`).
    pub text: String,
    /// Raw byte attachment, for operations that return pixel data.
    pub raw: Option<Vec<u8>>,
}

impl Response {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            raw: None,
        }
    }

    pub fn with_raw(text: impl Into<String>, raw: Vec<u8>) -> Self {
        Self {
            text: text.into(),
            raw: Some(raw),
        }
    }
}

pub trait Engine: Send {
    /// Execute `op`. Blocks until the engine has finished with the call;
    /// `raw` is only borrowed for its duration.
    fn call(&mut self, op: &str, payload: &str, raw: Option<&[u8]>) -> Response;

    /// Release native resources. Called once, before the engine is dropped.
    fn close(&mut self) {}
}

pub trait EngineLoader: Send + Sync {
    fn load(&self, source: &EngineSource) -> Result<Box<dyn Engine>, BridgeError>;
}
