//! The connection to the engine and the synchronous dispatch primitive.
//!
//! A [`Connection`] owns at most one loaded engine. Its lifecycle is
//! `Unloaded -> Loading -> Loaded -> Unloaded`; every dispatch outside
//! `Loaded` fails with [`BridgeError::Precondition`]. Each successful load
//! bumps the connection epoch, which is stamped into every [`Handle`]
//! created under it.

use std::fmt;
use std::sync::Arc;

use pane_common::{new_connection_id, BridgeError, EngineSource, Epoch, Handle, Result};
use pane_protocol::{to_text, unwrap_response, Engine, EngineLoader, Op, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Unloaded,
    Loading,
    Loaded,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConnectionState::Unloaded => "unloaded",
            ConnectionState::Loading => "loading",
            ConnectionState::Loaded => "loaded",
        })
    }
}

pub struct Connection {
    loader: Arc<dyn EngineLoader>,
    source: EngineSource,
    state: ConnectionState,
    engine: Option<Box<dyn Engine>>,
    epoch: Epoch,
    /// Short id of the current load, for log correlation.
    connection_id: Option<String>,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("source", &self.source)
            .field("state", &self.state)
            .field("epoch", &self.epoch)
            .field("connection_id", &self.connection_id)
            .finish_non_exhaustive()
    }
}

impl Connection {
    pub fn new(loader: Arc<dyn EngineLoader>, source: EngineSource) -> Self {
        Self {
            loader,
            source,
            state: ConnectionState::Unloaded,
            engine: None,
            epoch: 0,
            connection_id: None,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == ConnectionState::Loaded
    }

    /// Epoch of the current (or most recent) load. Zero before the first.
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    pub fn source(&self) -> &EngineSource {
        &self.source
    }

    pub fn connection_id(&self) -> Option<&str> {
        self.connection_id.as_deref()
    }

    /// Load the engine, releasing any prior one first. On failure the
    /// connection is left unloaded.
    pub fn load(&mut self) -> Result<()> {
        if self.state == ConnectionState::Loaded {
            self.unload();
        }
        let epoch = self
            .epoch
            .checked_add(1)
            .ok_or_else(|| BridgeError::Precondition("connection epochs exhausted".into()))?;

        self.state = ConnectionState::Loading;
        match self.loader.load(&self.source) {
            Ok(engine) => {
                let connection_id = new_connection_id();
                info!(connection = %connection_id, epoch, source = %self.source, "engine loaded");
                self.engine = Some(engine);
                self.epoch = epoch;
                self.connection_id = Some(connection_id);
                self.state = ConnectionState::Loaded;
                Ok(())
            }
            Err(err) => {
                warn!(source = %self.source, error = %err, "engine load failed");
                self.state = ConnectionState::Unloaded;
                Err(err)
            }
        }
    }

    /// Release the engine. A no-op when nothing is loaded.
    pub fn unload(&mut self) {
        if let Some(mut engine) = self.engine.take() {
            engine.close();
            info!(
                connection = self.connection_id.as_deref().unwrap_or("-"),
                epoch = self.epoch,
                "engine unloaded"
            );
        }
        self.connection_id = None;
        self.state = ConnectionState::Unloaded;
    }

    /// Fail unless `handle` was issued by the current load.
    pub fn check_handle(&self, handle: Handle) -> Result<()> {
        if !self.is_loaded() {
            return Err(BridgeError::Precondition(format!(
                "handle {handle} used while the engine is {}",
                self.state
            )));
        }
        if handle.epoch() != self.epoch {
            return Err(BridgeError::Precondition(format!(
                "handle {handle} was issued by a previous engine load (current epoch {})",
                self.epoch
            )));
        }
        Ok(())
    }

    /// Send one operation and wait for the reply.
    pub fn dispatch(&mut self, op: Op, payload: &str, raw: Option<&[u8]>) -> Result<Response> {
        let state = self.state;
        let Some(engine) = self.engine.as_mut().filter(|_| state == ConnectionState::Loaded)
        else {
            return Err(BridgeError::Precondition(format!(
                "cannot dispatch {op}: engine is {state}"
            )));
        };
        debug!(
            op = %op,
            connection = self.connection_id.as_deref().unwrap_or("-"),
            payload_len = payload.len(),
            "dispatch"
        );
        Ok(engine.call(op.name(), payload, raw))
    }

    /// Encode `args`, dispatch, and decode the unwrapped result.
    pub fn call<A, T>(&mut self, op: Op, args: &A) -> Result<T>
    where
        A: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = to_text(args)?;
        let response = self.dispatch(op, &payload, None)?;
        unwrap_response(op, &response.text)
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.unload();
    }
}
