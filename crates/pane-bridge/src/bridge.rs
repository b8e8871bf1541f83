//! Shared access to the process-wide connection.

use std::sync::{Arc, Mutex, MutexGuard};

use pane_common::{
    BridgeError, EngineSource, Epoch, Handle, ProtocolViolation, ResourceId, Result,
};
use pane_protocol::{unwrap_response, EngineLoader, Op, RawChannel};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::transport::{Connection, ConnectionState};

/// Cloneable front for one [`Connection`].
///
/// Holding the lock for a whole call keeps dispatches from one connection
/// strictly sequential.
#[derive(Debug, Clone)]
pub struct Bridge {
    connection: Arc<Mutex<Connection>>,
}

impl Bridge {
    pub fn new(loader: Arc<dyn EngineLoader>, source: EngineSource) -> Self {
        Self {
            connection: Arc::new(Mutex::new(Connection::new(loader, source))),
        }
    }

    /// A panic while the lock was held leaves the engine in an unknown
    /// state. It is unloaded and the lock cleared, so the next
    /// [`Bridge::load`] starts a fresh epoch.
    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.connection.lock().unwrap_or_else(|poisoned| {
            let mut conn = poisoned.into_inner();
            warn!(
                state = %conn.state(),
                epoch = conn.epoch(),
                "connection lock poisoned, unloading engine"
            );
            conn.unload();
            self.connection.clear_poison();
            conn
        })
    }

    pub fn load(&self) -> Result<()> {
        self.lock().load()
    }

    pub fn unload(&self) {
        self.lock().unload();
    }

    pub fn state(&self) -> ConnectionState {
        self.lock().state()
    }

    pub fn is_loaded(&self) -> bool {
        self.lock().is_loaded()
    }

    pub fn epoch(&self) -> Epoch {
        self.lock().epoch()
    }

    pub fn source(&self) -> EngineSource {
        self.lock().source().clone()
    }

    /// Run a creation operation and stamp the returned id with the epoch it
    /// was issued under. `parent`, when given, must be current.
    pub fn create<A>(&self, op: Op, parent: Option<Handle>, args: &A) -> Result<Handle>
    where
        A: Serialize + ?Sized,
    {
        let mut conn = self.lock();
        if let Some(parent) = parent {
            conn.check_handle(parent)?;
        }
        let rid: ResourceId = conn.call(op, args)?;
        Ok(Handle::new(conn.epoch(), rid))
    }

    /// Run an operation addressing `handle`.
    pub fn call<A, T>(&self, handle: Handle, op: Op, args: &A) -> Result<T>
    where
        A: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut conn = self.lock();
        conn.check_handle(handle)?;
        conn.call(op, args)
    }

    /// Run an operation that sends `raw` alongside the payload. The bytes
    /// are only borrowed for the duration of the call.
    pub fn call_with_raw<A>(&self, handle: Handle, op: Op, args: &A, raw: &[u8]) -> Result<()>
    where
        A: Serialize + ?Sized,
    {
        debug_assert_eq!(op.raw_channel(), RawChannel::Request);
        let payload = pane_protocol::to_text(args)?;
        let mut conn = self.lock();
        conn.check_handle(handle)?;
        let response = conn.dispatch(op, &payload, Some(raw))?;
        unwrap_response(op, &response.text)
    }

    /// Run an operation whose result arrives on the raw channel.
    pub fn call_for_raw<A>(&self, handle: Handle, op: Op, args: &A) -> Result<Vec<u8>>
    where
        A: Serialize + ?Sized,
    {
        debug_assert_eq!(op.raw_channel(), RawChannel::Response);
        let payload = pane_protocol::to_text(args)?;
        let mut conn = self.lock();
        conn.check_handle(handle)?;
        let response = conn.dispatch(op, &payload, None)?;
        unwrap_response::<()>(op, &response.text)?;
        response.raw.ok_or_else(|| {
            BridgeError::Protocol(ProtocolViolation::MalformedEnvelope(format!(
                "{op} returned no raw attachment"
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pane_common::{CachePolicy, EngineLocation};
    use pane_protocol::{Engine, Response};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;

    /// Panics on the first call made through any engine of its loader,
    /// answers `{"ok":1}` afterwards.
    struct FragileEngine {
        crashed: Arc<AtomicBool>,
    }

    impl Engine for FragileEngine {
        fn call(&mut self, op: &str, _payload: &str, _raw: Option<&[u8]>) -> Response {
            if !self.crashed.swap(true, Ordering::SeqCst) {
                panic!("engine crashed in {op}");
            }
            Response::text(r#"{"ok":1}"#)
        }
    }

    #[derive(Default)]
    struct FragileLoader {
        crashed: Arc<AtomicBool>,
    }

    impl EngineLoader for FragileLoader {
        fn load(&self, _source: &EngineSource) -> Result<Box<dyn Engine>> {
            Ok(Box::new(FragileEngine {
                crashed: self.crashed.clone(),
            }))
        }
    }

    fn bridge() -> Bridge {
        let source = EngineSource {
            location: EngineLocation::Remote {
                url: "https://example.com/".into(),
                version: "0.2.0".into(),
            },
            cache: CachePolicy::Store,
        };
        Bridge::new(Arc::new(FragileLoader::default()), source)
    }

    #[test]
    fn panic_during_a_call_unloads_the_engine() {
        let bridge = bridge();
        bridge.load().unwrap();
        assert_eq!(bridge.epoch(), 1);

        let worker = bridge.clone();
        let crashed = thread::spawn(move || worker.create(Op::EventLoopNew, None, &()))
            .join()
            .is_err();
        assert!(crashed);

        assert!(!bridge.is_loaded());
        assert_eq!(bridge.state(), ConnectionState::Unloaded);
        let err = bridge
            .call::<_, ()>(Handle::new(1, 1), Op::WindowRequestRedraw, &())
            .unwrap_err();
        assert!(matches!(err, BridgeError::Precondition(_)), "{err}");

        bridge.load().unwrap();
        assert_eq!(bridge.epoch(), 2);
        let handle = bridge.create(Op::EventLoopNew, None, &()).unwrap();
        assert_eq!(handle, Handle::new(2, 1));
    }
}
