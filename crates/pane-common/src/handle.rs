//! Resource handles.
//!
//! The engine hands out small integer resource ids. On the client side
//! every id is paired with the epoch of the connection that issued it, so
//! a handle from before an unload/reload can never address an object of
//! the new engine instance, even when the engine reuses the same id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Engine-side identifier of a resource, as carried on the wire.
pub type ResourceId = u32;

/// Monotonic counter of successful `load()` calls on a connection.
pub type Epoch = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Handle {
    epoch: Epoch,
    rid: ResourceId,
}

impl Handle {
    pub fn new(epoch: Epoch, rid: ResourceId) -> Self {
        Self { epoch, rid }
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// The id to thread through operation payloads.
    pub fn rid(&self) -> ResourceId {
        self.rid
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.epoch, self.rid)
    }
}
