//! Wire protocol between the bridge and the native windowing engine:
//! the lossless text codec, the response envelope, the operation table,
//! typed payloads and the event taxonomy.

pub mod args;
pub mod engine;
pub mod envelope;
pub mod event;
pub mod ops;
pub mod wire;

pub use engine::{Engine, EngineLoader, Response};
pub use envelope::{unwrap_response, Envelope};
pub use event::{Event, EventBatch, WindowEvent, WindowId};
pub use ops::{Op, RawChannel, PROTOCOL_VERSION};
pub use wire::{decode, encode, from_text, from_wire, to_text, to_wire, WireValue};
