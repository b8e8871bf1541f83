pub mod errors;
pub mod handle;
pub mod id;
pub mod types;

pub use errors::{BridgeError, ConfigError, EncodingFailure, ProtocolViolation};
pub use handle::{Epoch, Handle, ResourceId};
pub use id::new_connection_id;
pub use types::{
    CachePolicy, CursorIcon, EngineLocation, EngineSource, LogicalPosition, LogicalSize,
    PhysicalPosition, PhysicalSize, Position, Size, Theme, UserAttentionType,
};

pub type Result<T> = std::result::Result<T, BridgeError>;
