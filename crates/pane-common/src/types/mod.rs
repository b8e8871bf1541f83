pub mod dpi;
pub mod engine;
pub mod window;

pub use dpi::{
    validate_scale_factor, LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize,
    Position, Size,
};
pub use engine::{library_file_name, CachePolicy, EngineLocation, EngineSource};
pub use window::{CursorIcon, Theme, UserAttentionType};
