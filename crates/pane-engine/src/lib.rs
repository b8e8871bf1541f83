//! A headless implementation of the windowing engine.
//!
//! Implements every operation of the protocol against in-memory window
//! state, with an [`OsSimulator`] standing in for user input and the window
//! manager. Used by the `pane` binary and by the bridge's test-suite.

mod dispatch;
pub mod engine;
pub mod errors;
pub mod frame;
pub mod loader;
pub mod resources;
pub mod simulator;
pub mod window;


pub use engine::HeadlessEngine;
pub use errors::{EngineError, EngineResult};
pub use frame::MAX_FRAME_DIMENSION;
pub use loader::HeadlessLoader;
pub use simulator::{OsEvent, OsSimulator};
pub use window::{SCREEN_SIZE, TITLEBAR_HEIGHT};
