//! Client side of the engine bridge.
//!
//! A [`Bridge`] owns the connection to one engine. [`EventLoop`] and
//! [`Window`] are typed facades over the operations that address their
//! handles.

pub mod bridge;
pub mod event_loop;
pub mod transport;
pub mod window;

pub use bridge::Bridge;
pub use event_loop::EventLoop;
pub use transport::{Connection, ConnectionState};
pub use window::Window;
