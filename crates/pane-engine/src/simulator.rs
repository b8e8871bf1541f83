//! Stand-in for the operating system's input and window-manager activity.
//!
//! The simulator is a queue shared between whoever drives it (tests, the
//! CLI) and every engine created by the same loader. Queued activity is
//! picked up at the next step of an event loop and routed to the loop that
//! owns the target window.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use pane_protocol::event::{DeviceEvent, DeviceId, WindowEvent, WindowId};

/// One piece of OS activity.
#[derive(Debug, Clone, PartialEq)]
pub enum OsEvent {
    Window { window: WindowId, event: WindowEvent },
    /// Delivered to every live event loop.
    Device { device: DeviceId, event: DeviceEvent },
    /// The window moved to a display with a different DPI.
    ScaleFactor { window: WindowId, scale_factor: f64 },
    Suspend,
    Resume,
    /// Ask every live event loop to shut down.
    Exit,
}

#[derive(Debug, Clone, Default)]
pub struct OsSimulator {
    queue: Arc<Mutex<VecDeque<OsEvent>>>,
}

impl OsSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: OsEvent) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push_back(event);
        }
    }

    pub fn window_event(&self, window: WindowId, event: WindowEvent) {
        self.push(OsEvent::Window { window, event });
    }

    pub fn device_event(&self, device: DeviceId, event: DeviceEvent) {
        self.push(OsEvent::Device { device, event });
    }

    pub fn change_scale_factor(&self, window: WindowId, scale_factor: f64) {
        self.push(OsEvent::ScaleFactor {
            window,
            scale_factor,
        });
    }

    pub fn request_exit(&self) {
        self.push(OsEvent::Exit);
    }

    /// Take everything queued so far, in order.
    pub(crate) fn drain(&self) -> Vec<OsEvent> {
        match self.queue.lock() {
            Ok(mut queue) => queue.drain(..).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.lock().map(|queue| queue.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_queue() {
        let os = OsSimulator::new();
        let other = os.clone();
        os.window_event(WindowId(1), WindowEvent::Focused(true));
        other.request_exit();
        assert_eq!(os.pending(), 2);
        let drained = other.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[1], OsEvent::Exit);
        assert_eq!(os.pending(), 0);
    }
}
