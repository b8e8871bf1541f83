use std::ops::ControlFlow;
use std::thread;
use std::time::Duration;

use pane_common::{BridgeError, Handle, Result};
use pane_protocol::args::RidArgs;
use pane_protocol::{Event, EventBatch, Op};
use tracing::debug;

use crate::bridge::Bridge;

/// Client side of an engine event loop. The caller pulls events with
/// [`EventLoop::step`]; the engine never pushes.
#[derive(Debug)]
pub struct EventLoop {
    bridge: Bridge,
    handle: Handle,
    destroyed: bool,
}

impl EventLoop {
    pub fn new(bridge: &Bridge) -> Result<Self> {
        let handle = bridge.create(Op::EventLoopNew, None, &())?;
        debug!(handle = %handle, "event loop created");
        Ok(Self {
            bridge: bridge.clone(),
            handle,
            destroyed: false,
        })
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn bridge(&self) -> &Bridge {
        &self.bridge
    }

    /// Whether a previous step reported `loopDestroyed`.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Drain everything the engine accumulated since the previous step.
    pub fn step(&mut self) -> Result<EventBatch> {
        if self.destroyed {
            return Err(BridgeError::Precondition(format!(
                "event loop {} has been destroyed",
                self.handle
            )));
        }
        let events: Vec<Event> = self.bridge.call(
            self.handle,
            Op::EventLoopStep,
            &RidArgs {
                rid: self.handle.rid(),
            },
        )?;
        let batch = EventBatch::new(events)?;
        debug!(handle = %self.handle, event_count = batch.len(), "step");
        if batch.is_terminal() {
            self.destroyed = true;
        }
        Ok(batch)
    }

    /// Step every `interval` until the handler breaks or the loop is
    /// destroyed. The terminal batch is still handed to the handler.
    pub fn run<F>(&mut self, interval: Duration, mut handler: F) -> Result<()>
    where
        F: FnMut(&EventBatch) -> ControlFlow<()>,
    {
        loop {
            let batch = self.step()?;
            if handler(&batch).is_break() || self.destroyed {
                return Ok(());
            }
            thread::sleep(interval);
        }
    }
}
