//! The headless engine: one instance per loaded connection.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use pane_common::{PhysicalPosition, ResourceId};
use pane_protocol::event::{StartCause, WindowEvent, WindowId};
use pane_protocol::{Engine, Envelope, Event, Op, Response, WireValue};
use tracing::{debug, warn};

use crate::errors::{EngineError, EngineResult};
use crate::frame::Frame;
use crate::resources::{EventLoopState, Resource, ResourceTable};
use crate::simulator::{OsEvent, OsSimulator};
use crate::window::WindowState;

/// Offset between successive new windows.
const CASCADE_STEP: i32 = 32;

/// Window ids are 64-bit hashes, unique per engine instance.
fn window_id(nonce: u128, rid: ResourceId) -> WindowId {
    let mut hasher = DefaultHasher::new();
    nonce.hash(&mut hasher);
    rid.hash(&mut hasher);
    WindowId(hasher.finish())
}

pub struct HeadlessEngine {
    /// Distinguishes window ids of this instance from any other.
    nonce: u128,
    pub(crate) table: ResourceTable,
    window_ids: HashMap<WindowId, ResourceId>,
    os: OsSimulator,
    closed: bool,
}

impl HeadlessEngine {
    pub fn new(os: OsSimulator) -> Self {
        Self {
            nonce: uuid::Uuid::new_v4().as_u128(),
            table: ResourceTable::default(),
            window_ids: HashMap::new(),
            os,
            closed: false,
        }
    }

    pub(crate) fn create_event_loop(&mut self) -> EngineResult<ResourceId> {
        self.table
            .insert(Resource::EventLoop(EventLoopState::default()))
    }

    pub(crate) fn create_window(
        &mut self,
        event_loop: ResourceId,
        width: u32,
        height: u32,
    ) -> EngineResult<ResourceId> {
        let frame = Frame::new(width, height)?;
        if self.table.event_loop_mut(event_loop)?.destroyed {
            return Err(EngineError::new("event loop has been destroyed"));
        }

        let offset = i32::try_from(self.table.window_count())
            .unwrap_or(0)
            .saturating_mul(CASCADE_STEP);
        let nonce = self.nonce;
        let rid = self.table.insert_with(|rid| {
            Resource::Window(Box::new(WindowState::new(
                window_id(nonce, rid),
                event_loop,
                frame,
                PhysicalPosition::new(offset, offset),
            )))
        })?;
        let id = window_id(nonce, rid);
        self.window_ids.insert(id, rid);
        self.table.event_loop_mut(event_loop)?.windows.push(rid);
        debug!(rid, window_id = %id, width, height, "window created");
        Ok(rid)
    }

    /// Queue engine-generated events for the loop that owns `window`.
    pub(crate) fn emit(
        &mut self,
        window: ResourceId,
        events: impl IntoIterator<Item = WindowEvent>,
    ) -> EngineResult<()> {
        let (window_id, event_loop) = {
            let state = self.table.window(window)?;
            (state.id, state.event_loop)
        };
        let pending = &mut self.table.event_loop_mut(event_loop)?.pending;
        pending.extend(events.into_iter().map(|event| Event::WindowEvent {
            window_id,
            event,
        }));
        Ok(())
    }

    fn broadcast(&mut self, make: impl Fn() -> Event) {
        for rid in self.table.live_event_loops() {
            if let Ok(state) = self.table.event_loop_mut(rid) {
                state.pending.push(make());
            }
        }
    }

    fn destroy_window(&mut self, window: ResourceId) {
        if let Some(Resource::Window(state)) = self.table.remove(window) {
            self.window_ids.remove(&state.id);
            if let Ok(event_loop) = self.table.event_loop_mut(state.event_loop) {
                event_loop.windows.retain(|rid| *rid != window);
            }
            debug!(rid = window, window_id = %state.id, "window destroyed");
        }
    }

    /// Route queued OS activity into the pending queues of the loops it
    /// concerns.
    fn pump_os(&mut self) {
        for os_event in self.os.drain() {
            match os_event {
                OsEvent::Window { window, event } => {
                    let Some(&rid) = self.window_ids.get(&window) else {
                        debug!(window_id = %window, kind = event.kind(), "event for unknown window dropped");
                        continue;
                    };
                    let destroyed = match self.table.window_mut(rid) {
                        Ok(state) => state.observe(&event),
                        Err(_) => continue,
                    };
                    if self.emit(rid, [event]).is_ok() && destroyed {
                        self.destroy_window(rid);
                    }
                }
                OsEvent::ScaleFactor {
                    window,
                    scale_factor,
                } => {
                    let Some(&rid) = self.window_ids.get(&window) else {
                        continue;
                    };
                    if !pane_common::types::validate_scale_factor(scale_factor) {
                        warn!(window_id = %window, scale_factor, "ignoring invalid scale factor");
                        continue;
                    }
                    if let Ok(state) = self.table.window_mut(rid) {
                        let events = state.change_scale_factor(scale_factor);
                        if let Err(err) = self.emit(rid, events) {
                            warn!(rid, error = %err, "scale factor change not delivered");
                        }
                    }
                }
                OsEvent::Device { device, event } => self.broadcast(|| Event::DeviceEvent {
                    device_id: device,
                    event: event.clone(),
                }),
                OsEvent::Suspend => self.broadcast(|| Event::Suspended),
                OsEvent::Resume => self.broadcast(|| Event::Resumed),
                OsEvent::Exit => {
                    for rid in self.table.live_event_loops() {
                        if let Ok(state) = self.table.event_loop_mut(rid) {
                            state.exit_requested = true;
                        }
                    }
                }
            }
        }
    }

    /// Run one iteration of the pump for `event_loop` and return everything
    /// it produced, in phase order.
    pub(crate) fn step(&mut self, event_loop: ResourceId) -> EngineResult<Vec<Event>> {
        if self.table.event_loop_mut(event_loop)?.destroyed {
            return Err(EngineError::new("event loop has been destroyed"));
        }
        self.pump_os();

        let state = self.table.event_loop_mut(event_loop)?;
        let cause = if state.started {
            StartCause::Poll
        } else {
            state.started = true;
            StartCause::Init
        };
        let mut events = vec![Event::NewEvents(cause)];
        events.append(&mut state.pending);
        events.push(Event::MainEventsCleared);

        let windows = state.windows.clone();
        for rid in windows {
            if let Ok(window) = self.table.window_mut(rid) {
                if window.redraw_pending {
                    window.redraw_pending = false;
                    events.push(Event::RedrawRequested {
                        window_id: window.id,
                    });
                }
            }
        }
        events.push(Event::RedrawEventsCleared);

        let state = self.table.event_loop_mut(event_loop)?;
        if state.exit_requested {
            state.destroyed = true;
            events.push(Event::LoopDestroyed);
        }
        Ok(events)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

fn rejection(message: String) -> Response {
    Response::text(Envelope::<WireValue>::Err(message).encode())
}

impl Engine for HeadlessEngine {
    fn call(&mut self, op: &str, payload: &str, raw: Option<&[u8]>) -> Response {
        if self.closed {
            return rejection("engine is closed".into());
        }
        let Some(resolved) = Op::from_name(op) else {
            warn!(op, "unknown operation");
            return rejection(format!("unknown operation: {op}"));
        };
        match self.dispatch(resolved, payload, raw) {
            Ok(reply) => {
                let text = Envelope::Ok(reply.value).encode();
                Response { text, raw: reply.raw }
            }
            Err(err) => {
                warn!(op, error = %err, "operation rejected");
                rejection(err.0)
            }
        }
    }

    fn close(&mut self) {
        debug!(windows = self.window_ids.len(), "closing headless engine");
        self.closed = true;
        self.window_ids.clear();
        self.table = ResourceTable::default();
    }
}
