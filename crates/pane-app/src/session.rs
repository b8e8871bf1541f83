//! The demo session: open windows, poll the loop, print every event.

use std::collections::BTreeMap;
use std::io::Write;
use std::ops::ControlFlow;
use std::time::Duration;

use pane_bridge::{Bridge, EventLoop, Window};
use pane_common::{PhysicalSize, Result};
use pane_config::PaneConfig;
use pane_protocol::{to_text, Event, EventBatch, WindowEvent, WindowId};
use tracing::{debug, info};

use crate::cli::Args;

/// Effective run settings: config values with command-line overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub windows: usize,
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub interval: Duration,
    pub steps: Option<u64>,
    pub draw: bool,
}

impl Settings {
    pub fn new(config: &PaneConfig, args: &Args) -> Self {
        Self {
            windows: args.windows,
            width: args.width.unwrap_or(config.window.width),
            height: args.height.unwrap_or(config.window.height),
            title: config.window.title.clone(),
            interval: args
                .interval_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.event_loop.poll_interval()),
            steps: args.steps,
            draw: args.draw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    CloseRequested(WindowId),
    StepLimit,
    LoopDestroyed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub steps: u64,
    pub reason: StopReason,
}

struct Pane {
    window: Window,
    frame: PhysicalSize<u32>,
}

pub struct Session {
    event_loop: EventLoop,
    panes: BTreeMap<WindowId, Pane>,
    settings: Settings,
}

impl Session {
    /// Create the event loop and open the configured windows.
    pub fn open(bridge: &Bridge, settings: Settings) -> Result<Self> {
        let event_loop = EventLoop::new(bridge)?;
        let mut panes = BTreeMap::new();
        for index in 0..settings.windows {
            let window = Window::new(&event_loop, settings.width, settings.height)?;
            let title = if settings.windows > 1 {
                format!("{} {}", settings.title, index + 1)
            } else {
                settings.title.clone()
            };
            window.set_title(&title)?;
            let id = window.id()?;
            info!(window_id = %id, handle = %window.handle(), title = %title, "window opened");
            panes.insert(
                id,
                Pane {
                    window,
                    frame: PhysicalSize::new(settings.width, settings.height),
                },
            );
        }
        Ok(Self {
            event_loop,
            panes,
            settings,
        })
    }

    pub fn window_ids(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.panes.keys().copied()
    }

    /// Poll until a window asks to close, the loop is destroyed, or the step
    /// limit is reached. Every event is written to `out` as one line of wire
    /// text.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Outcome> {
        let Self {
            event_loop,
            panes,
            settings,
        } = self;
        let mut steps = 0;
        let mut stop = None;
        let mut failure = None;

        event_loop.run(settings.interval, |batch| {
            steps += 1;
            match handle_batch(batch, panes, settings, steps, out) {
                Ok(Some(reason)) => {
                    stop = Some(reason);
                    return ControlFlow::Break(());
                }
                Ok(None) => {}
                Err(err) => {
                    failure = Some(err);
                    return ControlFlow::Break(());
                }
            }
            if settings.steps.is_some_and(|limit| steps >= limit) {
                stop = Some(StopReason::StepLimit);
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        })?;

        if let Some(err) = failure {
            return Err(err);
        }
        let reason = stop.unwrap_or(StopReason::LoopDestroyed);
        info!(steps, reason = ?reason, "session finished");
        Ok(Outcome { steps, reason })
    }
}

fn handle_batch<W: Write>(
    batch: &EventBatch,
    panes: &mut BTreeMap<WindowId, Pane>,
    settings: &Settings,
    step: u64,
    out: &mut W,
) -> Result<Option<StopReason>> {
    for event in batch {
        writeln!(out, "{}", to_text(event)?)?;
        match event {
            Event::WindowEvent {
                window_id,
                event: WindowEvent::CloseRequested,
            } => return Ok(Some(StopReason::CloseRequested(*window_id))),
            Event::WindowEvent {
                window_id,
                event: WindowEvent::Resized(size),
            } if settings.draw => {
                if let Some(pane) = panes.get_mut(window_id) {
                    pane.window.resize_frame(size.width, size.height)?;
                    pane.frame = *size;
                }
            }
            Event::RedrawRequested { window_id } if settings.draw => {
                if let Some(pane) = panes.get(window_id) {
                    pane.window.draw_frame(&pattern(pane.frame, step))?;
                    pane.window.render_frame()?;
                    pane.window.request_redraw()?;
                    debug!(window_id = %window_id, step, "frame presented");
                }
            }
            Event::LoopDestroyed => return Ok(Some(StopReason::LoopDestroyed)),
            _ => {}
        }
    }
    Ok(None)
}

/// A moving RGBA8 gradient filling `size`.
pub fn pattern(size: PhysicalSize<u32>, step: u64) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(size.rgba_len().unwrap_or_default());
    for y in 0..size.height {
        for x in 0..size.width {
            rgba.extend_from_slice(&[
                (x % 256) as u8,
                (y % 256) as u8,
                (step % 256) as u8,
                0xFF,
            ]);
        }
    }
    rgba
}

#[cfg(test)]
mod tests {
    use super::*;
    use pane_common::{CachePolicy, EngineLocation, EngineSource};
    use pane_engine::{HeadlessLoader, OsSimulator};
    use pane_protocol::from_text;
    use std::sync::Arc;

    fn settings(windows: usize, steps: Option<u64>, draw: bool) -> Settings {
        Settings {
            windows,
            width: 8,
            height: 4,
            title: "pane".into(),
            interval: Duration::ZERO,
            steps,
            draw,
        }
    }

    fn bridge() -> (Bridge, OsSimulator) {
        let loader = HeadlessLoader::new();
        let os = loader.simulator();
        let source = EngineSource {
            location: EngineLocation::Remote {
                url: "https://example.com/".into(),
                version: "0.2.0".into(),
            },
            cache: CachePolicy::None,
        };
        let bridge = Bridge::new(Arc::new(loader), source);
        bridge.load().unwrap();
        (bridge, os)
    }

    #[test]
    fn stops_at_the_step_limit() {
        let (bridge, _) = bridge();
        let mut session = Session::open(&bridge, settings(2, Some(3), false)).unwrap();
        assert_eq!(session.window_ids().count(), 2);
        let mut out = Vec::new();
        let outcome = session.run(&mut out).unwrap();
        assert_eq!(
            outcome,
            Outcome {
                steps: 3,
                reason: StopReason::StepLimit
            }
        );

        let text = String::from_utf8(out).unwrap();
        let events: Vec<Event> = text.lines().map(|line| from_text(line).unwrap()).collect();
        assert!(matches!(events[0], Event::NewEvents(_)));
        let redraws = events
            .iter()
            .filter(|e| matches!(e, Event::RedrawRequested { .. }))
            .count();
        assert_eq!(redraws, 2);
    }

    #[test]
    fn stops_when_a_window_asks_to_close() {
        let (bridge, os) = bridge();
        let mut session = Session::open(&bridge, settings(1, None, false)).unwrap();
        let id = session.window_ids().next().unwrap();
        os.window_event(id, WindowEvent::CloseRequested);
        let outcome = session.run(&mut Vec::new()).unwrap();
        assert_eq!(outcome.reason, StopReason::CloseRequested(id));
        assert_eq!(outcome.steps, 1);
    }

    #[test]
    fn stops_when_the_loop_is_destroyed() {
        let (bridge, os) = bridge();
        let mut session = Session::open(&bridge, settings(1, None, false)).unwrap();
        os.request_exit();
        let outcome = session.run(&mut Vec::new()).unwrap();
        assert_eq!(outcome.reason, StopReason::LoopDestroyed);
    }

    #[test]
    fn drawing_keeps_redrawing() {
        let (bridge, os) = bridge();
        let mut session = Session::open(&bridge, settings(1, Some(3), true)).unwrap();
        let id = session.window_ids().next().unwrap();
        os.change_scale_factor(id, 2.0);
        let mut out = Vec::new();
        session.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let redraws = text
            .lines()
            .filter(|line| line.contains("redrawRequested"))
            .count();
        assert_eq!(redraws, 3);
    }

    #[test]
    fn pattern_fills_the_frame() {
        let rgba = pattern(PhysicalSize::new(3, 2), 7);
        assert_eq!(rgba.len(), 24);
        assert_eq!(&rgba[4..8], &[1, 0, 7, 0xFF]);
    }
}
