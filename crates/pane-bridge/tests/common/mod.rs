#![allow(dead_code)]

use std::sync::Arc;

use pane_bridge::{Bridge, EventLoop, Window};
use pane_common::{CachePolicy, EngineLocation, EngineSource};
use pane_engine::{HeadlessLoader, OsSimulator};

pub fn remote_source() -> EngineSource {
    EngineSource {
        location: EngineLocation::Remote {
            url: "https://github.com/denosaurs/pane/releases/download/0.2.0/".into(),
            version: "0.2.0".into(),
        },
        cache: CachePolicy::Store,
    }
}

/// An unloaded bridge over a headless engine, plus its OS simulator.
pub fn bridge() -> (Bridge, OsSimulator) {
    let loader = HeadlessLoader::new();
    let os = loader.simulator();
    (Bridge::new(Arc::new(loader), remote_source()), os)
}

/// A loaded bridge with one event loop and one 320x240 window.
pub fn window() -> (Bridge, OsSimulator, EventLoop, Window) {
    let (bridge, os) = bridge();
    bridge.load().unwrap();
    let event_loop = EventLoop::new(&bridge).unwrap();
    let window = Window::new(&event_loop, 320, 240).unwrap();
    (bridge, os, event_loop, window)
}
