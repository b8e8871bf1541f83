mod common;

use std::sync::Arc;

use pane_bridge::{Bridge, ConnectionState, EventLoop, Window};
use pane_common::{BridgeError, CachePolicy, EngineLocation, EngineSource};
use pane_engine::HeadlessLoader;

#[test]
fn dispatch_before_load_is_a_precondition_failure() {
    let (bridge, _) = common::bridge();
    assert_eq!(bridge.state(), ConnectionState::Unloaded);
    let err = EventLoop::new(&bridge).unwrap_err();
    assert!(matches!(err, BridgeError::Precondition(_)), "{err}");
    assert!(err.is_transport_level());
}

#[test]
fn handles_fail_after_unload() {
    let (bridge, _, _event_loop, window) = common::window();
    bridge.unload();
    assert!(!bridge.is_loaded());
    let err = window.set_title("gone").unwrap_err();
    assert!(matches!(err, BridgeError::Precondition(_)), "{err}");
    // Unloading again is harmless.
    bridge.unload();
}

#[test]
fn reload_invalidates_old_handles() {
    let (bridge, _, _old_loop, old_window) = common::window();
    assert_eq!(bridge.epoch(), 1);

    bridge.load().unwrap();
    assert_eq!(bridge.epoch(), 2);
    let err = old_window.inner_size().unwrap_err();
    assert!(matches!(err, BridgeError::Precondition(_)), "{err}");

    let event_loop = EventLoop::new(&bridge).unwrap();
    let window = Window::new(&event_loop, 64, 64).unwrap();
    assert_eq!(window.handle().epoch(), 2);
    // The fresh engine hands out the same resource ids again; only the
    // epoch tells the handles apart.
    assert_eq!(window.handle().rid(), old_window.handle().rid());
    assert_ne!(window.handle(), old_window.handle());
    assert_eq!(window.inner_size().unwrap().width, 64);
}

#[test]
fn missing_local_engine_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let source = EngineSource {
        location: EngineLocation::Local(dir.path().join("libpane.so")),
        cache: CachePolicy::None,
    };
    let bridge = Bridge::new(Arc::new(HeadlessLoader::new()), source);
    let err = bridge.load().unwrap_err();
    assert!(matches!(err, BridgeError::Io(_)), "{err}");
    assert_eq!(bridge.state(), ConnectionState::Unloaded);
}

#[test]
fn existing_local_engine_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("libpane.so");
    std::fs::write(&path, b"\x7fELF").unwrap();
    let source = EngineSource {
        location: EngineLocation::Local(path),
        cache: CachePolicy::None,
    };
    let bridge = Bridge::new(Arc::new(HeadlessLoader::new()), source);
    bridge.load().unwrap();
    assert_eq!(bridge.state(), ConnectionState::Loaded);
}

#[test]
fn engine_errors_are_rejections() {
    let (_bridge, _, event_loop, window) = common::window();
    let err = Window::new(&event_loop, 0, 240).unwrap_err();
    assert!(matches!(err, BridgeError::EngineRejection { .. }), "{err}");
    assert!(!err.is_transport_level());

    let err = window.drag_window().unwrap_err();
    assert!(err.engine_message().is_some_and(|m| m.contains("mouse button")));
}

#[test]
fn bridge_clones_share_the_connection() {
    let (bridge, _) = common::bridge();
    let clone = bridge.clone();
    clone.load().unwrap();
    assert!(bridge.is_loaded());
    assert_eq!(bridge.epoch(), clone.epoch());
}
