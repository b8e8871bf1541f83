mod common;

use pane_bridge::Window;
use pane_common::{
    BridgeError, CursorIcon, LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize, Size,
    UserAttentionType,
};
use pane_engine::{SCREEN_SIZE, TITLEBAR_HEIGHT};

#[test]
fn initial_geometry() {
    let (_bridge, _, _event_loop, window) = common::window();
    assert_eq!(window.inner_size().unwrap(), PhysicalSize::new(320, 240));
    assert_eq!(
        window.outer_size().unwrap(),
        PhysicalSize::new(320, 240 + TITLEBAR_HEIGHT)
    );
    assert_eq!(window.outer_position().unwrap(), PhysicalPosition::new(0, 0));
    assert_eq!(
        window.inner_position().unwrap(),
        PhysicalPosition::new(0, TITLEBAR_HEIGHT as i32)
    );
    assert!(!window.is_maximized().unwrap());
}

#[test]
fn decorations_affect_outer_geometry() {
    let (_bridge, _, _event_loop, window) = common::window();
    window.set_decorations(false).unwrap();
    assert_eq!(window.outer_size().unwrap(), window.inner_size().unwrap());
    assert_eq!(
        window.inner_position().unwrap(),
        window.outer_position().unwrap()
    );
}

#[test]
fn logical_values_use_the_current_scale_factor() {
    let (_bridge, _, _event_loop, window) = common::window();
    window
        .set_outer_position(LogicalPosition::new(12.0, 8.0))
        .unwrap();
    assert_eq!(window.outer_position().unwrap(), PhysicalPosition::new(12, 8));
    assert_eq!(
        window.logical_outer_position().unwrap(),
        LogicalPosition::new(12.0, 8.0)
    );
    window.set_inner_size(LogicalSize::new(200.0, 100.0)).unwrap();
    assert_eq!(window.inner_size().unwrap(), PhysicalSize::new(200, 100));
}

#[test]
fn size_bounds_clamp_the_inner_size() {
    let (_bridge, _, _event_loop, window) = common::window();
    let max = Size::Physical(PhysicalSize::new(300, 200));
    window.set_max_inner_size(Some(max)).unwrap();
    assert_eq!(window.inner_size().unwrap(), PhysicalSize::new(300, 200));

    window.set_max_inner_size(None).unwrap();
    window
        .set_min_inner_size(Some(Size::Physical(PhysicalSize::new(500, 400))))
        .unwrap();
    assert_eq!(window.inner_size().unwrap(), PhysicalSize::new(500, 400));
    window.set_inner_size(PhysicalSize::new(10, 10)).unwrap();
    assert_eq!(window.inner_size().unwrap(), PhysicalSize::new(500, 400));
}

#[test]
fn maximize_and_restore() {
    let (_bridge, _, _event_loop, window) = common::window();
    window.set_outer_position(PhysicalPosition::new(40, 40)).unwrap();
    window.set_maximized(true).unwrap();
    assert!(window.is_maximized().unwrap());
    assert_eq!(window.outer_size().unwrap(), SCREEN_SIZE);
    assert_eq!(window.outer_position().unwrap(), PhysicalPosition::new(0, 0));

    window.set_maximized(false).unwrap();
    assert!(!window.is_maximized().unwrap());
    assert_eq!(window.inner_size().unwrap(), PhysicalSize::new(320, 240));
    assert_eq!(window.outer_position().unwrap(), PhysicalPosition::new(40, 40));
}

#[test]
fn plain_setters_are_accepted() {
    let (_bridge, _, _event_loop, window) = common::window();
    window.set_title("pane").unwrap();
    window.set_visible(false).unwrap();
    window.set_resizable(false).unwrap();
    window.set_minimized(true).unwrap();
    window.set_always_on_top(true).unwrap();
    window.set_ime_position(PhysicalPosition::new(4, 4)).unwrap();
    window
        .request_user_attention(Some(UserAttentionType::Critical))
        .unwrap();
    window.request_user_attention(None).unwrap();
    window.set_cursor_icon(CursorIcon::Crosshair).unwrap();
    window.set_cursor_grab(true).unwrap();
    window.set_cursor_visible(false).unwrap();
}

#[test]
fn cursor_must_stay_inside_the_window() {
    let (_bridge, _, _event_loop, window) = common::window();
    window.set_cursor_position(PhysicalPosition::new(10, 10)).unwrap();
    let err = window
        .set_cursor_position(PhysicalPosition::new(320, 10))
        .unwrap_err();
    assert!(matches!(err, BridgeError::EngineRejection { .. }), "{err}");
}

#[test]
fn window_icon_length_is_checked() {
    let (_bridge, _, _event_loop, window) = common::window();
    let rgba = vec![0xFF; 16 * 16 * 4];
    window.set_window_icon(Some((&rgba[..], 16, 16))).unwrap();
    window.set_window_icon(None).unwrap();
    let err = window.set_window_icon(Some((&rgba[1..], 16, 16))).unwrap_err();
    assert!(matches!(err, BridgeError::EngineRejection { .. }), "{err}");
}

#[test]
fn frames_round_trip_through_the_raw_channel() {
    let (_bridge, _, _event_loop, window) = common::window();
    assert_eq!(window.view_frame().unwrap(), vec![0; 320 * 240 * 4]);

    let rgba: Vec<u8> = (0..320 * 240 * 4).map(|i| (i % 251) as u8).collect();
    window.draw_frame(&rgba).unwrap();
    window.render_frame().unwrap();
    assert_eq!(window.view_frame().unwrap(), rgba);

    window.resize_frame(2, 2).unwrap();
    assert_eq!(window.view_frame().unwrap(), vec![0; 16]);
}

#[test]
fn wrong_frame_length_is_rejected() {
    let (_bridge, _, _event_loop, window) = common::window();
    let err = window.draw_frame(&[0; 12]).unwrap_err();
    match err {
        BridgeError::EngineRejection { message, .. } => {
            assert!(message.contains("320x240x4"), "{message}");
        }
        other => panic!("expected an engine rejection, got {other}"),
    }
}

#[test]
fn oversized_dimensions_are_rejected_and_the_bridge_stays_usable() {
    let (bridge, _, event_loop, window) = common::window();

    let err = Window::new(&event_loop, u32::MAX, u32::MAX).unwrap_err();
    assert!(matches!(err, BridgeError::EngineRejection { .. }), "{err}");
    let err = window.resize_frame(u32::MAX, u32::MAX).unwrap_err();
    assert!(matches!(err, BridgeError::EngineRejection { .. }), "{err}");
    let no_pixels: &[u8] = &[];
    let err = window
        .set_window_icon(Some((no_pixels, u32::MAX, u32::MAX)))
        .unwrap_err();
    assert!(matches!(err, BridgeError::EngineRejection { .. }), "{err}");

    assert!(bridge.is_loaded());
    assert_eq!(bridge.epoch(), 1);
    assert_eq!(window.inner_size().unwrap(), PhysicalSize::new(320, 240));
    assert_eq!(window.view_frame().unwrap().len(), 320 * 240 * 4);
}

#[test]
fn zero_sized_frames_are_rejected() {
    let (_bridge, _, event_loop, window) = common::window();
    let err = Window::new(&event_loop, 0, 240).unwrap_err();
    assert!(matches!(err, BridgeError::EngineRejection { .. }), "{err}");
    for (width, height) in [(0, 0), (0, 2), (2, 0)] {
        let err = window.resize_frame(width, height).unwrap_err();
        assert!(matches!(err, BridgeError::EngineRejection { .. }), "{err}");
    }
    assert_eq!(window.view_frame().unwrap().len(), 320 * 240 * 4);
}
