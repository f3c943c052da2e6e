//! End-to-end window lifecycle scenarios driven through the engine facade

use ttpos_desktop::{DesktopEngine, InputResult, Vec2, WindowState};

fn engine() -> DesktopEngine {
    let mut engine = DesktopEngine::new();
    engine.init(1920.0, 1080.0);
    engine
}

#[test]
fn open_two_apps_cascade_and_focus() {
    let mut engine = engine();

    let a = engine.open_app("calculator");
    let b = engine.open_app("terminal");

    assert_ne!(a, b);
    assert_eq!(engine.focused(), Some(b));

    let rects = engine.window_rects();
    assert_eq!(rects.len(), 2);
    // Back to front: the unfocused first window renders behind
    assert_eq!(rects[0].id, a);
    assert_eq!(rects[1].id, b);
    // 30px diagonal cascade between consecutive windows
    assert_eq!(rects[0].rect.position(), Vec2::new(100.0, 50.0));
    assert_eq!(rects[1].rect.position(), Vec2::new(130.0, 80.0));
}

#[test]
fn minimize_passes_focus_then_restore_reclaims_it() {
    let mut engine = engine();
    let a = engine.open_app("calculator");
    let b = engine.open_app("terminal");

    engine.minimize_window(b);
    assert_eq!(engine.focused(), Some(a));
    // Minimized windows disappear from the render list
    assert_eq!(engine.window_rects().len(), 1);

    engine.restore_window(b);
    assert_eq!(engine.focused(), Some(b));
    assert_eq!(engine.window_rects().len(), 2);
}

#[test]
fn focus_handoff_across_minimize_and_close() {
    let mut engine = engine();
    let id0 = engine.open_app("calculator");
    let id1 = engine.open_app("terminal");
    assert_eq!(engine.focused(), Some(id1));

    engine.focus_window(id0);
    assert_eq!(engine.focused(), Some(id0));

    engine.minimize_window(id0);
    assert_eq!(engine.focused(), Some(id1));

    engine.close_window(id1);
    // The only remaining window is minimized, so nothing takes focus
    assert_eq!(engine.focused(), None);
    assert!(engine.window_rects().is_empty());
    assert_eq!(engine.window_count(), 1);
}

#[test]
fn close_focused_window_falls_back_to_most_recent() {
    let mut engine = engine();
    let a = engine.open_app("calculator");
    let b = engine.open_app("terminal");
    let c = engine.open_app("browser");

    engine.close_window(c);
    assert_eq!(engine.focused(), Some(b));

    engine.close_window(b);
    assert_eq!(engine.focused(), Some(a));

    engine.close_window(a);
    assert_eq!(engine.focused(), None);
    assert_eq!(engine.window_count(), 0);
}

#[test]
fn operations_after_close_are_harmless() {
    let mut engine = engine();
    let id = engine.open_app("calculator");
    engine.close_window(id);

    engine.minimize_window(id);
    engine.toggle_maximize(id);
    engine.focus_window(id);
    engine.close_window(id);

    assert_eq!(engine.window_count(), 0);
    assert_eq!(engine.focused(), None);
}

#[test]
fn maximize_round_trip_restores_geometry() {
    let mut engine = engine();
    let id = engine.open_app("calculator");
    let before = engine.window_rects()[0].rect;

    engine.toggle_maximize(id);
    let maximized = engine.window_rects()[0].clone();
    assert_eq!(maximized.state, WindowState::Maximized);
    assert_eq!(maximized.rect.size(), engine.desktop_size());

    engine.toggle_maximize(id);
    let restored = engine.window_rects()[0].clone();
    assert_eq!(restored.state, WindowState::Normal);
    assert_eq!(restored.rect, before);
}

#[test]
fn title_bar_drag_moves_window_and_releases_cleanly() {
    let mut engine = engine();
    let id = engine.open_app("calculator");

    // Grab the title bar 200px into the bar of the window at (100, 50)
    assert_eq!(engine.handle_pointer_down(300.0, 65.0), InputResult::Handled);
    engine.handle_pointer_move(900.0, 465.0);
    assert_eq!(engine.handle_pointer_up(), InputResult::Handled);

    let rect = engine.window_rects()[0].rect;
    assert_eq!(rect.position(), Vec2::new(700.0, 450.0));
    assert_eq!(engine.focused(), Some(id));

    // Releasing again with no gesture active stays a no-op
    assert_eq!(engine.handle_pointer_up(), InputResult::Unhandled);
}

#[test]
fn drag_never_strands_the_window_off_screen() {
    let mut engine = engine();
    engine.open_app("calculator");

    engine.handle_pointer_down(300.0, 65.0);
    engine.handle_pointer_move(10_000.0, -10_000.0);
    engine.handle_pointer_up();

    let rect = engine.window_rects()[0].rect;
    // At least 32px remain reachable on the right edge, title bar pinned
    assert_eq!(rect.x, 1920.0 - 32.0);
    assert_eq!(rect.y, 0.0);
}

#[test]
fn taskbar_restore_of_minimized_maximized_window() {
    let mut engine = engine();
    let id = engine.open_app("calculator");

    engine.toggle_maximize(id);
    engine.minimize_window(id);
    assert!(engine.window_rects().is_empty());

    engine.focus_window(id);
    let window = &engine.window_rects()[0];
    assert_eq!(window.state, WindowState::Maximized);
    assert_eq!(window.rect.size(), engine.desktop_size());
}

#[test]
fn alt_tab_cycles_only_visible_windows() {
    let mut engine = engine();
    let a = engine.open_app("calculator");
    let b = engine.open_app("terminal");
    let c = engine.open_app("browser");

    engine.minimize_window(b);
    assert_eq!(engine.focused(), Some(c));

    assert_eq!(engine.cycle_focus(), Some(a));
    assert_eq!(engine.cycle_focus(), Some(c));
    assert_eq!(engine.cycle_focus(), Some(a));
}
