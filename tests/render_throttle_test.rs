use tui_memory::core::Run;
use tui_memory::term::RenderThrottle;
use tui_memory::types::{Viewport, STATIC_RENDER_INTERVAL_MS};

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(STATIC_RENDER_INTERVAL_MS);
    assert!(t.should_render(0, 1, true));
}

#[test]
fn render_throttle_static_renders_on_change() {
    let mut t = RenderThrottle::new(STATIC_RENDER_INTERVAL_MS);
    assert!(t.should_render(0, 1, true));
    assert!(t.should_render(1, 2, true));
}

#[test]
fn render_throttle_static_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(!t.should_render(10, 1, true));
    assert!(!t.should_render(249, 1, true));
    assert!(t.should_render(250, 1, true));
}

#[test]
fn render_throttle_dynamic_always_renders() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, false));
    assert!(t.should_render(1, 1, false));
    assert!(t.should_render(2, 1, false));
}

#[test]
fn countdown_changes_the_snapshot_once_per_second() {
    let run = Run::starting_at(tui_memory::types::Level::new(5).unwrap(), 1, Viewport::default(), 0);
    assert_eq!(run.snapshot(1), run.snapshot(1_000));
    assert_ne!(run.snapshot(1_000), run.snapshot(1_001));
}
