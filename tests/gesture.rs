use sit_reminder::gesture::{GestureArbiter, GestureEvent, DOUBLE_CLICK_WINDOW};
use std::time::{Duration, Instant};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn lone_press_becomes_a_single_click_after_the_debounce() {
    let mut g = GestureArbiter::default();
    let t0 = Instant::now();
    assert_eq!(g.press(t0), None);
    assert_eq!(g.release(t0 + ms(40)), None);
    assert_eq!(g.poll(t0 + ms(100)), None);
    assert_eq!(
        g.poll(t0 + DOUBLE_CLICK_WINDOW),
        Some(GestureEvent::SingleClick)
    );
    // Fires once, not on every later poll.
    assert_eq!(g.poll(t0 + ms(400)), None);
}

#[test]
fn second_press_inside_the_window_is_one_double_click() {
    let mut g = GestureArbiter::default();
    let t0 = Instant::now();
    assert_eq!(g.press(t0), None);
    assert_eq!(g.release(t0 + ms(30)), None);
    assert_eq!(g.press(t0 + ms(120)), Some(GestureEvent::DoubleClick));
    assert_eq!(g.release(t0 + ms(150)), None);
    // No single click must follow.
    assert_eq!(g.poll(t0 + ms(400)), None);
    assert_eq!(g.poll(t0 + ms(800)), None);
}

#[test]
fn presses_separated_by_more_than_the_window_are_two_single_clicks() {
    let mut g = GestureArbiter::default();
    let t0 = Instant::now();
    g.press(t0);
    g.release(t0 + ms(20));
    assert_eq!(g.poll(t0 + ms(250)), Some(GestureEvent::SingleClick));
    assert_eq!(g.press(t0 + ms(400)), None);
    g.release(t0 + ms(430));
    assert_eq!(g.poll(t0 + ms(650)), Some(GestureEvent::SingleClick));
}

#[test]
fn movement_past_the_threshold_cancels_the_click_and_drags() {
    let mut g = GestureArbiter::default();
    let t0 = Instant::now();
    assert_eq!(g.press(t0), None);
    // Under 3px cumulative: still a potential click.
    assert_eq!(g.motion(t0 + ms(50), 1.0, 0.5), None);
    assert!(!g.is_dragging());
    // Crossing the threshold starts the drag.
    let ev = g.motion(t0 + ms(60), 2.5, 0.0);
    assert_eq!(ev, Some(GestureEvent::Drag { dx: 2.5, dy: 0.0 }));
    assert!(g.is_dragging());
    // The pending click is dead: no click events, even after the window.
    assert_eq!(g.poll(t0 + ms(300)), None);
    assert_eq!(g.release(t0 + ms(320)), Some(GestureEvent::DragEnd));
    assert_eq!(g.poll(t0 + ms(600)), None);
}

#[test]
fn each_motion_while_dragging_reports_its_delta() {
    let mut g = GestureArbiter::default();
    let t0 = Instant::now();
    g.press(t0);
    g.motion(t0 + ms(10), 4.0, 0.0);
    assert_eq!(
        g.motion(t0 + ms(20), -1.5, 2.0),
        Some(GestureEvent::Drag { dx: -1.5, dy: 2.0 })
    );
    assert_eq!(
        g.motion(t0 + ms(30), 0.5, -0.5),
        Some(GestureEvent::Drag { dx: 0.5, dy: -0.5 })
    );
    assert_eq!(g.release(t0 + ms(40)), Some(GestureEvent::DragEnd));
    assert!(!g.is_dragging());
}

#[test]
fn jitter_below_the_threshold_still_clicks() {
    let mut g = GestureArbiter::default();
    let t0 = Instant::now();
    g.press(t0);
    g.motion(t0 + ms(15), 0.5, 0.5);
    g.motion(t0 + ms(30), 0.5, 0.0);
    g.release(t0 + ms(45));
    assert_eq!(
        g.poll(t0 + DOUBLE_CLICK_WINDOW),
        Some(GestureEvent::SingleClick)
    );
}

#[test]
fn motion_without_a_press_is_ignored() {
    let mut g = GestureArbiter::default();
    let t0 = Instant::now();
    assert_eq!(g.motion(t0, 10.0, 10.0), None);
    assert!(!g.is_dragging());
    assert_eq!(g.poll(t0 + ms(300)), None);
}
