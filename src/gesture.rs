//! Click/double-click/drag disambiguation for the overlay.
//!
//! A press starts a short debounce window. A second press inside the window
//! is a double click; pointer movement past a small threshold reclassifies
//! the gesture as a drag and cancels any pending click. A press that survives
//! the window untouched becomes a single click. Timestamps are passed in
//! explicitly so the arbiter can be driven from tests.

use std::time::{Duration, Instant};

/// Interval separating a single click from the first half of a double click.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(250);

/// Cumulative pointer movement (in points) that turns a press into a drag.
pub const DRAG_THRESHOLD: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Debounce expired with no second press and no disqualifying movement.
    SingleClick,
    /// Second press while the debounce window was still open.
    DoubleClick,
    /// Pointer moved while the gesture is classified as a drag.
    Drag { dx: f32, dy: f32 },
    /// Drag finished; the new position should be persisted.
    DragEnd,
}

#[derive(Debug, Default)]
pub struct GestureArbiter {
    pending_click: Option<Instant>,
    pressed: bool,
    dragging: bool,
    moved: f32,
}

impl GestureArbiter {
    /// Primary button went down.
    pub fn press(&mut self, now: Instant) -> Option<GestureEvent> {
        self.pressed = true;
        self.dragging = false;
        self.moved = 0.0;
        if let Some(since) = self.pending_click.take() {
            if now.duration_since(since) < DOUBLE_CLICK_WINDOW {
                return Some(GestureEvent::DoubleClick);
            }
        }
        self.pending_click = Some(now);
        None
    }

    /// Pointer moved by `(dx, dy)` while the button is down.
    pub fn motion(&mut self, _now: Instant, dx: f32, dy: f32) -> Option<GestureEvent> {
        if !self.pressed {
            return None;
        }
        self.moved += (dx * dx + dy * dy).sqrt();
        if self.dragging {
            return Some(GestureEvent::Drag { dx, dy });
        }
        if self.moved > DRAG_THRESHOLD {
            // Movement reclassifies the gesture; the pending click dies.
            self.pending_click = None;
            self.dragging = true;
            return Some(GestureEvent::Drag { dx, dy });
        }
        None
    }

    /// Primary button released.
    pub fn release(&mut self, _now: Instant) -> Option<GestureEvent> {
        self.pressed = false;
        if self.dragging {
            self.dragging = false;
            self.moved = 0.0;
            return Some(GestureEvent::DragEnd);
        }
        None
    }

    /// Check the debounce timer. Call once per event-loop pass.
    pub fn poll(&mut self, now: Instant) -> Option<GestureEvent> {
        match self.pending_click {
            Some(since) if now.duration_since(since) >= DOUBLE_CLICK_WINDOW => {
                self.pending_click = None;
                Some(GestureEvent::SingleClick)
            }
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}
