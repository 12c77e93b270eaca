//! The floating always-on-top countdown overlay.
//!
//! Rendered as an immediate child viewport of the settings window. Pointer
//! input is fed through a [`GestureArbiter`]: a single click toggles
//! pause/resume, a double click raises the settings window, and a drag moves
//! the overlay, persisting its position on release.

use crate::gesture::{GestureArbiter, GestureEvent};
use crate::settings::OverlayPosition;
use eframe::egui;
use std::time::Instant;

pub const OVERLAY_SIZE: [f32; 2] = [150.0, 56.0];

/// What the overlay asked the application to do this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayAction {
    TogglePause,
    RaiseSettings,
    PositionChanged(OverlayPosition),
}

pub struct Overlay {
    arbiter: GestureArbiter,
    position: Option<OverlayPosition>,
}

impl Overlay {
    pub fn new(position: Option<OverlayPosition>) -> Self {
        Self {
            arbiter: GestureArbiter::default(),
            position,
        }
    }

    /// Show the overlay viewport and return the actions it produced.
    pub fn ui(
        &mut self,
        ctx: &egui::Context,
        time_text: &str,
        status_text: &str,
    ) -> Vec<OverlayAction> {
        let mut builder = egui::ViewportBuilder::default()
            .with_title("Countdown")
            .with_inner_size(OVERLAY_SIZE)
            .with_decorations(false)
            .with_resizable(false)
            .with_taskbar(false)
            .with_always_on_top();
        if let Some(pos) = self.position {
            builder = builder.with_position(egui::pos2(pos.x as f32, pos.y as f32));
        }

        let mut actions = Vec::new();
        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("countdown-overlay"),
            builder,
            |ctx, _class| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(time_text).size(20.0).strong());
                        ui.label(status_text);
                    });
                });
                self.pump_pointer(ctx, &mut actions);
            },
        );
        actions
    }

    /// Translate this frame's pointer state into gesture events.
    fn pump_pointer(&mut self, ctx: &egui::Context, actions: &mut Vec<OverlayAction>) {
        let now = Instant::now();
        let (pressed, released, any_down, delta) = ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.any_down(),
                i.pointer.delta(),
            )
        });

        if pressed {
            let event = self.arbiter.press(now);
            self.dispatch(event, ctx, actions);
        }
        if any_down && delta != egui::Vec2::ZERO {
            let was_dragging = self.arbiter.is_dragging();
            let event = self.arbiter.motion(now, delta.x, delta.y);
            if !was_dragging && self.arbiter.is_dragging() {
                // Hand the rest of the drag to the window system.
                ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
            }
            self.dispatch(event, ctx, actions);
        }
        // The release can be swallowed by the window-system drag, so a drag
        // with no button held also counts as ended.
        if released || (self.arbiter.is_dragging() && !any_down) {
            let event = self.arbiter.release(now);
            self.dispatch(event, ctx, actions);
        }
        let event = self.arbiter.poll(now);
        self.dispatch(event, ctx, actions);
    }

    fn dispatch(
        &mut self,
        event: Option<GestureEvent>,
        ctx: &egui::Context,
        actions: &mut Vec<OverlayAction>,
    ) {
        match event {
            Some(GestureEvent::SingleClick) => actions.push(OverlayAction::TogglePause),
            Some(GestureEvent::DoubleClick) => actions.push(OverlayAction::RaiseSettings),
            Some(GestureEvent::Drag { .. }) => {}
            Some(GestureEvent::DragEnd) => {
                if let Some(rect) = ctx.input(|i| i.viewport().outer_rect) {
                    let pos = OverlayPosition {
                        x: rect.min.x.round() as i32,
                        y: rect.min.y.round() as i32,
                    };
                    self.position = Some(pos);
                    actions.push(OverlayAction::PositionChanged(pos));
                }
            }
            None => {}
        }
    }
}
