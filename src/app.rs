use crate::countdown::{Countdown, RunState};
use crate::notify;
use crate::overlay::{Overlay, OverlayAction};
use crate::settings::{Settings, REST_MINUTES_RANGE, WORK_MINUTES_RANGE};
use eframe::egui;
use std::path::PathBuf;
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_secs(1);

/// Delay before a previous session's countdown is restarted on launch.
const AUTO_START_DELAY: Duration = Duration::from_secs(1);

pub struct ReminderApp {
    settings: Settings,
    settings_path: PathBuf,
    countdown: Countdown,
    overlay: Overlay,
    // Spinbox values; read into the machine only when a countdown starts.
    work_minutes: u32,
    rest_minutes: u32,
    last_tick: Instant,
    auto_start_at: Option<Instant>,
    quitting: bool,
    // Must stay alive or the tray icon disappears.
    #[cfg(feature = "tray")]
    _tray_icon: Option<tray_icon::TrayIcon>,
}

impl ReminderApp {
    /// `resume_previous` restarts the countdown shortly after launch, the
    /// way a pre-existing settings file indicates an earlier session.
    pub fn new(settings: Settings, settings_path: PathBuf, resume_previous: bool) -> Self {
        let now = Instant::now();
        Self {
            work_minutes: settings.work_time,
            rest_minutes: settings.rest_time,
            overlay: Overlay::new(settings.timer_position),
            countdown: Countdown::new(),
            settings,
            settings_path,
            last_tick: now,
            auto_start_at: resume_previous.then(|| now + AUTO_START_DELAY),
            quitting: false,
            #[cfg(feature = "tray")]
            _tray_icon: crate::tray::setup_tray(),
        }
    }

    /// Advance the wall clock: auto-start, then one tick per elapsed second.
    fn advance_clock(&mut self) {
        let now = Instant::now();
        if let Some(at) = self.auto_start_at {
            if now >= at {
                self.auto_start_at = None;
                if self.countdown.run_state() == RunState::Stopped {
                    tracing::info!("restarting countdown from previous session");
                    self.start_countdown(now);
                }
            }
        }
        if !self.countdown.is_running() {
            self.last_tick = now;
            return;
        }
        while now.duration_since(self.last_tick) >= TICK {
            self.last_tick += TICK;
            if let Some(transition) = self.countdown.tick() {
                let (title, body) = transition.notification();
                tracing::info!(title, "phase transition");
                notify::send(title, body);
            }
        }
    }

    fn start_countdown(&mut self, now: Instant) {
        self.countdown.start(self.work_minutes, self.rest_minutes);
        self.last_tick = now;
        self.settings.work_time = self.work_minutes;
        self.settings.rest_time = self.rest_minutes;
        self.persist_settings();
    }

    fn persist_settings(&self) {
        if let Err(e) = self.settings.save(&self.settings_path) {
            tracing::error!("failed to save settings: {e}");
        }
    }

    fn settings_window_ui(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Work minutes");
                ui.add(egui::DragValue::new(&mut self.work_minutes).clamp_range(WORK_MINUTES_RANGE));
                ui.label("Rest minutes");
                ui.add(egui::DragValue::new(&mut self.rest_minutes).clamp_range(REST_MINUTES_RANGE));
            });

            if ui
                .checkbox(&mut self.settings.show_on_desktop, "Show countdown on desktop")
                .changed()
            {
                self.persist_settings();
            }

            ui.horizontal(|ui| {
                let label = match self.countdown.run_state() {
                    RunState::Running => "Pause",
                    RunState::Paused => "Resume",
                    RunState::Stopped => "Start",
                };
                if ui.button(label).clicked() {
                    match self.countdown.run_state() {
                        RunState::Running => self.countdown.pause(),
                        _ => self.start_countdown(Instant::now()),
                    }
                }
                if ui.button("Stop").clicked() {
                    self.countdown.stop();
                }
            });

            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(self.countdown.display_time())
                        .size(24.0)
                        .strong(),
                );
                ui.label(self.countdown.status_text());
            });
        });
    }

    fn overlay_ui(&mut self, ctx: &egui::Context) {
        let time_text = self.countdown.display_time();
        let actions = self
            .overlay
            .ui(ctx, &time_text, self.countdown.status_text());
        for action in actions {
            match action {
                OverlayAction::TogglePause => match self.countdown.run_state() {
                    RunState::Running => self.countdown.pause(),
                    RunState::Paused => self.countdown.start(self.work_minutes, self.rest_minutes),
                    RunState::Stopped => {}
                },
                OverlayAction::RaiseSettings => Self::raise_window(ctx),
                OverlayAction::PositionChanged(pos) => {
                    self.settings.timer_position = Some(pos);
                    self.persist_settings();
                }
            }
        }
    }

    fn raise_window(ctx: &egui::Context) {
        ctx.send_viewport_cmd_to(egui::ViewportId::ROOT, egui::ViewportCommand::Visible(true));
        ctx.send_viewport_cmd_to(egui::ViewportId::ROOT, egui::ViewportCommand::Focus);
    }

    #[cfg(feature = "tray")]
    fn handle_tray_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = tray_icon::menu::MenuEvent::receiver().try_recv() {
            match event.id.0.as_str() {
                crate::tray::MENU_SHOW => Self::raise_window(ctx),
                crate::tray::MENU_QUIT => {
                    tracing::info!("quit requested from tray");
                    self.quitting = true;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                _ => {}
            }
        }
        while let Ok(event) = tray_icon::TrayIconEvent::receiver().try_recv() {
            if matches!(event, tray_icon::TrayIconEvent::DoubleClick { .. }) {
                Self::raise_window(ctx);
            }
        }
    }

    #[cfg(not(feature = "tray"))]
    fn handle_tray_events(&mut self, _ctx: &egui::Context) {}
}

impl eframe::App for ReminderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_tray_events(ctx);
        self.advance_clock();
        self.settings_window_ui(ctx);
        if self.settings.show_on_desktop {
            self.overlay_ui(ctx);
        }

        // Closing the settings window hides it; the countdown keeps running
        // until the tray's Quit entry is used.
        if ctx.input(|i| i.viewport().close_requested()) && !self.quitting {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            ctx.send_viewport_cmd(egui::ViewportCommand::Visible(false));
        }

        // Keep ticking (and the tray menu responsive) while hidden.
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
