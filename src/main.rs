use eframe::egui;
use sit_reminder::app::ReminderApp;
use sit_reminder::logging;
use sit_reminder::settings::Settings;

fn main() {
    let settings_path = Settings::default_path();
    let resume_previous = settings_path.exists();
    let settings = Settings::load(&settings_path);

    let log_file = settings
        .debug_logging
        .then(|| settings_path.with_file_name("sit_reminder.log"));
    logging::init(settings.debug_logging, log_file);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([340.0, 200.0])
            .with_min_inner_size([300.0, 180.0])
            .with_always_on_top(),
        ..Default::default()
    };

    let _ = eframe::run_native(
        "Sit Reminder",
        native_options,
        Box::new(move |_cc| Box::new(ReminderApp::new(settings, settings_path, resume_previous))),
    );
}
