pub mod app;
pub mod countdown;
pub mod gesture;
pub mod logging;
pub mod notify;
pub mod overlay;
pub mod settings;
#[cfg(feature = "tray")]
pub mod tray;
