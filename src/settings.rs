use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_WORK_MINUTES: u32 = 45;
pub const DEFAULT_REST_MINUTES: u32 = 5;

/// Allowed range for the work interval, in minutes.
pub const WORK_MINUTES_RANGE: std::ops::RangeInclusive<u32> = 1..=120;
/// Allowed range for the rest interval, in minutes.
pub const REST_MINUTES_RANGE: std::ops::RangeInclusive<u32> = 1..=30;

/// Screen coordinates of the overlay's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Work interval in minutes.
    #[serde(default = "default_work_time")]
    pub work_time: u32,
    /// Rest interval in minutes.
    #[serde(default = "default_rest_time")]
    pub rest_time: u32,
    /// Whether the floating countdown overlay is shown.
    #[serde(default = "default_show_on_desktop")]
    pub show_on_desktop: bool,
    /// Last overlay position. Absent until the overlay is first dragged.
    #[serde(default)]
    pub timer_position: Option<OverlayPosition>,
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
}

fn default_work_time() -> u32 {
    DEFAULT_WORK_MINUTES
}

fn default_rest_time() -> u32 {
    DEFAULT_REST_MINUTES
}

fn default_show_on_desktop() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_time: default_work_time(),
            rest_time: default_rest_time(),
            show_on_desktop: default_show_on_desktop(),
            timer_position: None,
            debug_logging: false,
        }
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// A missing or empty file yields the defaults. A file that fails to
    /// parse also yields the defaults, with a warning, rather than aborting
    /// startup. Out-of-range durations are clamped into bounds.
    pub fn load(path: &Path) -> Self {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Self::default();
        }
        match serde_json::from_str::<Self>(&content) {
            Ok(settings) => settings.normalized(),
            Err(e) => {
                tracing::warn!(
                    "failed to parse settings file {}: {e}; using defaults",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Overwrite `path` with the full settings record.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn normalized(mut self) -> Self {
        self.work_time = self
            .work_time
            .clamp(*WORK_MINUTES_RANGE.start(), *WORK_MINUTES_RANGE.end());
        self.rest_time = self
            .rest_time
            .clamp(*REST_MINUTES_RANGE.start(), *REST_MINUTES_RANGE.end());
        self
    }

    /// Per-user settings location, e.g. `~/.config/sit_reminder/settings.json`.
    pub fn default_path() -> PathBuf {
        dirs_next::config_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("sit_reminder")
            .join("settings.json")
    }
}
