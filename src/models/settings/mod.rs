// Settings module
// Layout measurements and week start, loaded from a TOML file

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const SETTINGS_FILE_NAME: &str = "layout.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// 0 = Sunday, 1 = Monday, etc.
    pub first_day_of_week: u8,
    /// Granularity of the minute grid
    pub slot_minutes: u32,
    /// Pixel height of one slot
    pub slot_height: f32,
    pub event_row_height: f32,
    pub event_row_gap: f32,
    /// Space above the first event row in a month cell (day number)
    pub grid_top_offset: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            slot_minutes: 30,
            slot_height: 24.0,
            event_row_height: 20.0,
            event_row_gap: 2.0,
            grid_top_offset: 24.0,
        }
    }
}

impl LayoutSettings {
    pub fn event_row_spacing(&self) -> f32 {
        self.event_row_height + self.event_row_gap
    }

    /// Load settings from `path`, falling back to defaults when the file does
    /// not exist. A file that exists but cannot be read or parsed is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!(
                "No layout settings at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let settings: LayoutSettings = toml::from_str(&contents)?;
        Ok(settings.sanitized())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        log::debug!("Saved layout settings to {}", path.display());
        Ok(())
    }

    /// Clamp values that would make slot or row math degenerate.
    fn sanitized(mut self) -> Self {
        if self.first_day_of_week > 6 {
            log::warn!(
                "first_day_of_week {} out of range, wrapping",
                self.first_day_of_week
            );
            self.first_day_of_week %= 7;
        }
        if self.slot_minutes == 0 {
            log::warn!("slot_minutes must be positive, using 30");
            self.slot_minutes = 30;
        }
        if self.slot_height <= 0.0 {
            self.slot_height = Self::default().slot_height;
        }
        self
    }
}

/// Platform config location, e.g. `~/.config/calendar-layout/layout.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "KenBoyle", "CalendarLayout")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
}
