use thiserror::Error;

/// Errors raised at the edges of the layout engine: form drafts, settings
/// files and event files. The layout functions themselves are total.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid settings file: {0}")]
    SettingsParse(#[from] toml::de::Error),
    #[error("Could not serialize settings: {0}")]
    SettingsWrite(#[from] toml::ser::Error),
    #[error("Invalid date key '{0}', expected YYYY-MM-DD")]
    InvalidDateKey(String),
    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
    #[error("Please enter a title.")]
    EmptyTitle,
    #[error("Start and end times are required for timed events.")]
    MissingTimes,
}

pub type Result<T> = std::result::Result<T, LayoutError>;
