use thiserror::Error;

/// Errors raised by the screen's few fallible helpers.
///
/// None of them reach the user: callers log and fall back to defaults.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("unknown theme mode: {0:?}")]
    UnknownThemeMode(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
