use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop the app from starting.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid color {value:?} for `{field}`: expected #RRGGBB")]
    InvalidColor { field: &'static str, value: String },
    #[error("`steps` is {steps}, but a session needs at least 100 to complete")]
    TooFewSteps { steps: u32 },
    #[error("failed to read label font {path}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("GUI error: {0}")]
    Gui(#[from] eframe::Error),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
