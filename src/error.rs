use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GaugeError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Failed to read font: {path}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported or corrupt font file: {0}")]
    FontParse(PathBuf),

    #[error("Failed to read chart file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {path}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("Pixel buffer error: {0}")]
    Pixels(#[from] pixels::Error),

    #[error("Tracing init failed: {0}")]
    Tracing(String),
}

pub type Result<T> = std::result::Result<T, GaugeError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
