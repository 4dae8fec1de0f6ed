//! Error types for gridnav.
//!
//! Algorithmic failures (no path, blocked start, out-of-bounds requests) are
//! values, not errors; `NavError` covers only configuration loading.

use thiserror::Error;

/// gridnav error type
#[derive(Error, Debug)]
pub enum NavError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, NavError>;
