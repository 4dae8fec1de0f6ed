//! Unified configuration loading.
//!
//! Every tunable in the library lives in one TOML document; each section is
//! owned by the component it configures. Missing fields and missing
//! sections fall back to the reference defaults, so an empty file is a
//! valid configuration.
//!
//! ```toml
//! [grid]
//! cell_size = 10.0
//!
//! [search]
//! turn_penalty = 8
//!
//! [movement]
//! arrive_epsilon = 0.25
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::grid::BuilderConfig;
use crate::movement::MoverConfig;
use crate::pathfinding::AStarConfig;

/// Top-level configuration document
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NavConfig {
    /// Grid construction settings
    #[serde(default)]
    pub grid: BuilderConfig,

    /// A* search settings
    #[serde(default)]
    pub search: AStarConfig,

    /// Path-following settings
    #[serde(default)]
    pub movement: MoverConfig,
}

impl NavConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: NavConfig = toml::from_str(content)?;
        Ok(config)
    }
}
