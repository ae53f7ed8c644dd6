//! Board settings, layered with figment.
//!
//! Sources, highest priority first:
//! 1. Environment variables with the `LANEBOARD_` prefix
//! 2. `laneboard.toml` in the working directory
//! 3. Built-in defaults

use crate::domain::board::{default_lanes, BoardConfig, LaneDefinition};
use crate::drag::DISTANCE_OFFSET;
use crate::error::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const fn default_distance_offset() -> f64 {
    DISTANCE_OFFSET
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BoardSettings {
    /// Bias added to a slot's top edge when resolving the drop slot.
    #[serde(default = "default_distance_offset")]
    pub distance_offset: f64,

    /// Start from the demo cards when nothing is stored yet.
    #[serde(default)]
    pub seed_defaults: bool,

    /// Directory that holds the board file. Defaults to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,

    /// Lane headings, as `[[lanes]]` tables with `lane` and `title` keys.
    #[serde(default = "default_lanes")]
    pub lanes: Vec<LaneDefinition>,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            distance_offset: default_distance_offset(),
            seed_defaults: false,
            storage_dir: None,
            lanes: default_lanes(),
        }
    }
}

impl BoardSettings {
    pub const CONFIG_FILE: &'static str = "laneboard.toml";
    pub const ENV_PREFIX: &'static str = "LANEBOARD_";

    /// Loads settings from the default sources
    pub fn load() -> Result<Self> {
        Ok(Self::figment().extract()?)
    }

    /// Loads settings with `path` in place of `laneboard.toml`
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::figment_with_file(path).extract()?)
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        Self::figment_with_file(Self::CONFIG_FILE)
    }

    fn figment_with_file(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(Self::ENV_PREFIX))
    }

    /// Board configuration built from the lane table
    pub fn board_config(&self) -> BoardConfig {
        BoardConfig::new(self.lanes.clone())
    }

    /// Directory the file backend should use
    pub fn storage_root(&self) -> PathBuf {
        self.storage_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
