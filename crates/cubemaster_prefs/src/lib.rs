//! User preferences.

#![allow(missing_docs)] // fields are documented where they are not obvious

#[macro_use]
extern crate lazy_static;

use serde::{Deserialize, Serialize};

mod animation;
mod moves;
pub mod persist;

pub use animation::*;
pub use moves::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub animation: AnimationPreferences,
    pub moves: MovePreferences,
}
impl Preferences {
    /// Loads preferences from the user's preferences file layered over the
    /// defaults. If loading fails, then the existing file is backed up (if
    /// possible) and the default preferences are returned.
    pub fn load() -> Self {
        let mut config = config::Config::builder().add_source(default_config_source());

        match persist::user_config_source() {
            Ok(config_source) => config = config.add_source(config_source),
            Err(e) => log::warn!("Error loading user preferences: {e}"),
        }

        config
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                persist::backup_prefs_file();
                DEFAULT_PREFS.clone()
            })
    }

    /// Loads preferences from a YAML string layered over the defaults.
    pub fn from_yaml_str(s: &str) -> eyre::Result<Self> {
        Ok(config::Config::builder()
            .add_source(default_config_source())
            .add_source(config::File::from_str(s, PREFS_FILE_FORMAT))
            .build()?
            .try_deserialize()?)
    }

    /// Writes the preferences to the user's preferences file and returns its
    /// path.
    pub fn save(&self) -> eyre::Result<std::path::PathBuf> {
        let path =
            persist::save(self).inspect_err(|e| log::error!("Error saving preferences: {e}"))?;
        log::debug!("Saved preferences to {}", path.display());
        Ok(path)
    }
    /// Writes the preferences as YAML to `path`.
    pub fn save_to(&self, path: &std::path::Path) -> eyre::Result<()> {
        persist::save_to(path, self)
    }
}

fn default_config_source() -> config::File<config::FileSourceString, config::FileFormat> {
    config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT)
}
