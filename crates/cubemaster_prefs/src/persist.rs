use std::path::{Path, PathBuf};

use eyre::{OptionExt, Result};
use serde::Serialize;

const PREFS_FILE_NAME: &str = "cubemaster.yaml";

pub fn prefs_file() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "Cubemaster")
        .ok_or_eyre("unable to locate home directory")?;
    Ok(dirs.config_dir().join(PREFS_FILE_NAME))
}

pub fn user_config_source() -> Result<impl config::Source + Send + Sync + 'static> {
    Ok(config::File::from(prefs_file()?).required(false))
}

pub fn save(prefs_data: &impl Serialize) -> Result<PathBuf> {
    let path = prefs_file()?;
    save_to(&path, prefs_data)?;
    Ok(path)
}

pub fn save_to(path: &Path, prefs_data: &impl Serialize) -> Result<()> {
    if let Some(p) = path.parent() {
        std::fs::create_dir_all(p)?;
    }
    serde_norway::to_writer(std::fs::File::create(path)?, prefs_data)?;
    Ok(())
}

pub fn backup_prefs_file() {
    let Ok(path) = prefs_file() else { return };
    if !path.exists() {
        return;
    }
    let backup = path.with_extension("yaml.bak");
    match std::fs::rename(&path, &backup) {
        Ok(()) => log::warn!("Moved invalid preferences file to {}", backup.display()),
        Err(e) => log::error!("Error backing up preferences file: {e}"),
    }
}
