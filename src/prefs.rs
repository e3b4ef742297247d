use crate::locale::{Language, PrefsBackend};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Prefs {
    #[serde(default)]
    pub language: Option<Language>,
}

#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("Failed to determine preferences directory")]
    PrefsDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub fn prefs_path() -> Result<std::path::PathBuf, PrefsError> {
    let proj_dirs =
        ProjectDirs::from("com", "loginhr", "orbis").ok_or(PrefsError::PrefsDirNotFound)?;
    Ok(proj_dirs.config_dir().join("prefs.toml"))
}

pub fn load_prefs() -> Result<Prefs, PrefsError> {
    let prefs_path = prefs_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(prefs_path).required(false))
        .add_source(config::Environment::with_prefix("ORBIS"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Preferences stored under the user's config directory. Reads are layered
/// with `ORBIS_*` environment overrides; writes replace the whole file.
pub struct FilePrefs;

impl PrefsBackend for FilePrefs {
    fn load(&self) -> Option<Language> {
        match load_prefs() {
            Ok(prefs) => prefs.language,
            Err(e) => {
                // An unreadable or malformed file is treated as "no choice yet".
                log::warn!("ignoring unreadable preferences: {e}");
                None
            }
        }
    }

    fn store(&self, lang: Language) -> Result<(), PrefsError> {
        let path = prefs_path()?;
        if let Some(parent) = path.parent() {
            fs_err::create_dir_all(parent)?;
        }
        fs_err::write(&path, format!("language = \"{lang}\"\n"))?;
        Ok(())
    }
}
