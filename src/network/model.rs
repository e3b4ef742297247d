use crate::locale::Localized;
use derive_more::{AsRef, Deref, Display, From, Into};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

/// A leaf node of the network: one client organization.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: Localized,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub description: Option<Localized>,
}

/// A sector grouping clients; rendered as a ring node with its entries
/// orbiting it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: Localized,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Dataset {
    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

const DEFAULT_DATASET: &str = include_str!("../default_clients.toml");

pub fn dataset_path() -> Result<std::path::PathBuf, DatasetError> {
    let proj_dirs =
        ProjectDirs::from("com", "loginhr", "orbis").ok_or(DatasetError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("clients.toml"))
}

/// Loads the client dataset: the built-in data overlaid with an optional
/// user-provided `clients.toml`.
pub fn load_dataset() -> Result<Dataset, DatasetError> {
    let dataset_path = dataset_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from_str(
            DEFAULT_DATASET,
            config::FileFormat::Toml,
        ))
        .add_source(config::File::from(dataset_path).required(false))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Dataset {
    match load_dataset() {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("failed to load client dataset: {e}");
            Dataset::default()
        }
    }
}

/// Which category is expanded to show its entries. At most one at a time;
/// picking the active category again collapses it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    category: Option<CategoryId>,
    entry: Option<EntryId>,
}

impl Selection {
    pub fn category(&self) -> Option<&CategoryId> {
        self.category.as_ref()
    }

    pub fn entry(&self) -> Option<&EntryId> {
        self.entry.as_ref()
    }

    pub fn toggle_category(&mut self, id: &CategoryId) {
        if self.category.as_ref() == Some(id) {
            self.reset();
        } else {
            self.category = Some(id.clone());
            self.entry = None;
        }
    }

    pub fn select_entry(&mut self, id: &EntryId) {
        self.entry = Some(id.clone());
    }

    pub fn reset(&mut self) {
        self.category = None;
        self.entry = None;
    }
}
