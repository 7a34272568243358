//! Client-local key/value store, one JSON object file in the config dir.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

pub const TOKEN_KEY: &str = "token";
/// User record returned at login, kept beside the token.
pub const USER_KEY: &str = "user";

const APP_QUALIFIER: &str = "ai";
const APP_ORG: &str = "AXIVAI";
const APP_NAME: &str = "AXIVAI";
const STORAGE_FILENAME: &str = "local_storage.json";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage directory unavailable")]
    Unavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq)]
pub struct LocalStorage {
    path: Option<PathBuf>,
}

impl LocalStorage {
    /// Store in the platform config directory. Reads yield nothing and
    /// writes fail when no such directory exists.
    pub fn open() -> Self {
        match ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME) {
            Some(dirs) => Self::at(dirs.config_dir().join(STORAGE_FILENAME)),
            None => {
                warn!("no config directory available, local storage disabled");
                Self { path: None }
            }
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        match self.load().remove(key)? {
            Value::String(text) => Some(text),
            other => Some(other.to_string()),
        }
    }

    pub fn set_string(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|entries| {
            entries.insert(key.to_string(), Value::String(value.to_string()));
        })
    }

    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.load().remove(key)?;
        serde_json::from_value(value)
            .map_err(|err| warn!("ignoring unreadable stored {key}: {err}"))
            .ok()
    }

    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let value = serde_json::to_value(value)?;
        self.update(|entries| {
            entries.insert(key.to_string(), value);
        })
    }

    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.update(|entries| {
            entries.remove(key);
        })
    }

    fn load(&self) -> Map<String, Value> {
        let Some(path) = self.path.as_ref() else {
            return Map::new();
        };
        let Ok(data) = fs::read_to_string(path) else {
            return Map::new();
        };
        match serde_json::from_str::<Value>(&data) {
            Ok(Value::Object(entries)) => entries,
            Ok(_) | Err(_) => {
                warn!("local storage at {} is corrupt, starting empty", path.display());
                Map::new()
            }
        }
    }

    fn update(&self, apply: impl FnOnce(&mut Map<String, Value>)) -> Result<(), StorageError> {
        let path = self.path.as_ref().ok_or(StorageError::Unavailable)?;
        let mut entries = self.load();
        apply(&mut entries);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&Value::Object(entries))?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::domain::privacy::{PrivacySetting, PrivacySettings, PRIVACY_STORAGE_KEY};

    #[test]
    fn token_round_trip_and_removal() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::at(dir.path().join("nested").join("store.json"));

        assert_eq!(storage.get_string(TOKEN_KEY), None);
        storage.set_string(TOKEN_KEY, "abc").unwrap();
        assert_eq!(storage.get_string(TOKEN_KEY).as_deref(), Some("abc"));

        storage.remove(TOKEN_KEY).unwrap();
        assert_eq!(storage.get_string(TOKEN_KEY), None);
    }

    #[test]
    fn keys_do_not_clobber_each_other() {
        let dir = tempdir().unwrap();
        let storage = LocalStorage::at(dir.path().join("store.json"));
        let mut settings = PrivacySettings::default();
        settings.toggle(PrivacySetting::AnalyticsOptIn);

        storage.set_string(TOKEN_KEY, "abc").unwrap();
        storage.set_json(PRIVACY_STORAGE_KEY, &settings).unwrap();

        assert_eq!(storage.get_string(TOKEN_KEY).as_deref(), Some("abc"));
        assert_eq!(
            storage.get_json::<PrivacySettings>(PRIVACY_STORAGE_KEY),
            Some(settings)
        );
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();
        let storage = LocalStorage::at(&path);

        assert_eq!(storage.get_string(TOKEN_KEY), None);
        storage.set_string(TOKEN_KEY, "fresh").unwrap();
        assert_eq!(storage.get_string(TOKEN_KEY).as_deref(), Some("fresh"));
    }

    #[test]
    fn missing_directory_is_unavailable() {
        let storage = LocalStorage { path: None };
        assert_eq!(storage.get_string(TOKEN_KEY), None);
        assert!(matches!(
            storage.set_string(TOKEN_KEY, "x"),
            Err(StorageError::Unavailable)
        ));
    }
}
