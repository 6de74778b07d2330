// SPDX-License-Identifier: MPL-2.0
//! Session state persisted as CBOR.
//!
//! This is state the user never edits directly (unlike `settings.toml`),
//! kept in `state.cbor` inside the data directory. Every failure degrades to
//! the default state and produces a warning string for the toast layer.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "state.cbor";

const PARSE_WARNING: &str = "Saved session state was unreadable and has been reset.";
const READ_WARNING: &str = "Saved session state could not be opened.";
const WRITE_WARNING: &str = "Session state could not be saved.";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppState {
    /// Directory of the last exported file; the save dialog opens there.
    #[serde(default)]
    pub last_export_directory: Option<PathBuf>,
}

impl AppState {
    /// Loads state from the default data directory.
    #[must_use]
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads state from `base_dir`, or the default data directory.
    #[must_use]
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = state_file_path(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to decode state");
                    (Self::default(), Some(PARSE_WARNING.to_string()))
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to open state");
                (Self::default(), Some(READ_WARNING.to_string()))
            }
        }
    }

    /// Saves state to the default data directory.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves state to `base_dir`, creating it when missing.
    ///
    /// Returns a warning when the state could not be written.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = state_file_path(base_dir) else {
            return Some(WRITE_WARNING.to_string());
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), error = %err, "failed to create data dir");
                return Some(WRITE_WARNING.to_string());
            }
        }

        let written = fs::File::create(&path)
            .map_err(|err| err.to_string())
            .and_then(|file| {
                ciborium::into_writer(self, BufWriter::new(file)).map_err(|err| err.to_string())
            });
        match written {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to write state");
                Some(WRITE_WARNING.to_string())
            }
        }
    }

    /// Remembers the parent directory of `file_path`. Paths without a parent
    /// leave the state unchanged.
    pub fn set_last_export_directory_from_file(&mut self, file_path: &Path) {
        if let Some(parent) = file_path.parent() {
            self.last_export_directory = Some(parent.to_path_buf());
        }
    }
}

fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
        path.push(STATE_FILE);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_export_directory() {
        assert!(AppState::default().last_export_directory.is_none());
    }

    #[test]
    fn export_directory_is_parent_of_file() {
        let mut state = AppState::default();
        state.set_last_export_directory_from_file(Path::new("/home/user/icons/icon.png"));
        assert_eq!(
            state.last_export_directory,
            Some(PathBuf::from("/home/user/icons"))
        );
    }

    #[test]
    fn root_path_leaves_directory_unset() {
        let mut state = AppState::default();
        state.set_last_export_directory_from_file(Path::new("/"));
        assert!(state.last_export_directory.is_none());
    }

    #[test]
    fn save_to_and_load_from_custom_directory() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().join("nested").join("data");

        let original = AppState {
            last_export_directory: Some(PathBuf::from("/exports")),
        };
        assert!(original.save_to(Some(base_dir.clone())).is_none());
        assert!(base_dir.join(STATE_FILE).exists());

        let (loaded, warning) = AppState::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, original);
    }

    #[test]
    fn missing_file_loads_default_silently() {
        let temp_dir = tempdir().expect("create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn corrupted_file_loads_default_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), "not valid cbor data").expect("write file");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some(PARSE_WARNING));
        assert_eq!(state, AppState::default());
    }
}
