// SPDX-License-Identifier: MPL-2.0
//! Named design presets persisted in local storage.
//!
//! The whole collection lives under one storage key as a JSON array, in
//! insertion order. There is no schema version and no size limit: the list
//! grows until the user removes entries.
//!
//! A missing list, text that is not JSON, or JSON that is not an array is
//! treated as empty, and saving on top of it replaces it. Inside an array,
//! only entries that are not objects are dropped; damaged fields inside a
//! record fall back individually.

mod preset;
pub mod storage;

pub use preset::{Preset, Theme};
pub use storage::{FileStorage, KeyValueStorage, LocalStorage, MemoryStorage};

use crate::domain::design::DesignState;
use crate::error::Result;
use serde_json::Value;

/// Storage key holding the preset list.
pub const PRESETS_KEY: &str = "iconPresets";

/// Reads and rewrites the preset list in a [`KeyValueStorage`].
#[derive(Debug, Clone)]
pub struct PresetStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> PresetStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Decodes the stored list, or returns an empty list.
    #[must_use]
    pub fn list(&self) -> Vec<Preset> {
        decode(self.storage.get(PRESETS_KEY).as_deref())
    }

    /// Returns the preset at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Preset> {
        self.list().into_iter().nth(index)
    }

    /// Appends a snapshot of `state` and returns the updated list.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be encoded or written.
    pub fn save(&mut self, state: &DesignState) -> Result<Vec<Preset>> {
        let mut presets = self.list();
        presets.push(Preset::capture(state));
        self.write(&presets)?;
        Ok(presets)
    }

    /// Drops the preset at `index`, keeping the order of the rest, and
    /// returns the updated list. An unknown index leaves the list as is.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be encoded or written.
    pub fn remove(&mut self, index: usize) -> Result<Vec<Preset>> {
        let presets: Vec<Preset> = self
            .list()
            .into_iter()
            .enumerate()
            .filter_map(|(i, preset)| (i != index).then_some(preset))
            .collect();
        self.write(&presets)?;
        Ok(presets)
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn write(&mut self, presets: &[Preset]) -> Result<()> {
        let encoded = serde_json::to_string(presets)?;
        self.storage.set(PRESETS_KEY, &encoded)
    }
}

fn decode(raw: Option<&str>) -> Vec<Preset> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let records = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(records)) => records,
        Ok(_) => {
            tracing::warn!("stored preset list is not an array, treating it as empty");
            return Vec::new();
        }
        Err(err) => {
            tracing::warn!(error = %err, "stored preset list is unreadable, treating it as empty");
            return Vec::new();
        }
    };

    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(preset) => Some(preset),
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping unreadable preset");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::design::{BackgroundType, Shape};
    use tempfile::tempdir;

    fn state_with_label(label: &str) -> DesignState {
        let mut state = DesignState::default();
        state.set_label_input(label);
        state
    }

    fn labels(presets: &[Preset]) -> Vec<&str> {
        presets.iter().map(|p| p.number.as_str()).collect()
    }

    #[test]
    fn empty_storage_lists_nothing() {
        let store = PresetStore::new(MemoryStorage::new());
        assert!(store.list().is_empty());
        assert!(store.get(0).is_none());
    }

    #[test]
    fn save_appends_in_insertion_order() {
        let mut store = PresetStore::new(MemoryStorage::new());
        store.save(&state_with_label("1")).unwrap();
        store.save(&state_with_label("2")).unwrap();
        let presets = store.save(&state_with_label("3")).unwrap();

        assert_eq!(labels(&presets), vec!["1", "2", "3"]);
        assert_eq!(labels(&store.list()), vec!["1", "2", "3"]);
    }

    #[test]
    fn invalid_stored_list_is_treated_as_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(PRESETS_KEY, "{not json").unwrap();
        let mut store = PresetStore::new(storage);

        assert!(store.list().is_empty());
        let presets = store.save(&state_with_label("4")).unwrap();
        assert_eq!(labels(&presets), vec!["4"]);
    }

    #[test]
    fn non_array_list_is_treated_as_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(PRESETS_KEY, r#"{"number":"1"}"#).unwrap();
        let store = PresetStore::new(storage);
        assert!(store.list().is_empty());
    }

    #[test]
    fn off_schema_records_do_not_wipe_the_list() {
        let mut storage = MemoryStorage::new();
        storage
            .set(
                PRESETS_KEY,
                r##"[
                    {"number":"2","bgType":"linear","direction":"45","shape":"20%","colors":["#5a4fcf","#a38fff"]},
                    {"number":"3","bgType":"solid","direction":90,"shape":"0%","colors":["#102030","#405060"]},
                    null,
                    {"number":"4","bgType":"radial"}
                ]"##,
            )
            .unwrap();
        let mut store = PresetStore::new(storage);

        assert_eq!(labels(&store.list()), vec!["2", "3", "4"]);
        assert_eq!(store.get(1).map(|p| p.direction), Some("90".to_string()));

        let presets = store.save(&state_with_label("5")).unwrap();
        assert_eq!(labels(&presets), vec!["2", "3", "4", "5"]);
        assert_eq!(labels(&store.list()), vec!["2", "3", "4", "5"]);
    }

    #[test]
    fn remove_drops_only_the_given_position() {
        let mut store = PresetStore::new(MemoryStorage::new());
        for label in ["a", "b", "c", "d"] {
            store.save(&state_with_label(label)).unwrap();
        }

        let presets = store.remove(1).unwrap();
        assert_eq!(labels(&presets), vec!["a", "c", "d"]);
        assert_eq!(labels(&store.list()), vec!["a", "c", "d"]);

        let presets = store.remove(9).unwrap();
        assert_eq!(presets.len(), 3);
    }

    #[test]
    fn stored_format_is_a_json_array() {
        let mut store = PresetStore::new(MemoryStorage::new());
        let mut state = state_with_label("12");
        state.set_background(BackgroundType::Solid);
        state.set_shape(Shape::Circle);
        store.save(&state).unwrap();

        let raw = store.storage().get(PRESETS_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &value.as_array().unwrap()[0];
        assert_eq!(first["number"], "12");
        assert_eq!(first["bgType"], "solid");
        assert_eq!(first["shape"], "50%");
        assert_eq!(first["colors"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn presets_persist_across_file_storage_instances() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let mut store = PresetStore::new(FileStorage::new(temp_dir.path()));
        store.save(&state_with_label("9")).unwrap();

        let reopened = PresetStore::new(FileStorage::new(temp_dir.path()));
        let presets = reopened.list();
        assert_eq!(labels(&presets), vec!["9"]);

        let mut restored = DesignState::default();
        presets[0].apply_to(&mut restored);
        assert_eq!(restored, state_with_label("9"));
    }
}
