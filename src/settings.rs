//! Game settings and preferences
//!
//! Persisted through a [`SettingsStore`], separately from any game state.

use serde::{Deserialize, Serialize};

use crate::platform::storage::{SettingsStore, StoreError};
use crate::sim::{Difficulty, DifficultySource};

/// Plain key holding the difficulty name, read by the running game every frame
pub const DIFFICULTY_KEY: &str = "difficulty";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    /// Whether the frontend plays sound cues for game events
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            sound_enabled: true,
        }
    }
}

impl Settings {
    /// Storage key for the JSON blob
    pub const STORAGE_KEY: &'static str = "flappy_settings";

    /// Load settings, falling back to defaults for missing or corrupt data
    pub fn load(store: &impl SettingsStore) -> Self {
        let Some(json) = store.get(Self::STORAGE_KEY) else {
            log::info!("Using default settings");
            return Self::default();
        };
        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings");
                settings
            }
            Err(err) => {
                log::warn!("Ignoring corrupt settings ({err}), using defaults");
                Self::default()
            }
        }
    }

    /// Save settings and mirror the difficulty under [`DIFFICULTY_KEY`]
    pub fn save(&self, store: &mut impl SettingsStore) -> Result<(), StoreError> {
        let json = serde_json::to_string(self).map_err(|source| StoreError::Encode {
            key: Self::STORAGE_KEY.to_string(),
            source,
        })?;
        store.set(Self::STORAGE_KEY, &json)?;
        store.set(DIFFICULTY_KEY, self.difficulty.as_str())?;
        log::info!("Settings saved");
        Ok(())
    }
}

/// Difficulty source backed by a store; unknown or missing values mean normal
#[derive(Debug, Clone)]
pub struct StoredDifficulty<S> {
    store: S,
}

impl<S: SettingsStore> StoredDifficulty<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: SettingsStore> DifficultySource for StoredDifficulty<S> {
    fn current(&self) -> Difficulty {
        self.store
            .get(DIFFICULTY_KEY)
            .map(|key| Difficulty::from_key(&key))
            .unwrap_or_default()
    }
}
