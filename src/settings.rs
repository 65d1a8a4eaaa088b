//! Game settings and preferences
//!
//! Persisted separately from the best-time record in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_NUM_OBSTACLES;

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Obstacle population at session start (and after restart)
    pub num_obstacles: usize,
    /// Optional population cap. `None` keeps the interval-timer growth
    /// unbounded; the default difficulty curve depends on it.
    pub max_obstacles: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            num_obstacles: DEFAULT_NUM_OBSTACLES,
            max_obstacles: None,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "astro_dodge_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
