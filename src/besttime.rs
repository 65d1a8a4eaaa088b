//! Best-survival-time record
//!
//! A single scalar persisted to LocalStorage as a decimal string, read
//! once at startup and rewritten whenever a session beats it.

/// Best survival time across sessions, in seconds
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BestTime {
    pub seconds: f64,
}

impl BestTime {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bestTime";

    /// Decode a stored value. An absent or malformed value falls back to
    /// zero so a corrupted record never blocks startup.
    pub fn from_stored(raw: Option<&str>) -> Self {
        let seconds = match raw {
            Some(raw) => raw.parse::<f64>().unwrap_or_else(|_| {
                log::warn!("Ignoring malformed stored best time: {raw:?}");
                0.0
            }),
            None => 0.0,
        };
        Self { seconds }
    }

    /// Fold a finished session into the record. Returns true when the
    /// elapsed time is a new best; the record never decreases.
    pub fn record(&mut self, elapsed_seconds: f64) -> bool {
        if elapsed_seconds > self.seconds {
            self.seconds = elapsed_seconds;
            true
        } else {
            false
        }
    }

    /// Load the record from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let raw = storage.and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten());
        let best = Self::from_stored(raw.as_deref());
        log::info!("Best time so far: {} seconds", best.seconds);
        best
    }

    /// Save the record to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.seconds.to_string());
            log::info!("New best time: {} seconds", self.seconds);
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_is_monotonic() {
        let mut best = BestTime { seconds: 12.5 };
        assert!(!best.record(10.0));
        assert_eq!(best.seconds, 12.5);
        assert!(best.record(15.0));
        assert_eq!(best.seconds, 15.0);
    }

    #[test]
    fn test_equal_time_is_not_a_new_record() {
        let mut best = BestTime { seconds: 12.5 };
        assert!(!best.record(12.5));
        assert_eq!(best.seconds, 12.5);
    }

    #[test]
    fn test_stored_decimal_string_is_parsed() {
        let best = BestTime::from_stored(Some("42.75"));
        assert_eq!(best.seconds, 42.75);
    }

    #[test]
    fn test_absent_and_malformed_values_fall_back_to_zero() {
        assert_eq!(BestTime::from_stored(None).seconds, 0.0);
        assert_eq!(BestTime::from_stored(Some("not a number")).seconds, 0.0);
        assert_eq!(BestTime::from_stored(Some("")).seconds, 0.0);
    }
}
