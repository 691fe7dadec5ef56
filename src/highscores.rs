//! Best score tracking
//!
//! A single integer persisted under `snakeHighScore`. It only ever grows.

use crate::consts::BEST_SCORE_KEY;
use crate::persistence::KeyValueStore;

/// Highest score reached across all sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BestScore {
    value: u64,
}

impl BestScore {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Raise the best score if `score` beats it. Returns true on a new best.
    pub fn record(&mut self, score: u64) -> bool {
        if score > self.value {
            self.value = score;
            true
        } else {
            false
        }
    }

    /// Load from storage; missing or unreadable values count as 0
    pub fn load<K: KeyValueStore + ?Sized>(store: &K) -> Self {
        match store.get(BEST_SCORE_KEY) {
            Ok(Some(raw)) => match raw.trim().parse::<u64>() {
                Ok(value) => {
                    log::info!("Loaded best score {}", value);
                    Self::new(value)
                }
                Err(_) => {
                    log::warn!("Ignoring malformed best score {:?}", raw);
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("No best score found, starting fresh");
                Self::default()
            }
            Err(e) => {
                log::warn!("Best score unreadable ({}), starting fresh", e);
                Self::default()
            }
        }
    }

    /// Write to storage
    pub fn save<K: KeyValueStore + ?Sized>(&self, store: &mut K) {
        match store.set(BEST_SCORE_KEY, &self.value.to_string()) {
            Ok(()) => log::info!("Best score saved ({})", self.value),
            Err(e) => log::warn!("Failed to save best score: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use proptest::prelude::*;

    #[test]
    fn test_missing_is_zero() {
        let store = MemoryStore::new();
        assert_eq!(BestScore::load(&store).value(), 0);
    }

    #[test]
    fn test_malformed_is_zero() {
        let mut store = MemoryStore::new();
        store.set(BEST_SCORE_KEY, "lots").unwrap();
        assert_eq!(BestScore::load(&store).value(), 0);
    }

    #[test]
    fn test_record_and_persist() {
        let mut store = MemoryStore::new();
        let mut best = BestScore::load(&store);
        assert!(best.record(4));
        best.save(&mut store);
        assert_eq!(store.get(BEST_SCORE_KEY).unwrap().as_deref(), Some("4"));

        assert!(!best.record(4));
        assert!(!best.record(2));
        assert_eq!(BestScore::load(&store).value(), 4);
    }

    proptest! {
        #[test]
        fn prop_best_is_running_max(scores in prop::collection::vec(0u64..1000, 0..50)) {
            let mut best = BestScore::default();
            let mut prev = 0;
            for s in &scores {
                best.record(*s);
                prop_assert!(best.value() >= prev);
                prev = best.value();
            }
            prop_assert_eq!(best.value(), scores.iter().copied().max().unwrap_or(0));
        }
    }
}
