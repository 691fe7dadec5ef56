//! Game settings and tunables
//!
//! Persisted as JSON in LocalStorage, separately from the best score.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::persistence::KeyValueStore;
use crate::sim::Cell;

/// Rejected settings values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("grid size must be at least 2 cells, got {0}")]
    GridTooSmall(u32),
    #[error("grid size {0} exceeds the largest supported grid")]
    GridTooLarge(u32),
    #[error("cell size must be non-zero")]
    ZeroCellSize,
    #[error("grid size times cell size exceeds the largest supported canvas")]
    CanvasTooLarge,
    #[error("start interval {0} ms is out of range")]
    IntervalTooLarge(u32),
    #[error("minimum interval must be non-zero")]
    ZeroMinInterval,
    #[error("speed-up step must be non-zero")]
    ZeroSpeedupStep,
    #[error("minimum interval {min} ms exceeds start interval {start} ms")]
    MinAboveStart { min: u32, start: u32 },
}

/// Game settings/tunables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Cells per side of the square grid
    pub grid_size: u32,
    /// Pixel size of one cell on the canvas
    pub cell_size_px: u32,

    // === Speed ===
    /// Tick interval at session start (ms)
    pub start_interval_ms: u32,
    /// Floor for the tick interval (ms)
    pub min_interval_ms: u32,
    /// Interval reduction per food eaten (ms)
    pub speedup_step_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            cell_size_px: CELL_SIZE_PX,
            start_interval_ms: START_INTERVAL_MS,
            min_interval_ms: MIN_INTERVAL_MS,
            speedup_step_ms: SPEEDUP_STEP_MS,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.grid_size < 2 {
            return Err(SettingsError::GridTooSmall(self.grid_size));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(SettingsError::GridTooLarge(self.grid_size));
        }
        if self.cell_size_px == 0 {
            return Err(SettingsError::ZeroCellSize);
        }
        match self.grid_size.checked_mul(self.cell_size_px) {
            Some(px) if px <= MAX_CANVAS_PX => {}
            _ => return Err(SettingsError::CanvasTooLarge),
        }
        if i32::try_from(self.start_interval_ms).is_err() {
            return Err(SettingsError::IntervalTooLarge(self.start_interval_ms));
        }
        if self.min_interval_ms == 0 {
            return Err(SettingsError::ZeroMinInterval);
        }
        if self.speedup_step_ms == 0 {
            return Err(SettingsError::ZeroSpeedupStep);
        }
        if self.min_interval_ms > self.start_interval_ms {
            return Err(SettingsError::MinAboveStart {
                min: self.min_interval_ms,
                start: self.start_interval_ms,
            });
        }
        Ok(())
    }

    /// Canvas side length in pixels
    pub fn canvas_size(&self) -> u32 {
        self.grid_size.saturating_mul(self.cell_size_px)
    }

    /// Grid side as a signed cell count, clamped to the accepted range
    pub fn grid_side(&self) -> i32 {
        i32::try_from(self.grid_size.clamp(2, MAX_GRID_SIZE)).unwrap_or(GRID_SIZE as i32)
    }

    /// Where a fresh snake spawns
    pub fn start_cell(&self) -> Cell {
        let mid = self.grid_side() / 2;
        IVec2::new(mid, mid)
    }

    /// Load settings from a store, falling back to defaults
    pub fn load<K: KeyValueStore + ?Sized>(store: &K) -> Self {
        let json = match store.get(SETTINGS_KEY) {
            Ok(Some(json)) => json,
            Ok(None) => {
                log::info!("Using default settings");
                return Self::default();
            }
            Err(e) => {
                log::warn!("Settings unreadable ({}), using defaults", e);
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&json) {
            Ok(settings) => match settings.validate() {
                Ok(()) => {
                    log::info!("Loaded settings from storage");
                    settings
                }
                Err(e) => {
                    log::warn!("Stored settings rejected ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Stored settings corrupt ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to a store
    pub fn save<K: KeyValueStore + ?Sized>(&self, store: &mut K) {
        match serde_json::to_string(self) {
            Ok(json) => match store.set(SETTINGS_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Failed to save settings: {}", e),
            },
            Err(e) => log::warn!("Failed to encode settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::sim::{GameState, Grid};

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(settings.canvas_size(), 400);
        assert_eq!(settings.start_cell(), IVec2::new(10, 10));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = Settings {
            min_interval_ms: 200,
            ..Settings::default()
        };
        assert_eq!(
            bad.validate(),
            Err(SettingsError::MinAboveStart { min: 200, start: 150 })
        );

        let bad = Settings {
            grid_size: 1,
            ..Settings::default()
        };
        assert_eq!(bad.validate(), Err(SettingsError::GridTooSmall(1)));

        let bad = Settings {
            speedup_step_ms: 0,
            ..Settings::default()
        };
        assert_eq!(bad.validate(), Err(SettingsError::ZeroSpeedupStep));
    }

    #[test]
    fn test_validate_rejects_oversized_values() {
        let bad = Settings {
            grid_size: 3_000_000_000,
            ..Settings::default()
        };
        assert_eq!(bad.validate(), Err(SettingsError::GridTooLarge(3_000_000_000)));
        assert_eq!(bad.canvas_size(), u32::MAX);

        let bad = Settings {
            cell_size_px: 1000,
            ..Settings::default()
        };
        assert_eq!(bad.validate(), Err(SettingsError::CanvasTooLarge));

        let bad = Settings {
            cell_size_px: u32::MAX,
            ..Settings::default()
        };
        assert_eq!(bad.validate(), Err(SettingsError::CanvasTooLarge));

        let bad = Settings {
            start_interval_ms: u32::MAX,
            ..Settings::default()
        };
        assert_eq!(bad.validate(), Err(SettingsError::IntervalTooLarge(u32::MAX)));

        let largest = Settings {
            grid_size: MAX_GRID_SIZE,
            cell_size_px: MAX_CANVAS_PX / MAX_GRID_SIZE,
            ..Settings::default()
        };
        assert_eq!(largest.validate(), Ok(()));
    }

    #[test]
    fn test_huge_grid_falls_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(SETTINGS_KEY, r#"{"grid_size": 3000000000}"#).unwrap();
        let settings = Settings::load(&store);
        assert_eq!(settings, Settings::default());

        let mut state = GameState::new(&settings, 5);
        state.start();
        assert_eq!(state.grid, Grid::square(20));
        assert!(state.grid.contains(state.food));
    }

    #[test]
    fn test_unvalidated_huge_grid_is_clamped() {
        let settings = Settings {
            grid_size: 3_000_000_000,
            ..Settings::default()
        };
        assert_eq!(settings.grid_side(), MAX_GRID_SIZE as i32);
        let state = GameState::new(&settings, 5);
        assert_eq!(state.grid, Grid::square(MAX_GRID_SIZE as i32));
        assert!(state.grid.contains(state.food));
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let settings = Settings {
            grid_size: 30,
            start_interval_ms: 120,
            ..Settings::default()
        };
        settings.save(&mut store);
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_load_falls_back_on_garbage() {
        let mut store = MemoryStore::new();
        store.set(SETTINGS_KEY, "{not json").unwrap();
        assert_eq!(Settings::load(&store), Settings::default());

        store.set(SETTINGS_KEY, r#"{"grid_size": 0}"#).unwrap();
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let mut store = MemoryStore::new();
        store.set(SETTINGS_KEY, r#"{"cell_size_px": 16}"#).unwrap();
        let settings = Settings::load(&store);
        assert_eq!(settings.cell_size_px, 16);
        assert_eq!(settings.grid_size, GRID_SIZE);
    }
}
