//! Grid Snake - a single-screen arcade Snake game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, snake, food, tick engine)
//! - `session`: Session context tying the sim to a timer and a score store
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser/native timer abstraction
//! - `persistence`: Key-value storage (LocalStorage on web)

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod ui;

pub use highscores::BestScore;
pub use session::Session;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Cells per side of the square grid
    pub const GRID_SIZE: u32 = 20;
    /// Pixel size of one cell on the canvas
    pub const CELL_SIZE_PX: u32 = 20;
    /// Largest accepted grid side (cells)
    pub const MAX_GRID_SIZE: u32 = 256;
    /// Largest accepted canvas side (CSS pixels)
    pub const MAX_CANVAS_PX: u32 = 8192;

    /// Tick interval at session start (ms)
    pub const START_INTERVAL_MS: u32 = 150;
    /// Tick interval never drops below this (ms)
    pub const MIN_INTERVAL_MS: u32 = 50;
    /// Interval reduction per food eaten (ms)
    pub const SPEEDUP_STEP_MS: u32 = 5;

    /// Random draws before food placement falls back to a free-cell scan
    pub const MAX_FOOD_ATTEMPTS: u32 = 64;

    /// LocalStorage key for the best score
    pub const BEST_SCORE_KEY: &str = "snakeHighScore";
    /// LocalStorage key for settings
    pub const SETTINGS_KEY: &str = "snake_settings";
}
