//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per timer fire, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod food;
pub mod grid;
pub mod input;
pub mod snake;
pub mod state;
pub mod tick;

pub use food::place_food;
pub use grid::{Cell, Grid};
pub use input::{Direction, steer};
pub use snake::Snake;
pub use state::{GameOverReason, GamePhase, GameState};
pub use tick::{TickOutcome, tick};
