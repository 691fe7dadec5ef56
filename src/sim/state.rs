//! Game state and core simulation types
//!
//! Everything one play session needs lives in `GameState`; nothing is ambient.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::food::place_food;
use super::grid::{Cell, Grid};
use super::input::{Direction, steer};
use super::snake::Snake;
use crate::settings::Settings;

/// Whether a session is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Before the first start, or after a game over
    NotRunning,
    /// Timer is ticking
    Running,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// Head left the grid
    Wall,
    /// Head ran into the body
    SelfCollision,
    /// Snake covers every cell, nowhere left for food
    BoardFilled,
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, logged so a session can be replayed
    pub(crate) seed: u64,
    rng: Pcg32,
    pub grid: Grid,
    pub snake: Snake,
    pub food: Cell,
    /// Movement vector the next tick will apply
    pub velocity: IVec2,
    /// Vector applied by the most recent tick
    pub heading: IVec2,
    pub score: u64,
    /// Current tick interval (ms)
    pub interval_ms: u32,
    pub phase: GamePhase,
    /// Reason the last session ended, if one has
    pub last_game_over: Option<GameOverReason>,
    start_cell: Cell,
    start_interval_ms: u32,
    min_interval_ms: u32,
    speedup_step_ms: u32,
}

impl GameState {
    /// Create an idle state; call `start` to begin a session
    pub fn new(settings: &Settings, seed: u64) -> Self {
        let grid = Grid::square(settings.grid_side());
        let start_cell = settings.start_cell();
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            grid,
            snake: Snake::new(start_cell),
            food: start_cell,
            velocity: IVec2::ZERO,
            heading: IVec2::ZERO,
            score: 0,
            interval_ms: settings.start_interval_ms,
            phase: GamePhase::NotRunning,
            last_game_over: None,
            start_cell,
            start_interval_ms: settings.start_interval_ms,
            min_interval_ms: settings.min_interval_ms,
            speedup_step_ms: settings.speedup_step_ms,
        };
        state.respawn_food();
        state
    }

    /// Reset to the initial layout and enter `Running`
    pub fn start(&mut self) {
        self.snake = Snake::new(self.start_cell);
        self.velocity = IVec2::ZERO;
        self.heading = IVec2::ZERO;
        self.score = 0;
        self.interval_ms = self.start_interval_ms;
        self.last_game_over = None;
        self.respawn_food();
        self.phase = GamePhase::Running;
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Apply a direction key. Ignored unless running; a key that reverses
    /// the current vector is dropped.
    pub fn steer(&mut self, direction: Direction) {
        if !self.is_running() {
            return;
        }
        self.velocity = steer(self.velocity, direction);
    }

    /// Place food on a free cell. Returns false if the board is full.
    pub fn respawn_food(&mut self) -> bool {
        match place_food(self.snake.iter(), &self.grid, &mut self.rng) {
            Some(cell) => {
                self.food = cell;
                true
            }
            None => false,
        }
    }

    pub(crate) fn end(&mut self, reason: GameOverReason) {
        self.phase = GamePhase::NotRunning;
        self.last_game_over = Some(reason);
    }

    /// Next interval after eating, floored at the minimum
    pub(crate) fn sped_up_interval(&self) -> Option<u32> {
        if self.interval_ms > self.min_interval_ms {
            Some(
                self.interval_ms
                    .saturating_sub(self.speedup_step_ms)
                    .max(self.min_interval_ms),
            )
        } else {
            None
        }
    }

    /// Replace the snake (scenario setup)
    pub fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }
}
