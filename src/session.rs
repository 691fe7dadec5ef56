//! Play session context
//!
//! Owns the game state together with its collaborators: the tick timer and
//! the best-score store. Browser and native front ends both drive the game
//! through this type only.

use crate::highscores::BestScore;
use crate::persistence::KeyValueStore;
use crate::platform::Scheduler;
use crate::settings::Settings;
use crate::sim::autopilot;
use crate::sim::{Direction, GameState, TickOutcome, tick};

pub struct Session<S: Scheduler, K: KeyValueStore> {
    state: GameState,
    best: BestScore,
    scheduler: S,
    store: K,
    settings: Settings,
    /// Demo mode: autopilot steers before each tick
    autopilot: bool,
    /// Whether `start` has ever been called
    started: bool,
}

impl<S: Scheduler, K: KeyValueStore> Session<S, K> {
    /// Create an idle session. The timer stays unarmed until `start`.
    pub fn new(settings: Settings, scheduler: S, store: K, seed: u64) -> Self {
        let best = BestScore::load(&store);
        Self {
            state: GameState::new(&settings, seed),
            best,
            scheduler,
            store,
            settings,
            autopilot: false,
            started: false,
        }
    }

    /// Begin a fresh session (start and restart both land here)
    pub fn start(&mut self) {
        self.scheduler.cancel();
        self.state.start();
        self.started = true;
        self.scheduler.arm(self.state.interval_ms);
        log::info!(
            "Session started at {:?}, interval {} ms",
            self.state.snake.head(),
            self.state.interval_ms
        );
    }

    /// Handle a `keydown`. Returns true if the key is a direction key.
    ///
    /// Direction keys don't steer while demo mode is on.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                if !self.autopilot {
                    self.state.steer(direction);
                }
                true
            }
            None => false,
        }
    }

    /// Run one timer tick
    pub fn on_tick(&mut self) -> TickOutcome {
        if self.autopilot && self.state.is_running() {
            if let Some(direction) = autopilot::next_direction(&self.state) {
                // The planner never picks a reversal
                self.state.velocity = direction.vector();
            }
        }

        let outcome = tick(&mut self.state);
        match outcome {
            TickOutcome::Ate {
                interval_ms: Some(ms),
                ..
            } => {
                // Restart the timer at the new pace (phase resets)
                self.scheduler.cancel();
                self.scheduler.arm(ms);
            }
            TickOutcome::GameOver { score, .. } => {
                self.scheduler.cancel();
                if self.best.record(score) {
                    log::info!("New best score: {}", score);
                    self.best.save(&mut self.store);
                }
            }
            TickOutcome::Idle | TickOutcome::Moved | TickOutcome::Ate { .. } => {}
        }
        outcome
    }

    /// Toggle demo mode; returns the new setting
    pub fn toggle_autopilot(&mut self) -> bool {
        self.autopilot = !self.autopilot;
        log::info!("Demo mode: {}", self.autopilot);
        self.autopilot
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn best_score(&self) -> u64 {
        self.best.value()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn store(&self) -> &K {
        &self.store
    }
}
