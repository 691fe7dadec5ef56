//! HUD state derived from the session
//!
//! Pure data so the DOM glue in `main.rs` stays a dumb copy.

use crate::persistence::KeyValueStore;
use crate::platform::Scheduler;
use crate::session::Session;

/// What the score panel and overlays should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudView {
    pub score: String,
    pub best: String,
    /// "Game over" message
    pub game_over_visible: bool,
    /// Start button, shown only before the first session
    pub start_visible: bool,
}

impl HudView {
    pub fn from_session<S: Scheduler, K: KeyValueStore>(session: &Session<S, K>) -> Self {
        let state = session.state();
        Self {
            score: state.score.to_string(),
            best: session.best_score().to_string(),
            game_over_visible: session.has_started() && !state.is_running(),
            start_visible: !session.has_started(),
        }
    }
}
