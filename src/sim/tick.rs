//! Fixed-interval simulation tick
//!
//! One call advances the snake by one cell. The caller owns the timer.

use super::state::{GameOverReason, GameState};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, nothing changed
    Idle,
    /// Snake moved without eating
    Moved,
    /// Snake ate; `interval_ms` is set when the tick interval changed
    Ate { score: u64, interval_ms: Option<u32> },
    /// Session ended this tick
    GameOver { reason: GameOverReason, score: u64 },
}

/// Advance the game state by one step
pub fn tick(state: &mut GameState) -> TickOutcome {
    if !state.is_running() {
        return TickOutcome::Idle;
    }

    let new_head = state.snake.head() + state.velocity;

    if !state.grid.contains(new_head) {
        return game_over(state, GameOverReason::Wall);
    }

    // Checked against the pre-move body, head excluded: a resting or
    // single-segment snake can't hit itself.
    if state.snake.hits_trailing(new_head) {
        return game_over(state, GameOverReason::SelfCollision);
    }

    state.snake.push_head(new_head);
    state.heading = state.velocity;

    if new_head == state.food {
        state.score += 1;

        if !state.respawn_food() {
            return game_over(state, GameOverReason::BoardFilled);
        }

        let interval_ms = state.sped_up_interval();
        if let Some(ms) = interval_ms {
            log::debug!("Speed up: {} ms -> {} ms", state.interval_ms, ms);
            state.interval_ms = ms;
        }
        log::debug!("Food eaten, score {}", state.score);

        TickOutcome::Ate {
            score: state.score,
            interval_ms,
        }
    } else {
        state.snake.pop_tail();
        TickOutcome::Moved
    }
}

fn game_over(state: &mut GameState, reason: GameOverReason) -> TickOutcome {
    state.end(reason);
    log::info!(
        "Game over ({:?}), score {}, seed {}",
        reason,
        state.score,
        state.seed
    );
    TickOutcome::GameOver {
        reason,
        score: state.score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Direction, GamePhase, Snake};
    use glam::IVec2;
    use proptest::prelude::*;

    fn running_state(seed: u64) -> GameState {
        let mut state = GameState::new(&Settings::default(), seed);
        state.start();
        state
    }

    fn cells(state: &GameState) -> Vec<IVec2> {
        state.snake.iter().copied().collect()
    }

    #[test]
    fn test_tick_idle_when_not_running() {
        let mut state = GameState::new(&Settings::default(), 1);
        let before = cells(&state);
        assert_eq!(tick(&mut state), TickOutcome::Idle);
        assert_eq!(cells(&state), before);
    }

    #[test]
    fn test_start_right_one_tick() {
        let mut state = running_state(5);
        // Keep food out of the way
        state.food = IVec2::new(0, 0);
        state.steer(Direction::Right);
        assert_eq!(state.velocity, IVec2::new(1, 0));

        assert_eq!(tick(&mut state), TickOutcome::Moved);
        assert_eq!(cells(&state), vec![IVec2::new(11, 10)]);
    }

    #[test]
    fn test_resting_snake_stays_put() {
        let mut state = running_state(5);
        state.food = IVec2::new(0, 0);
        for _ in 0..3 {
            assert_eq!(tick(&mut state), TickOutcome::Moved);
        }
        assert_eq!(cells(&state), vec![IVec2::new(10, 10)]);
        assert!(state.is_running());
    }

    #[test]
    fn test_wall_collision_ends_session() {
        let mut state = running_state(5);
        state.set_snake(Snake::new(IVec2::new(19, 10)));
        state.food = IVec2::new(0, 0);
        state.steer(Direction::Right);

        let outcome = tick(&mut state);
        assert_eq!(
            outcome,
            TickOutcome::GameOver {
                reason: GameOverReason::Wall,
                score: 0
            }
        );
        assert_eq!(state.phase, GamePhase::NotRunning);
        // Nothing rendered past the wall
        assert_eq!(cells(&state), vec![IVec2::new(19, 10)]);
    }

    #[test]
    fn test_eat_grows_and_scores() {
        let mut state = running_state(9);
        state.set_snake(
            Snake::from_cells([IVec2::new(5, 5), IVec2::new(4, 5), IVec2::new(3, 5)]).unwrap(),
        );
        state.velocity = IVec2::new(1, 0);
        state.heading = IVec2::new(1, 0);
        state.food = IVec2::new(6, 5);

        let outcome = tick(&mut state);
        assert_eq!(
            outcome,
            TickOutcome::Ate {
                score: 1,
                interval_ms: Some(145)
            }
        );
        assert_eq!(state.score, 1);
        assert_eq!(
            cells(&state),
            vec![
                IVec2::new(6, 5),
                IVec2::new(5, 5),
                IVec2::new(4, 5),
                IVec2::new(3, 5)
            ]
        );
        assert!(!state.snake.contains(state.food));
        assert_eq!(state.interval_ms, 145);
    }

    #[test]
    fn test_self_collision() {
        let mut state = running_state(9);
        // Head at (5,5) with the body curling around beneath it
        state.set_snake(
            Snake::from_cells([
                IVec2::new(5, 5),
                IVec2::new(5, 6),
                IVec2::new(6, 6),
                IVec2::new(6, 5),
                IVec2::new(6, 4),
            ])
            .unwrap(),
        );
        state.velocity = IVec2::new(1, 0);
        state.heading = IVec2::new(0, -1);
        state.food = IVec2::new(0, 0);

        let outcome = tick(&mut state);
        assert_eq!(
            outcome,
            TickOutcome::GameOver {
                reason: GameOverReason::SelfCollision,
                score: 0
            }
        );
    }

    #[test]
    fn test_moving_into_tail_cell_collides() {
        let mut state = running_state(9);
        // 2x2 loop: tail sits where the head is going
        state.set_snake(
            Snake::from_cells([
                IVec2::new(5, 5),
                IVec2::new(5, 6),
                IVec2::new(6, 6),
                IVec2::new(6, 5),
            ])
            .unwrap(),
        );
        state.velocity = IVec2::new(1, 0);
        state.heading = IVec2::new(0, -1);
        state.food = IVec2::new(0, 0);

        assert!(matches!(tick(&mut state), TickOutcome::GameOver { .. }));
    }

    #[test]
    fn test_interval_floor() {
        let mut state = running_state(3);
        state.interval_ms = 50;
        state.velocity = IVec2::new(1, 0);
        state.food = state.snake.head() + IVec2::new(1, 0);

        assert_eq!(
            tick(&mut state),
            TickOutcome::Ate {
                score: 1,
                interval_ms: None
            }
        );
        assert_eq!(state.interval_ms, 50);
    }

    #[test]
    fn test_board_filled() {
        let settings = Settings {
            grid_size: 2,
            ..Settings::default()
        };
        let mut state = GameState::new(&settings, 3);
        state.start();
        // 2x2 grid: three segments, food on the last free cell
        state.set_snake(
            Snake::from_cells([IVec2::new(0, 1), IVec2::new(0, 0), IVec2::new(1, 0)]).unwrap(),
        );
        state.food = IVec2::new(1, 1);
        state.velocity = IVec2::new(1, 0);
        state.heading = IVec2::new(0, 1);

        assert_eq!(
            tick(&mut state),
            TickOutcome::GameOver {
                reason: GameOverReason::BoardFilled,
                score: 1
            }
        );
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = running_state(99999);
        let mut state2 = running_state(99999);
        assert_eq!(state1.food, state2.food);

        let keys = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
        for dir in keys.iter().cycle().take(40) {
            state1.steer(*dir);
            state2.steer(*dir);
            assert_eq!(tick(&mut state1), tick(&mut state2));
        }
        assert_eq!(cells(&state1), cells(&state2));
        assert_eq!(state1.food, state2.food);
    }

    proptest! {
        #[test]
        fn prop_length_changes_only_on_eat(
            seed in any::<u64>(),
            moves in prop::collection::vec(0usize..4, 1..200),
        ) {
            let mut state = running_state(seed);
            for m in moves {
                state.steer(Direction::ALL[m]);
                let before = state.snake.len();
                let interval_before = state.interval_ms;
                match tick(&mut state) {
                    TickOutcome::Moved => {
                        prop_assert_eq!(state.snake.len(), before);
                    }
                    TickOutcome::Ate { interval_ms, .. } => {
                        prop_assert_eq!(state.snake.len(), before + 1);
                        prop_assert!(state.interval_ms >= 50);
                        match interval_ms {
                            Some(ms) => {
                                prop_assert!(interval_before > 50);
                                prop_assert_eq!(ms, (interval_before - 5).max(50));
                            }
                            None => {
                                prop_assert_eq!(interval_before, 50);
                            }
                        }
                    }
                    TickOutcome::GameOver { .. } | TickOutcome::Idle => break,
                }
                prop_assert!(!state.snake.contains(state.food));
            }
        }
    }
}
