//! Demo-mode steering
//!
//! Breadth-first search from the head to the food over free cells. When the
//! food is cut off, any move that survives the next tick is taken instead.

use std::collections::{HashSet, VecDeque};

use super::grid::Cell;
use super::input::Direction;
use super::state::GameState;

/// Pick the next direction for the snake, or `None` if every move is fatal
pub fn next_direction(state: &GameState) -> Option<Direction> {
    let head = state.snake.head();
    let reverse = Direction::from_vector(state.heading).map(Direction::opposite);

    // The tail counts too: moving onto it is a collision
    let mut blocked: HashSet<Cell> = state.snake.iter().copied().collect();

    let candidates: Vec<Direction> = Direction::ALL
        .into_iter()
        .filter(|d| Some(*d) != reverse)
        .collect();

    let is_open = |cell: Cell, blocked: &HashSet<Cell>| {
        state.grid.contains(cell) && !blocked.contains(&cell)
    };

    let mut queue: VecDeque<(Cell, Direction)> = VecDeque::new();
    for dir in &candidates {
        let cell = head + dir.vector();
        if is_open(cell, &blocked) {
            blocked.insert(cell);
            queue.push_back((cell, *dir));
        }
    }

    while let Some((cell, first)) = queue.pop_front() {
        if cell == state.food {
            return Some(first);
        }
        for dir in Direction::ALL {
            let next = cell + dir.vector();
            if is_open(next, &blocked) {
                blocked.insert(next);
                queue.push_back((next, first));
            }
        }
    }

    // Food unreachable: any safe step
    candidates.into_iter().find(|d| {
        let cell = head + d.vector();
        state.grid.contains(cell) && !state.snake.hits_trailing(cell)
    })
}
