//! Keyboard direction mapping

use glam::IVec2;

/// One of the four movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a `KeyboardEvent.key` value. Legacy Edge names are accepted too.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "Up" => Some(Direction::Up),
            "ArrowDown" | "Down" => Some(Direction::Down),
            "ArrowLeft" | "Left" => Some(Direction::Left),
            "ArrowRight" | "Right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Unit movement vector (screen coords, +y is down)
    pub fn vector(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Inverse of `vector`
    pub fn from_vector(v: IVec2) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.vector() == v)
    }
}

/// New movement vector after requesting `requested` while moving along `current`.
///
/// An exact reversal is ignored and `current` is returned unchanged.
pub fn steer(current: IVec2, requested: Direction) -> IVec2 {
    let wanted = requested.vector();
    if wanted == -current { current } else { wanted }
}
