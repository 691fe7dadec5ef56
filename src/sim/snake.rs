//! Snake body: ordered grid cells, head first

use std::collections::VecDeque;

use super::grid::Cell;

/// The player's snake. Never empty; index 0 is the head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Single-segment snake at `start`
    pub fn new(start: Cell) -> Self {
        Self {
            body: VecDeque::from([start]),
        }
    }

    /// Build from explicit segments (head first). Returns `None` if empty.
    pub fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    pub fn head(&self) -> Cell {
        // Non-empty by construction
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false: a snake has at least one segment
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// All segments, head first
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, Cell> {
        self.body.iter()
    }

    /// Segments behind the head
    pub fn trailing(&self) -> impl Iterator<Item = &Cell> + Clone {
        self.body.iter().skip(1)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Whether `cell` hits a segment other than the head
    pub fn hits_trailing(&self, cell: Cell) -> bool {
        self.trailing().any(|c| *c == cell)
    }

    /// Prepend a new head
    pub fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    /// Drop the tail segment (keeps at least one segment)
    pub fn pop_tail(&mut self) -> Option<Cell> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }
}
