//! The snake: an ordered chain of cells, head first.

use bevy::prelude::*;

use super::{Board, Cell, Direction, SNAKE_COLOR};

#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    // Never empty; the head is always `positions[0]`.
    positions: Vec<Cell>,
    direction: Direction,
    next_direction: Option<Direction>,
    // Tail cell dropped by the most recent move.
    last: Option<Cell>,
    body_color: Color,
}

impl Snake {
    /// A one-cell snake at `head`, heading right.
    pub fn new(head: Cell) -> Self {
        Snake {
            positions: vec![head],
            direction: Direction::Right,
            next_direction: None,
            last: None,
            body_color: SNAKE_COLOR,
        }
    }

    pub fn head(&self) -> Cell {
        self.positions[0]
    }

    pub fn positions(&self) -> &[Cell] {
        &self.positions
    }

    /// Every segment except the head.
    pub fn body(&self) -> &[Cell] {
        &self.positions[1..]
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[cfg(test)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub fn next_direction(&self) -> Option<Direction> {
        self.next_direction
    }

    #[cfg(test)]
    pub fn last(&self) -> Option<Cell> {
        self.last
    }

    pub fn body_color(&self) -> Color {
        self.body_color
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.positions.contains(&cell)
    }

    /// Queue a turn for the next tick. Returns false, leaving the queue untouched,
    /// when `direction` would reverse the snake onto itself.
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.next_direction = Some(direction);
        true
    }

    /// Apply the queued turn, if any.
    pub fn update_direction(&mut self) {
        if let Some(next) = self.next_direction.take() {
            self.direction = next;
        }
    }

    /// Move one cell: prepend the wrapped head and drop the tail into `last`.
    pub fn advance(&mut self, board: &Board) {
        let next = board.wrap(self.head().step(self.direction, board.cell_size()));
        self.positions.insert(0, next);
        self.last = self.positions.pop();
    }

    /// Take back the tail dropped by the last move.
    pub fn grow(&mut self) {
        if let Some(tail) = self.last.take() {
            self.positions.push(tail);
        }
    }

    /// True when the head overlaps any other segment.
    pub fn bites_itself(&self) -> bool {
        self.body().contains(&self.head())
    }

    /// Back to a single cell at `head`, heading right.
    pub fn reset(&mut self, head: Cell) {
        self.positions.clear();
        self.positions.push(head);
        self.direction = Direction::Right;
        self.next_direction = None;
        self.last = None;
    }
}
