//! Game resources (singleton state).

use bevy::prelude::*;
use rand::rngs::StdRng;

use super::{Apple, Board, Direction, Shape, Snake};

/// What a single [`Game::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    /// The head landed on the apple; `length` is the grown length.
    Fed { length: usize },
    /// The head hit the body; `length` is the length before the reset.
    Collided { length: usize },
    /// The snake filled the board; `length` is the length before the reset.
    Filled { length: usize },
}

/// Main game state resource: board, snake, apple and score.
#[derive(Resource)]
pub struct Game {
    board: Board,
    snake: Snake,
    apple: Apple,
    score: usize,
    rng: StdRng,
}

impl Game {
    /// A fresh game with the snake at the board center and the apple on a free cell.
    pub fn new(board: Board, mut rng: StdRng) -> Self {
        let snake = Snake::new(board.center());
        let apple = Apple::spawn(&board, &snake, &mut rng).unwrap_or_else(|| {
            Apple::new(board.wrap(board.center().step(Direction::Right, board.cell_size())))
        });

        Game {
            board,
            snake,
            apple,
            score: 0,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Everything to paint, back to front.
    pub fn shapes(&self) -> [Shape<'_>; 2] {
        [Shape::Apple(&self.apple), Shape::Snake(&self.snake)]
    }

    /// Queue a turn for the next tick, ignoring reversals.
    pub fn handle_input(&mut self, direction: Direction) -> bool {
        self.snake.queue_direction(direction)
    }

    /// Advance the simulation one step.
    pub fn tick(&mut self) -> TickOutcome {
        self.snake.update_direction();
        self.snake.advance(&self.board);

        if self.check_feed() {
            if self.apple.randomize_position(&self.board, &self.snake, &mut self.rng) {
                return TickOutcome::Fed {
                    length: self.snake.len(),
                };
            }
            let length = self.snake.len();
            self.restart();
            return TickOutcome::Filled { length };
        }

        let length = self.snake.len();
        if self.check_collision() {
            return TickOutcome::Collided { length };
        }

        TickOutcome::Moved
    }

    /// Grow and score when the head sits on the apple. The apple is left for
    /// the caller to relocate.
    pub fn check_feed(&mut self) -> bool {
        if self.snake.head() != self.apple.position() {
            return false;
        }
        self.snake.grow();
        self.score += 1;
        true
    }

    /// Start over when the head overlaps the body.
    pub fn check_collision(&mut self) -> bool {
        if !self.snake.bites_itself() {
            return false;
        }
        self.restart();
        true
    }

    #[cfg(test)]
    pub(crate) fn place_apple(&mut self, position: super::Cell) {
        self.apple = Apple::new(position);
    }

    fn restart(&mut self) {
        self.snake.reset(self.board.center());
        self.score = 0;
        // The reset snake covers a single cell, so a free one always exists.
        self.apple
            .randomize_position(&self.board, &self.snake, &mut self.rng);
    }
}
