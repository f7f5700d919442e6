//! Drawable game objects.

use bevy::prelude::*;

use super::{Apple, Cell, Snake};

/// Anything the board paints: a set of cells in one fill color.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Apple(&'a Apple),
    Snake(&'a Snake),
}

impl Shape<'_> {
    /// Cells to paint for this shape.
    pub fn render(self) -> Vec<Cell> {
        match self {
            Shape::Apple(apple) => vec![apple.position()],
            Shape::Snake(snake) => snake.positions().to_vec(),
        }
    }

    pub fn color(self) -> Color {
        match self {
            Shape::Apple(apple) => apple.body_color(),
            Shape::Snake(snake) => snake.body_color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{APPLE_COLOR, Board, SNAKE_COLOR};

    #[test]
    fn test_render_cells() {
        let board = Board::new(640, 480, 20);
        let mut snake = Snake::new(Cell::new(100, 100));
        snake.advance(&board);
        snake.grow();
        let apple = Apple::new(Cell::new(0, 0));

        assert_eq!(Shape::Apple(&apple).render(), vec![Cell::new(0, 0)]);
        assert_eq!(
            Shape::Snake(&snake).render(),
            vec![Cell::new(120, 100), Cell::new(100, 100)]
        );
        assert_eq!(Shape::Apple(&apple).color(), APPLE_COLOR);
        assert_eq!(Shape::Snake(&snake).color(), SNAKE_COLOR);
    }
}
