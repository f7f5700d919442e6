//! Rendering plugin - paints every cell of every shape each frame.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{BORDER_COLOR, BORDER_THICKNESS, Board, Cell, Game, Z_CELL, Z_CELL_BORDER};

/// Plugin for board rendering.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_board);
    }
}

/// System to paint the apple and the snake.
fn draw_board(game: Res<Game>, mut painter: ShapePainter) {
    let board = game.board();

    for shape in game.shapes() {
        let color = shape.color();
        for cell in shape.render() {
            draw_cell(&mut painter, board, cell, color);
        }
    }
}

/// A filled square with a thin border, like a single tile of the grid.
fn draw_cell(painter: &mut ShapePainter, board: &Board, cell: Cell, color: Color) {
    let center = board.to_world(cell);
    let size = Vec2::splat(board.cell_size() as f32);

    painter.reset();
    painter.set_translation(center.extend(Z_CELL));
    painter.color = color;
    painter.rect(size);

    painter.set_translation(center.extend(Z_CELL_BORDER));
    painter.color = BORDER_COLOR;
    painter.hollow = true;
    painter.thickness = BORDER_THICKNESS;
    painter.rect(size);
}
