//! Board geometry: cells, directions and the wrapping grid.

use bevy::prelude::*;

/// A pixel-aligned grid square. Both coordinates are multiples of the cell size,
/// with `y` growing downward.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// The neighbouring cell one step away in `direction`, before wrapping.
    pub fn step(self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        Cell {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }
}

/// Direction enum for snake movement.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit vector in screen coordinates.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Maps a key to a direction. Arrow keys, with WASD as aliases.
    pub fn from_key(key: KeyCode) -> Option<Direction> {
        match key {
            KeyCode::ArrowUp | KeyCode::KeyW => Some(Direction::Up),
            KeyCode::ArrowDown | KeyCode::KeyS => Some(Direction::Down),
            KeyCode::ArrowLeft | KeyCode::KeyA => Some(Direction::Left),
            KeyCode::ArrowRight | KeyCode::KeyD => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Fixed-size grid of square cells, measured in pixels.
///
/// Built through [`GameConfig::board`](super::GameConfig::board), which guarantees both
/// dimensions are positive multiples of `cell_size`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Board {
    pub(crate) fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Board {
            width,
            height,
            cell_size,
        }
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// The cell nearest the middle of the board, snapped to the grid.
    pub fn center(&self) -> Cell {
        Cell::new(
            self.columns() / 2 * self.cell_size,
            self.rows() / 2 * self.cell_size,
        )
    }

    /// Wrap a cell back onto the board (toroidal arena).
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(cell.x.rem_euclid(self.width), cell.y.rem_euclid(self.height))
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x)
            && (0..self.height).contains(&cell.y)
            && cell.x % self.cell_size == 0
            && cell.y % self.cell_size == 0
    }

    /// Every cell on the board, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows()).flat_map(move |row| {
            (0..self.columns())
                .map(move |column| Cell::new(column * self.cell_size, row * self.cell_size))
        })
    }

    /// World-space center of `cell`, with the board centered on the origin and `y` up.
    pub fn to_world(&self, cell: Cell) -> Vec2 {
        let half = self.cell_size as f32 / 2.0;
        Vec2::new(
            cell.x as f32 + half - self.width as f32 / 2.0,
            self.height as f32 / 2.0 - (cell.y as f32 + half),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(640, 480, 20)
    }

    #[test]
    fn test_center_is_grid_aligned() {
        assert_eq!(board().center(), Cell::new(320, 240));
        assert_eq!(Board::new(60, 100, 20).center(), Cell::new(20, 40));
    }

    #[test]
    fn test_wrap_each_edge() {
        let board = board();
        assert_eq!(board.wrap(Cell::new(640, 100)), Cell::new(0, 100));
        assert_eq!(board.wrap(Cell::new(-20, 100)), Cell::new(620, 100));
        assert_eq!(board.wrap(Cell::new(100, 480)), Cell::new(100, 0));
        assert_eq!(board.wrap(Cell::new(100, -20)), Cell::new(100, 460));
        assert_eq!(board.wrap(Cell::new(300, 200)), Cell::new(300, 200));
    }

    #[test]
    fn test_step_scales_by_cell_size() {
        let cell = Cell::new(100, 100);
        assert_eq!(cell.step(Direction::Up, 20), Cell::new(100, 80));
        assert_eq!(cell.step(Direction::Down, 20), Cell::new(100, 120));
        assert_eq!(cell.step(Direction::Left, 20), Cell::new(80, 100));
        assert_eq!(cell.step(Direction::Right, 20), Cell::new(120, 100));
    }

    #[test]
    fn test_opposites() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_ne!(direction, direction.opposite());
            assert_eq!(direction, direction.opposite().opposite());
        }
    }

    #[test]
    fn test_cells_cover_board() {
        let board = Board::new(60, 40, 20);
        let cells: Vec<Cell> = board.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[5], Cell::new(40, 20));
        assert!(cells.iter().all(|cell| board.contains(*cell)));
    }

    #[test]
    fn test_contains_rejects_off_grid() {
        let board = board();
        assert!(board.contains(Cell::new(620, 460)));
        assert!(!board.contains(Cell::new(640, 0)));
        assert!(!board.contains(Cell::new(10, 0)));
        assert!(!board.contains(Cell::new(0, -20)));
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Direction::from_key(KeyCode::ArrowUp), Some(Direction::Up));
        assert_eq!(Direction::from_key(KeyCode::KeyA), Some(Direction::Left));
        assert_eq!(Direction::from_key(KeyCode::ArrowDown), Some(Direction::Down));
        assert_eq!(Direction::from_key(KeyCode::KeyD), Some(Direction::Right));
        assert_eq!(Direction::from_key(KeyCode::Space), None);
    }

    #[test]
    fn test_to_world_flips_y() {
        let board = board();
        assert_eq!(board.to_world(Cell::new(0, 0)), Vec2::new(-310.0, 230.0));
        assert_eq!(board.to_world(Cell::new(620, 460)), Vec2::new(310.0, -230.0));
    }
}
