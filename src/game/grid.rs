/// Number of columns on the playfield
pub const GRID_WIDTH: i32 = 16;
/// Number of rows on the playfield
pub const GRID_HEIGHT: i32 = 12;

/// Direction a snake segment will move on its next advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// The heading pointing the other way
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A cell on the toroidal playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_in_bounds(self) -> bool {
        (0..GRID_WIDTH).contains(&self.x) && (0..GRID_HEIGHT).contains(&self.y)
    }

    /// One step in `direction`, re-entering from the opposite edge when leaving the grid.
    pub fn advance(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: (self.x + dx).rem_euclid(GRID_WIDTH),
            y: (self.y + dy).rem_euclid(GRID_HEIGHT),
        }
    }
}
