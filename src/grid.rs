use std::ops::Add;

/// Pixel coordinates of a cell's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ZERO: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, other: Position) -> Position {
        Position::new(self.x + other.x, self.y + other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Displacement of one step, scaled to the cell size. Screen y grows downward.
    pub fn offset(self, cell_size: i32) -> Position {
        match self {
            Direction::Up => Position::new(0, -cell_size),
            Direction::Down => Position::new(0, cell_size),
            Direction::Left => Position::new(-cell_size, 0),
            Direction::Right => Position::new(cell_size, 0),
        }
    }

    /// True when the two displacements cancel out.
    pub fn is_reverse_of(self, other: Direction) -> bool {
        self.offset(1) + other.offset(1) == Position::ZERO
    }
}
