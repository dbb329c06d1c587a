use std::collections::VecDeque;

use ggez::graphics::Color;

use crate::config::GameConfig;
use crate::grid::{Direction, Position};
use crate::render::{Drawable, Surface};

/// The player's snake. The body is stored head first.
#[derive(Debug, Clone)]
pub struct Snake {
    positions: VecDeque<Position>,
    length: usize,
    direction: Direction,
    next_direction: Option<Direction>,
    start: Position,
    cell_size: i32,
    color: Color,
}

impl Snake {
    pub fn new(config: &GameConfig) -> Self {
        let mut snake = Snake {
            positions: VecDeque::with_capacity(config.cell_count()),
            length: 1,
            direction: Direction::Right,
            next_direction: None,
            start: config.center(),
            cell_size: config.cell_size,
            color: config.snake_color,
        };
        snake.reset();
        snake
    }

    /// Builds a snake with an explicit head-first body. The target length is
    /// the number of segments given, or 1 for an empty body.
    pub fn from_segments<I>(config: &GameConfig, segments: I, direction: Direction) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut snake = Snake::new(config);
        let mut segments = segments.into_iter().peekable();
        if segments.peek().is_some() {
            snake.positions.clear();
            snake.positions.extend(segments);
            snake.length = snake.positions.len();
        }
        snake.direction = direction;
        snake
    }

    pub fn set_pending_direction(&mut self, direction: Direction) {
        self.next_direction = Some(direction);
    }

    /// Adopts the pending direction unless it would turn the snake straight
    /// back onto itself. The pending value stays set either way.
    pub fn update_direction(&mut self) {
        if let Some(next) = self.next_direction {
            if !next.is_reverse_of(self.direction) {
                self.direction = next;
            }
        }
    }

    /// Advances one cell. No wrapping: the head may leave the screen.
    pub fn move_forward(&mut self) {
        let new_head = self.head() + self.direction.offset(self.cell_size);
        self.positions.push_front(new_head);
        if self.positions.len() > self.length {
            self.positions.pop_back();
        }
    }

    /// Lengthens the target by one; the tail stays put on the next move.
    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn head(&self) -> Position {
        // Every constructor and reset leaves at least one segment.
        self.positions.front().copied().unwrap_or(self.start)
    }

    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.positions.iter().skip(1).any(|segment| *segment == head)
    }

    pub fn reset(&mut self) {
        self.length = 1;
        self.positions.clear();
        self.positions.push_back(self.start);
        self.direction = Direction::Right;
        self.next_direction = None;
    }

    pub fn positions(&self) -> impl Iterator<Item = &Position> + '_ {
        self.positions.iter()
    }

    pub fn segment_count(&self) -> usize {
        self.positions.len()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.next_direction
    }
}

impl PartialEq for Snake {
    fn eq(&self, other: &Self) -> bool {
        self.positions == other.positions
            && self.length == other.length
            && self.direction == other.direction
            && self.next_direction == other.next_direction
    }
}

impl Drawable for Snake {
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for segment in &self.positions {
            surface.fill_cell(*segment, self.cell_size, self.color);
        }
    }
}
