use ggez::graphics::Color;

use crate::grid::Position;

const SCREEN_WIDTH: i32 = 640;
const SCREEN_HEIGHT: i32 = 480;
const CELL_SIZE: i32 = 20;
const TICKS_PER_SECOND: u32 = 20;

/// Fixed settings shared by the game loop and both entities.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub cell_size: i32,
    pub tick_rate: u32,
    pub title: String,
    pub background_color: Color,
    pub apple_color: Color,
    pub snake_color: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            cell_size: CELL_SIZE,
            tick_rate: TICKS_PER_SECOND,
            title: String::from("Snake"),
            background_color: Color::BLACK,
            apple_color: Color::RED,
            snake_color: Color::GREEN,
        }
    }
}

impl GameConfig {
    /// Number of whole cells across the screen.
    pub fn columns(&self) -> i32 {
        self.screen_width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.screen_height / self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        (self.columns() * self.rows()) as usize
    }

    /// Spawn point of the snake. Not snapped to the grid; with the default
    /// dimensions it already lands on a cell corner.
    pub fn center(&self) -> Position {
        Position::new(self.screen_width / 2, self.screen_height / 2)
    }

    /// Top-left pixel corner of the cell at `(column, row)`.
    pub fn cell_origin(&self, column: i32, row: i32) -> Position {
        Position::new(column * self.cell_size, row * self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_32_by_24() {
        let config = GameConfig::default();
        assert_eq!(config.columns(), 32);
        assert_eq!(config.rows(), 24);
        assert_eq!(config.cell_count(), 768);
    }

    #[test]
    fn center_is_middle_of_screen() {
        assert_eq!(GameConfig::default().center(), Position::new(320, 240));
    }

    #[test]
    fn cell_mapping() {
        let config = GameConfig::default();
        assert_eq!(config.cell_origin(0, 0), Position::ZERO);
        assert_eq!(config.cell_origin(3, 2), Position::new(60, 40));
        assert_eq!(config.cell_origin(31, 23), Position::new(620, 460));
    }
}
