use ggez::input::keyboard::KeyCode;

use crate::grid::Direction;
use crate::snake::Snake;

/// Arrow key to heading; `None` for every other key.
pub fn direction_for_key(keycode: KeyCode) -> Option<Direction> {
    match keycode {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

/// Stores the direction of an arrow key press as the snake's pending turn.
/// Other keys, and presses without a recognised keycode, are ignored.
pub fn handle_keys(keycode: Option<KeyCode>, snake: &mut Snake) {
    if let Some(direction) = keycode.and_then(direction_for_key) {
        snake.set_pending_direction(direction);
    }
}
