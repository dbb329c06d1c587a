use ggez::graphics::Color;
use rand::Rng;

use crate::config::GameConfig;
use crate::grid::Position;
use crate::render::{Drawable, Surface};

/// The single piece of food on the board.
#[derive(Debug, Clone)]
pub struct Apple {
    position: Position,
    color: Color,
    grid: GameConfig,
}

impl Apple {
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let mut apple = Apple {
            position: Position::ZERO,
            color: config.apple_color,
            grid: config.clone(),
        };
        apple.randomize_position(rng);
        apple
    }

    /// Moves the apple to a uniformly chosen cell. Cells under the snake are
    /// not excluded.
    pub fn randomize_position<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let column = rng.gen_range(0..self.grid.columns());
        let row = rng.gen_range(0..self.grid.rows());
        self.position = self.grid.cell_origin(column, row);
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

impl Drawable for Apple {
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_cell(self.position, self.grid.cell_size, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::{DrawCall, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawns_inside_the_grid_on_cell_corners() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut apple = Apple::new(&config, &mut rng);

        for _ in 0..1000 {
            apple.randomize_position(&mut rng);
            let Position { x, y } = apple.position();
            assert!((0..640).contains(&x), "x out of range: {x}");
            assert!((0..480).contains(&y), "y out of range: {y}");
            assert_eq!(x % 20, 0);
            assert_eq!(y % 20, 0);
        }
    }

    #[test]
    fn follows_a_custom_grid() {
        let config = GameConfig {
            screen_width: 100,
            screen_height: 50,
            cell_size: 10,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let mut apple = Apple::new(&config, &mut rng);

        for _ in 0..500 {
            apple.randomize_position(&mut rng);
            let Position { x, y } = apple.position();
            assert!((0..100).contains(&x) && (0..50).contains(&y));
            assert_eq!((x % 10, y % 10), (0, 0));
        }
    }

    #[test]
    fn reaches_every_edge_of_the_grid() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut apple = Apple::new(&config, &mut rng);
        let (mut max_x, mut max_y) = (0, 0);
        let (mut min_x, mut min_y) = (i32::MAX, i32::MAX);

        for _ in 0..20_000 {
            apple.randomize_position(&mut rng);
            let pos = apple.position();
            max_x = max_x.max(pos.x);
            max_y = max_y.max(pos.y);
            min_x = min_x.min(pos.x);
            min_y = min_y.min(pos.y);
        }

        assert_eq!((min_x, min_y), (0, 0));
        assert_eq!((max_x, max_y), (620, 460));
    }

    #[test]
    fn draws_one_red_cell() {
        let config = GameConfig::default();
        let mut apple = Apple::new(&config, &mut StdRng::seed_from_u64(1));
        apple.set_position(Position::new(40, 60));

        let mut surface = RecordingSurface::default();
        apple.draw(&mut surface);

        assert_eq!(
            surface.calls,
            vec![DrawCall::Cell(Position::new(40, 60), 20, Color::RED)]
        );
    }
}
