use ggez::input::keyboard::KeyCode;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::apple::Apple;
use crate::config::GameConfig;
use crate::input;
use crate::render::{Drawable, Surface};
use crate::snake::Snake;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub ate_apple: bool,
    pub collided: bool,
    /// Body segments on screen after the move, counted before any reset.
    pub segments: usize,
}

/// Game rules, independent of any window.
pub struct Game {
    config: GameConfig,
    snake: Snake,
    apple: Apple,
    rng: StdRng,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::new(&config);
        let apple = Apple::new(&config, &mut rng);
        Game {
            config,
            snake,
            apple,
            rng,
        }
    }

    pub fn handle_key(&mut self, keycode: Option<KeyCode>) {
        input::handle_keys(keycode, &mut self.snake);
    }

    /// Turn, move, then check the apple before self-collision.
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        self.snake.update_direction();
        self.snake.move_forward();
        trace!("head at {:?}", self.snake.head());

        if self.snake.head() == self.apple.position() {
            self.snake.grow();
            self.apple.randomize_position(&mut self.rng);
            outcome.ate_apple = true;
            debug!(
                "apple eaten, length now {}, apple moved to {:?}",
                self.snake.length(),
                self.apple.position()
            );
        }

        outcome.segments = self.snake.segment_count();
        if self.snake.collides_with_self() {
            info!(
                "snake ran into itself at {:?} with length {}, resetting",
                self.snake.head(),
                self.snake.length()
            );
            self.snake.reset();
            outcome.collided = true;
        }

        outcome
    }

    /// Background first, then the apple, then the snake on top.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.config.background_color);
        self.apple.draw(surface);
        self.snake.draw(surface);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn apple_mut(&mut self) -> &mut Apple {
        &mut self.apple
    }
}
