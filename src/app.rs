use ggez::event::EventHandler;
use ggez::input::keyboard::KeyInput;
use ggez::{graphics, Context, GameResult};
use log::{error, info};

use crate::config::GameConfig;
use crate::game::Game;
use crate::stats::SessionStats;

/// Drives a [`Game`] from ggez's event loop at a fixed tick rate.
pub struct SnakeApp {
    game: Game,
    stats: SessionStats,
}

impl SnakeApp {
    pub fn new(config: GameConfig) -> Self {
        SnakeApp {
            game: Game::new(config),
            stats: SessionStats::new(),
        }
    }
}

impl EventHandler for SnakeApp {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let tick_rate = self.game.config().tick_rate;
        while ctx.time.check_update_time(tick_rate) {
            let outcome = self.game.tick();
            self.stats.record(&outcome);
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let config = self.game.config();
        let mut canvas = graphics::Canvas::from_frame(ctx, config.background_color);
        self.game.render(&mut canvas);
        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeat: bool) -> GameResult {
        self.game.handle_key(input.keycode);
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> GameResult<bool> {
        match self.stats.summary() {
            Ok(summary) => info!("session summary: {}", summary),
            Err(e) => error!("failed to serialize session summary: {}", e),
        }
        // false lets the event loop shut down.
        Ok(false)
    }
}
