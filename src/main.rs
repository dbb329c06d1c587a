use ggez::event;
use log::info;

use snake_arcade::{GameConfig, SnakeApp};

fn main() -> ggez::GameResult {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::default();
    info!(
        "starting snake: {}x{} px, {}x{} cells, {} ticks/s",
        config.screen_width,
        config.screen_height,
        config.columns(),
        config.rows(),
        config.tick_rate
    );

    let window_setup = ggez::conf::WindowSetup::default()
        .title(&config.title)
        .vsync(true);
    let window_mode = ggez::conf::WindowMode::default()
        .dimensions(config.screen_width as f32, config.screen_height as f32)
        .resizable(false);

    let (ctx, event_loop) = ggez::ContextBuilder::new("snake", "author")
        .window_setup(window_setup)
        .window_mode(window_mode)
        .build()?;
    info!("window created");

    let app = SnakeApp::new(config);
    event::run(ctx, event_loop, app)
}
