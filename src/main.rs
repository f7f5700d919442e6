use anyhow::{Context, Result, bail};
use bevy::{log::LogPlugin, prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

mod game;
mod rendering;
mod snake;
mod ui;

use game::{
    BOARD_BACKGROUND_COLOR, DEFAULT_LOG_FILTER, GRID_SIZE, Game, GameConfig, SCREEN_HEIGHT,
    SCREEN_WIDTH, SPEED, WINDOW_TITLE,
};
use rendering::RenderingPlugin;
use snake::SnakePlugin;
use ui::UiPlugin;

#[derive(Debug, Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Classic snake on a wrapping grid")]
struct Cli {
    /// Board width in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = SCREEN_WIDTH)]
    width: u32,

    /// Board height in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = SCREEN_HEIGHT)]
    height: u32,

    /// Side of one grid cell in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = GRID_SIZE)]
    grid_size: u32,

    /// Simulation ticks per second
    #[arg(long, value_name = "HZ", default_value_t = SPEED)]
    speed: u32,

    /// Seed for apple placement; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter, e.g. "debug" or "info,grid_snake=trace"
    #[arg(long, value_name = "FILTER", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        GameConfig {
            screen_width: cli.width,
            screen_height: cli.height,
            grid_size: cli.grid_size,
            speed: cli.speed,
            seed: cli.seed,
            log_filter: cli.log_filter,
        }
    }
}

fn main() -> Result<()> {
    let config = GameConfig::from(Cli::parse());
    let board = config.board().context("invalid board configuration")?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let exit = App::new()
        .add_plugins((
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        resolution: WindowResolution::new(
                            config.screen_width,
                            config.screen_height,
                        ),
                        title: WINDOW_TITLE.to_string(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: config.log_filter.clone(),
                    ..default()
                }),
            Shape2dPlugin::default(),
        ))
        .add_plugins((SnakePlugin, RenderingPlugin, UiPlugin))
        .insert_resource(ClearColor(BOARD_BACKGROUND_COLOR))
        .insert_resource(Time::<Fixed>::from_duration(config.tick_interval()))
        .insert_resource(Game::new(board, rng))
        .insert_resource(config)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("game exited with code {code}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_constants() {
        let config = GameConfig::from(Cli::parse_from(["grid_snake"]));
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_cli_overrides() {
        let config = GameConfig::from(Cli::parse_from([
            "grid_snake",
            "--width",
            "200",
            "--height",
            "100",
            "--grid-size",
            "10",
            "--speed",
            "4",
            "--seed",
            "99",
        ]));
        let board = config.board().unwrap();
        assert_eq!(board.columns(), 20);
        assert_eq!(board.rows(), 10);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.tick_interval(), std::time::Duration::from_millis(250));
    }
}
