//! UI plugin - camera, window title and game-flow logging.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::game::{AppleEaten, Game, GameConfig, ResetCause, SnakeReset, WINDOW_TITLE};

/// Plugin for UI and game flow systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system).add_systems(
            Update,
            (log_game_events, update_window_title).chain(),
        );
    }
}

/// Window title showing the current score.
pub fn window_title(score: usize) -> String {
    format!("{WINDOW_TITLE} | Score: {score}")
}

/// Initial setup system - camera and starting title.
fn setup_system(
    mut commands: Commands,
    game: Res<Game>,
    config: Res<GameConfig>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    commands.spawn(Camera2d);

    if let Ok(mut window) = windows.single_mut() {
        window.title = window_title(game.score());
    }

    let board = game.board();
    info!(
        "Board is {}x{} cells of {}px, ticking at {} Hz",
        board.columns(),
        board.rows(),
        board.cell_size(),
        config.speed
    );
}

/// System to report feeds and resets.
fn log_game_events(
    mut apple_reader: MessageReader<AppleEaten>,
    mut reset_reader: MessageReader<SnakeReset>,
) {
    for event in apple_reader.read() {
        debug!(
            "Apple eaten at ({}, {}), length {}",
            event.position.x, event.position.y, event.length
        );
    }

    for event in reset_reader.read() {
        match event.cause {
            ResetCause::Collision => {
                info!("Snake ran into itself at length {}, starting over", event.length)
            }
            ResetCause::BoardFilled => {
                info!("Snake filled the board at length {}, starting over", event.length)
            }
        }
    }
}

/// System to keep the window title in sync with the score.
fn update_window_title(game: Res<Game>, mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    if !game.is_changed() {
        return;
    }

    let title = window_title(game.score());
    if let Ok(mut window) = windows.single_mut()
        && window.title != title
    {
        window.title = title;
    }
}
