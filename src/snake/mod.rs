//! Snake plugin - reads keyboard input and advances the game on the fixed tick.

use bevy::input::ButtonState;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;

use crate::game::{AppleEaten, Direction, Game, ResetCause, SnakeReset, TickOutcome};

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AppleEaten>()
            .add_message::<SnakeReset>()
            .add_systems(Update, snake_movement_input)
            .add_systems(FixedUpdate, snake_tick);
    }
}

/// System to turn this frame's key presses into a pending direction, in the
/// order they arrived.
fn snake_movement_input(
    mut keyboard_input: MessageReader<KeyboardInput>,
    mut game: ResMut<Game>,
) {
    for input in keyboard_input.read() {
        if input.state != ButtonState::Pressed || input.repeat {
            continue;
        }
        if let Some(direction) = Direction::from_key(input.key_code)
            && !game.handle_input(direction)
        {
            debug!("Ignoring reverse turn to {:?}", direction);
        }
    }
}

/// System to advance the simulation once per fixed tick.
fn snake_tick(
    mut game: ResMut<Game>,
    mut apple_writer: MessageWriter<AppleEaten>,
    mut reset_writer: MessageWriter<SnakeReset>,
) {
    match game.tick() {
        TickOutcome::Moved => {}
        TickOutcome::Fed { length } => {
            let position = game.snake().head();
            apple_writer.write(AppleEaten { position, length });
        }
        TickOutcome::Collided { length } => {
            reset_writer.write(SnakeReset {
                length,
                cause: ResetCause::Collision,
            });
        }
        TickOutcome::Filled { length } => {
            reset_writer.write(SnakeReset {
                length,
                cause: ResetCause::BoardFilled,
            });
        }
    }
}
