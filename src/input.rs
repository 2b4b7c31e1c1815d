//! Device state to craft commands
//!
//! The caller polls keyboard and joystick and fills these plain structs;
//! mapping them to [`Command`]s is deterministic and device-free.

use crate::settings::ControlTuning;
use crate::sim::{Command, CraftCommand};

/// Held keys for one player
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardState {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub brake: bool,
    pub fire: bool,
}

/// Analog stick for one player; axes in [-1, 1], y negative is forward
#[derive(Debug, Clone, Copy, Default)]
pub struct StickState {
    pub x: f64,
    pub y: f64,
    pub fire: bool,
}

/// Fixed-magnitude commands for held keys
pub fn keyboard_commands(
    craft_id: u32,
    keys: &KeyboardState,
    tuning: &ControlTuning,
) -> Vec<CraftCommand> {
    let mut commands = Vec::new();
    let mut push = |command| commands.push(CraftCommand { craft_id, command });

    if keys.thrust {
        push(Command::Thrust(tuning.key_thrust));
    }
    if keys.brake {
        push(Command::Brake(tuning.key_brake));
    }
    if keys.rotate_left {
        push(Command::RotateLeft(tuning.key_rotate_degrees));
    }
    if keys.rotate_right {
        push(Command::RotateRight(tuning.key_rotate_degrees));
    }
    if keys.fire {
        push(Command::fire());
    }
    commands
}

/// Commands for a stick; deflection inside the dead zone is ignored.
///
/// Rotation scales with deflection; thrust and brake are fixed once the axis
/// leaves the dead zone.
pub fn stick_commands(
    craft_id: u32,
    stick: &StickState,
    tuning: &ControlTuning,
) -> Vec<CraftCommand> {
    let mut commands = Vec::new();
    let mut push = |command| commands.push(CraftCommand { craft_id, command });
    let dead_zone = tuning.stick_dead_zone;

    if stick.x < -dead_zone {
        push(Command::RotateLeft(tuning.stick_rotate_scale * -stick.x));
    } else if stick.x > dead_zone {
        push(Command::RotateRight(tuning.stick_rotate_scale * stick.x));
    }
    if stick.y < -dead_zone {
        push(Command::Thrust(tuning.stick_thrust));
    } else if stick.y > dead_zone {
        push(Command::Brake(tuning.stick_brake));
    }
    if stick.fire {
        push(Command::fire());
    }
    commands
}
