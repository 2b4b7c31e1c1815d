//! Vector Duel - A two-player vector-craft arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation (craft physics, projectiles, combat, aiming)
//! - `settings`: Data-driven match configuration
//! - `input`: Keyboard/stick state to per-frame craft commands
//! - `error`: Construction-time error type

pub mod error;
pub mod input;
pub mod settings;
pub mod sim;

pub use error::{Result, SimError};
pub use settings::{ControlTuning, Loadout, MatchMode, MatchSettings};

/// Game configuration constants
pub mod consts {
    /// Reference frame step (the arcade runs at 30 fps)
    pub const SIM_DT: f64 = 1.0 / 30.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f64 = 1440.0;
    pub const ARENA_HEIGHT: f64 = 850.0;

    /// Distance from the arena edges to the player 1 start point
    pub const PLAYER1_START_X: f64 = 100.0;
    pub const PLAYER1_START_Y: f64 = 80.0;
    /// Distance from the far arena corner to the player 2 start point
    pub const PLAYER2_START_INSET: f64 = 100.0;

    /// Craft defaults
    pub const START_HEALTH: i32 = 1000;
    /// Fraction of velocity lost per frame (0 = glide forever, 1 = no gliding)
    pub const DEFAULT_FRICTION: f64 = 0.5;

    /// Projectile within this distance of a craft damages it
    pub const CRITICAL_DISTANCE: f64 = 60.0;
    /// Projectiles are removed once this many frames old
    pub const MAX_PROJECTILE_AGE: u32 = 400;

    /// Length of the gun barrel drawn toward the opponent
    pub const BARREL_LENGTH: f64 = 35.0;
    /// Projectile velocity per unit of barrel vector
    pub const PROJECTILE_SPEED_FACTOR: f64 = 0.05;

    /// Keyboard control magnitudes
    pub const KEY_ROTATE_DEGREES: f64 = 5.0;
    pub const KEY_THRUST: f64 = 150.0;
    pub const KEY_BRAKE: f64 = 50.0;

    /// Analog stick control magnitudes
    pub const STICK_DEAD_ZONE: f64 = 0.3;
    pub const STICK_ROTATE_SCALE: f64 = 5.0 * 1.5;
    pub const STICK_THRUST: f64 = 150.0;
    pub const STICK_BRAKE: f64 = 75.0;
}

/// Wrap an angle in degrees to [-180, 180)
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_degrees() {
        assert!((wrap_degrees(190.0) - -170.0).abs() < 1e-9);
        assert!((wrap_degrees(-190.0) - 170.0).abs() < 1e-9);
        assert!((wrap_degrees(720.0)).abs() < 1e-9);
        assert!((wrap_degrees(180.0) - -180.0).abs() < 1e-9);
    }
}
