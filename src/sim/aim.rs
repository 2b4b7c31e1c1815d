//! Turret geometry
//!
//! Each craft's gun barrel always points at its opponent. The same vector
//! gives the default fire direction.

use serde::{Deserialize, Serialize};

use super::craft::Craft;
use super::vector::{Vector2, VectorExt};

/// Barrel vector from `from` toward `to`, `barrel_length` long.
///
/// Overlapping craft give a zero vector.
#[inline]
pub fn aim_vector(from: &Craft, to: &Craft, barrel_length: f64) -> Vector2 {
    aim_between(from.position, to.position, barrel_length)
}

#[inline]
pub fn aim_between(from: Vector2, to: Vector2, barrel_length: f64) -> Vector2 {
    (to - from).normalized() * barrel_length
}

/// Gun barrel segment for rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarrelLine {
    pub start: Vector2,
    pub end: Vector2,
}

pub fn barrel_line(from: &Craft, to: &Craft, barrel_length: f64) -> BarrelLine {
    BarrelLine {
        start: from.position,
        end: from.position + aim_vector(from, to, barrel_length),
    }
}

/// Spawn point and per-frame velocity of a shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireSolution {
    pub origin: Vector2,
    pub velocity: Vector2,
}

/// Default shot from `shooter` at `target`.
///
/// `incoming` is the target's barrel pointing back at the shooter; the shot
/// leaves one barrel length ahead of the shooter and travels against it.
pub fn fire_solution(
    shooter: &Craft,
    target: &Craft,
    barrel_length: f64,
    speed_factor: f64,
) -> FireSolution {
    let incoming = aim_vector(target, shooter, barrel_length);
    FireSolution {
        origin: shooter.position - incoming,
        velocity: incoming * -speed_factor,
    }
}

/// Shot from `shooter` along an explicit `direction` (any length)
pub fn fire_along(
    shooter: &Craft,
    direction: Vector2,
    barrel_length: f64,
    speed_factor: f64,
) -> FireSolution {
    let barrel = direction.normalized() * barrel_length;
    FireSolution {
        origin: shooter.position + barrel,
        velocity: barrel * speed_factor,
    }
}
