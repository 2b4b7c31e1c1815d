//! Player craft: a polygon outline with inertia, friction and health

use serde::{Deserialize, Serialize};

use super::outline::OutlineVariant;
use super::state::Bounds;
use super::vector::{Vector2, VectorExt};
use crate::consts::START_HEALTH;
use crate::error::{Result, SimError};

/// Which player controls a craft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player1,
    Player2,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player1 => Side::Player2,
            Side::Player2 => Side::Player1,
        }
    }
}

/// How friction is applied to velocity each integration step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrictionModel {
    /// `velocity *= 1 - friction` once per frame, regardless of dt
    #[default]
    PerFrame,
    /// `velocity *= (1 - friction)^dt`, frame-rate independent
    FrameScaled,
}

impl FrictionModel {
    /// Multiplier applied to velocity for one step of `dt` seconds
    #[inline]
    pub fn decay(self, friction: f64, dt: f64) -> f64 {
        match self {
            FrictionModel::PerFrame => 1.0 - friction,
            FrictionModel::FrameScaled => (1.0 - friction).powf(dt),
        }
    }
}

/// A player-controlled polygon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Craft {
    pub id: u32,
    /// Outline points relative to the pivot, already rotated by `facing_degrees`
    outline: Vec<Vector2>,
    pub position: Vector2,
    pub velocity: Vector2,
    pub facing_degrees: f64,
    friction: f64,
    pub friction_model: FrictionModel,
    pub health: i32,
    /// Clamp to the arena and stop on contact
    pub bounce_at_bounds: bool,
}

impl Craft {
    /// Build a craft from explicit outline points.
    ///
    /// Fails on an empty outline or a friction outside `[0, 1]`.
    pub fn new(id: u32, outline: Vec<Vector2>, position: Vector2, friction: f64) -> Result<Self> {
        if outline.is_empty() {
            return Err(SimError::EmptyOutline);
        }
        if !(0.0..=1.0).contains(&friction) {
            return Err(SimError::InvalidFriction(friction));
        }
        Ok(Self {
            id,
            outline,
            position,
            velocity: Vector2::ZERO,
            facing_degrees: 0.0,
            friction,
            friction_model: FrictionModel::default(),
            health: START_HEALTH,
            bounce_at_bounds: true,
        })
    }

    /// Build a craft from a named outline
    pub fn from_variant(
        id: u32,
        variant: OutlineVariant,
        side: Side,
        position: Vector2,
        friction: f64,
    ) -> Result<Self> {
        Self::new(id, variant.points(side), position, friction)
    }

    pub fn outline(&self) -> &[Vector2] {
        &self.outline
    }

    pub fn friction(&self) -> f64 {
        self.friction
    }

    /// Accelerate along the current facing; negative `delta` brakes
    pub fn thrust(&mut self, delta: f64) {
        self.velocity += Vector2::new(delta, 0.0).rotated(self.facing_degrees);
    }

    /// Turn the craft, rotating the stored outline with it
    pub fn rotate(&mut self, delta_degrees: f64) {
        self.facing_degrees += delta_degrees;
        for point in &mut self.outline {
            point.rotate_in_place(delta_degrees);
        }
    }

    /// Advance position by `dt` seconds, apply friction, then clamp to `bounds`
    pub fn integrate(&mut self, dt: f64, bounds: &Bounds) {
        self.position += self.velocity * dt;
        self.velocity *= self.friction_model.decay(self.friction, dt);

        if self.bounce_at_bounds {
            if self.position.x < 0.0 {
                self.position.x = 0.0;
                self.velocity.x = 0.0;
            } else if self.position.x > bounds.width {
                self.position.x = bounds.width;
                self.velocity.x = 0.0;
            }
            if self.position.y < 0.0 {
                self.position.y = 0.0;
                self.velocity.y = 0.0;
            } else if self.position.y > bounds.height {
                self.position.y = bounds.height;
                self.velocity.y = 0.0;
            }
        }
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0
    }

    /// Outline points in world space
    pub fn world_outline(&self) -> Vec<Vector2> {
        self.outline.iter().map(|p| self.position + *p).collect()
    }

    /// Drawn line segments in world space (consecutive outline points)
    pub fn edges(&self) -> Vec<(Vector2, Vector2)> {
        self.outline
            .windows(2)
            .map(|pair| (self.position + pair[0], self.position + pair[1]))
            .collect()
    }
}
