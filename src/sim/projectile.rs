//! Projectile pool
//!
//! Projectiles are plain moving points with an owner. They step a fixed
//! distance per frame (velocity is not scaled by dt, unlike craft motion) and
//! leave the pool only by age expiry, or on first hit when single-hit mode is
//! enabled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::vector::Vector2;
use crate::consts::MAX_PROJECTILE_AGE;
use crate::error::SimError;

/// Cosmetic projectile color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectileColor {
    #[default]
    Green,
    Yellow,
    Red,
    Purple,
    LightBlue,
    Blue,
}

impl ProjectileColor {
    pub const ALL: [ProjectileColor; 6] = [
        ProjectileColor::Green,
        ProjectileColor::Yellow,
        ProjectileColor::Red,
        ProjectileColor::Purple,
        ProjectileColor::LightBlue,
        ProjectileColor::Blue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectileColor::Green => "green",
            ProjectileColor::Yellow => "yellow",
            ProjectileColor::Red => "red",
            ProjectileColor::Purple => "purple",
            ProjectileColor::LightBlue => "light_blue",
            ProjectileColor::Blue => "blue",
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            ProjectileColor::Green => [0, 255, 0],
            ProjectileColor::Yellow => [255, 255, 0],
            ProjectileColor::Red => [255, 0, 0],
            ProjectileColor::Purple => [255, 0, 255],
            ProjectileColor::LightBlue => [0, 255, 255],
            ProjectileColor::Blue => [0, 0, 255],
        }
    }
}

impl fmt::Display for ProjectileColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectileColor {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace([' ', '-'], "_");
        ProjectileColor::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| SimError::UnknownColor(s.to_string()))
    }
}

/// A fired shot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub position: Vector2,
    /// Displacement per frame
    pub velocity: Vector2,
    /// Craft that fired this shot and cannot be damaged by it
    pub owner: u32,
    pub age_frames: u32,
    pub color: ProjectileColor,
}

/// Live projectiles of one arena, in spawn order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectilePool {
    projectiles: Vec<Projectile>,
    pub max_age: u32,
    next_id: u32,
}

impl Default for ProjectilePool {
    fn default() -> Self {
        Self::new(MAX_PROJECTILE_AGE)
    }
}

impl ProjectilePool {
    pub fn new(max_age: u32) -> Self {
        Self {
            projectiles: Vec::new(),
            max_age,
            next_id: 1,
        }
    }

    /// Add a projectile with a fresh id and age 0
    pub fn spawn(
        &mut self,
        origin: Vector2,
        velocity: Vector2,
        owner: u32,
        color: ProjectileColor,
    ) -> &Projectile {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        let index = self.projectiles.len();
        self.projectiles.push(Projectile {
            id,
            position: origin,
            velocity,
            owner,
            age_frames: 0,
            color,
        });
        &self.projectiles[index]
    }

    /// Step every projectile by its velocity and age it one frame.
    ///
    /// `_dt` is accepted for call-site symmetry with craft integration; the
    /// step is fixed per frame.
    pub fn advance_all(&mut self, _dt: f64) {
        for projectile in &mut self.projectiles {
            projectile.position += projectile.velocity;
            projectile.age_frames += 1;
        }
    }

    /// Drop projectiles that have reached `max_age`; returns how many went
    pub fn expire(&mut self) -> usize {
        let before = self.projectiles.len();
        let max_age = self.max_age;
        self.projectiles.retain(|p| p.age_frames < max_age);
        before - self.projectiles.len()
    }

    /// Remove the given projectile ids (used by single-hit mode)
    pub fn remove_ids(&mut self, ids: &[u32]) {
        if ids.is_empty() {
            return;
        }
        self.projectiles.retain(|p| !ids.contains(&p.id));
    }

    pub fn get(&self, id: u32) -> Option<&Projectile> {
        self.projectiles.iter().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }
}
