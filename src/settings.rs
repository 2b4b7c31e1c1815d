//! Match settings
//!
//! Loaded by the caller (JSON) and passed into arena construction. Partial
//! JSON overrides only the fields it names.

use rand::Rng;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};
use crate::sim::{FrictionModel, OutlineVariant, ProjectileColor};

/// Whether combat counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Damage and a winner
    #[default]
    Versus,
    /// Free flight: projectiles never damage and the match never ends
    Visual,
}

/// Outline and projectile color chosen for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Loadout {
    pub variant: OutlineVariant,
    pub color: ProjectileColor,
}

/// Player 1's shop
pub const PLAYER1_VARIANTS: [OutlineVariant; 6] = [
    OutlineVariant::Standard,
    OutlineVariant::Rectangle,
    OutlineVariant::Diamond,
    OutlineVariant::SpaceShuttle,
    OutlineVariant::Dagger,
    OutlineVariant::Rocket,
];
pub const PLAYER1_COLORS: [ProjectileColor; 3] =
    [ProjectileColor::Green, ProjectileColor::Yellow, ProjectileColor::Red];

/// Player 2's shop
pub const PLAYER2_VARIANTS: [OutlineVariant; 3] =
    [OutlineVariant::Standard, OutlineVariant::Pacman, OutlineVariant::Arrow];
pub const PLAYER2_COLORS: [ProjectileColor; 3] =
    [ProjectileColor::Purple, ProjectileColor::LightBlue, ProjectileColor::Blue];

impl Loadout {
    pub fn new(variant: OutlineVariant, color: ProjectileColor) -> Self {
        Self { variant, color }
    }

    /// Pick uniformly from the candidates; `None` if either list is empty
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        variants: &[OutlineVariant],
        colors: &[ProjectileColor],
    ) -> Option<Self> {
        let variant = *variants.choose(rng)?;
        let color = *colors.choose(rng)?;
        Some(Self { variant, color })
    }
}

/// Magnitudes produced by the input mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlTuning {
    /// Degrees per frame while a rotate key is held
    pub key_rotate_degrees: f64,
    pub key_thrust: f64,
    pub key_brake: f64,
    /// Axis deflection ignored around center
    pub stick_dead_zone: f64,
    /// Degrees per frame per unit of axis deflection
    pub stick_rotate_scale: f64,
    pub stick_thrust: f64,
    pub stick_brake: f64,
}

impl Default for ControlTuning {
    fn default() -> Self {
        Self {
            key_rotate_degrees: KEY_ROTATE_DEGREES,
            key_thrust: KEY_THRUST,
            key_brake: KEY_BRAKE,
            stick_dead_zone: STICK_DEAD_ZONE,
            stick_rotate_scale: STICK_ROTATE_SCALE,
            stick_thrust: STICK_THRUST,
            stick_brake: STICK_BRAKE,
        }
    }
}

/// Everything needed to build an arena
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    pub arena_width: f64,
    pub arena_height: f64,

    // === Craft ===
    pub friction: f64,
    pub friction_model: FrictionModel,
    pub bounce_at_bounds: bool,

    // === Combat ===
    pub critical_distance: f64,
    pub max_projectile_age: u32,
    pub barrel_length: f64,
    pub projectile_speed_factor: f64,
    /// Remove a projectile after its first hit
    pub single_hit_projectiles: bool,
    pub mode: MatchMode,

    // === Players ===
    pub player1: Loadout,
    pub player2: Loadout,

    pub controls: ControlTuning,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            friction: DEFAULT_FRICTION,
            friction_model: FrictionModel::PerFrame,
            bounce_at_bounds: true,

            critical_distance: CRITICAL_DISTANCE,
            max_projectile_age: MAX_PROJECTILE_AGE,
            barrel_length: BARREL_LENGTH,
            projectile_speed_factor: PROJECTILE_SPEED_FACTOR,
            single_hit_projectiles: false,
            mode: MatchMode::Versus,

            player1: Loadout::new(OutlineVariant::Standard, ProjectileColor::Red),
            player2: Loadout::new(OutlineVariant::Standard, ProjectileColor::Blue),

            controls: ControlTuning::default(),
        }
    }
}

impl MatchSettings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: MatchSettings = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!(
            "Loaded match settings: {}x{}, {:?} vs {:?}",
            settings.arena_width,
            settings.arena_height,
            settings.player1.variant,
            settings.player2.variant
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject bounds, friction and combat tuning the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.arena_width) || !valid(self.arena_height) {
            return Err(SimError::InvalidBounds {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(SimError::InvalidFriction(self.friction));
        }
        for (name, value) in [
            ("critical_distance", self.critical_distance),
            ("barrel_length", self.barrel_length),
            ("projectile_speed_factor", self.projectile_speed_factor),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }

    /// Pick both loadouts at random from each player's shop
    pub fn randomize_loadouts(&mut self, seed: u64) {
        let mut rng = Pcg32::seed_from_u64(seed);
        if let Some(loadout) = Loadout::random(&mut rng, &PLAYER1_VARIANTS, &PLAYER1_COLORS) {
            self.player1 = loadout;
        }
        if let Some(loadout) = Loadout::random(&mut rng, &PLAYER2_VARIANTS, &PLAYER2_COLORS) {
            self.player2 = loadout;
        }
        log::info!(
            "Random loadouts (seed {}): {} / {}, {} / {}",
            seed,
            self.player1.variant,
            self.player1.color,
            self.player2.variant,
            self.player2.color
        );
    }
}
