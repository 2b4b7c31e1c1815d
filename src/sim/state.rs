//! Arena state
//!
//! One arena owns both craft, the projectile pool, the bounds and the match
//! outcome. Ids are allocated per arena; two arenas never share anything.

use serde::{Deserialize, Serialize};

use super::aim::{BarrelLine, FireSolution, barrel_line, fire_along, fire_solution};
use super::combat::{CombatResolver, MatchOutcome};
use super::craft::{Craft, Side};
use super::projectile::{ProjectileColor, ProjectilePool};
use super::vector::Vector2;
use crate::consts::*;
use crate::error::{Result, SimError};
use crate::settings::{MatchMode, MatchSettings};

/// Arena extent; positions are clamped to `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SimError::InvalidBounds { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn contains(&self, point: Vector2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// Nearest point inside the bounds
    pub fn clamp(&self, point: Vector2) -> Vector2 {
        point.clamp(Vector2::ZERO, Vector2::new(self.width, self.height))
    }

    /// Player 1 starts near the top-left corner
    pub fn player1_start(&self) -> Vector2 {
        Vector2::new(PLAYER1_START_X, PLAYER1_START_Y)
    }

    /// Player 2 starts near the bottom-right corner
    pub fn player2_start(&self) -> Vector2 {
        Vector2::new(
            self.width - PLAYER2_START_INSET,
            self.height - PLAYER2_START_INSET,
        )
    }
}

/// Render view of a craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CraftView {
    pub id: u32,
    pub side: Side,
    /// Outline points in world space
    pub outline: Vec<Vector2>,
    pub position: Vector2,
    pub health: i32,
}

/// Render view of a projectile
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vector2,
    pub color: ProjectileColor,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub crafts: [CraftView; 2],
    pub projectiles: Vec<ProjectileView>,
    /// Gun barrels, player 1 then player 2
    pub barrels: [BarrelLine; 2],
    pub outcome: MatchOutcome,
    pub frame: u64,
}

/// A single two-player match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    pub bounds: Bounds,
    pub player1: Craft,
    pub player2: Craft,
    pub projectiles: ProjectilePool,
    pub resolver: CombatResolver,
    pub mode: MatchMode,
    /// Projectile colors, player 1 then player 2
    pub colors: [ProjectileColor; 2],
    pub barrel_length: f64,
    pub projectile_speed_factor: f64,
    /// Frames simulated so far
    pub frame: u64,
    /// Seconds simulated so far
    pub playtime: f64,
    next_id: u32,
}

impl Arena {
    /// Build an arena with both craft at their conventional start corners
    pub fn new(settings: &MatchSettings) -> Result<Self> {
        let bounds = Bounds::new(settings.arena_width, settings.arena_height)?;
        Self::with_positions(settings, bounds.player1_start(), bounds.player2_start())
    }

    /// Build an arena with explicit start positions.
    ///
    /// With `bounce_at_bounds` set, positions outside the arena are clamped in.
    pub fn with_positions(
        settings: &MatchSettings,
        player1_at: Vector2,
        player2_at: Vector2,
    ) -> Result<Self> {
        settings.validate()?;
        let bounds = Bounds::new(settings.arena_width, settings.arena_height)?;
        let build = |side: Side, at: Vector2| -> Result<Craft> {
            let loadout = match side {
                Side::Player1 => settings.player1,
                Side::Player2 => settings.player2,
            };
            let at = if settings.bounce_at_bounds && !bounds.contains(at) {
                let clamped = bounds.clamp(at);
                log::warn!("{:?} start {} outside arena, moved to {}", side, at, clamped);
                clamped
            } else {
                at
            };
            // Id assigned by the arena below
            let mut craft = Craft::from_variant(0, loadout.variant, side, at, settings.friction)?;
            craft.bounce_at_bounds = settings.bounce_at_bounds;
            craft.friction_model = settings.friction_model;
            Ok(craft)
        };

        let player1 = build(Side::Player1, player1_at)?;
        let mut player2 = build(Side::Player2, player2_at)?;
        // Face player 1
        player2.rotate(180.0);

        log::info!(
            "Arena {}x{} ({:?}): {} [{}] vs {} [{}]",
            bounds.width,
            bounds.height,
            settings.mode,
            settings.player1.variant,
            settings.player1.color,
            settings.player2.variant,
            settings.player2.color
        );

        let mut arena = Self {
            bounds,
            player1,
            player2,
            projectiles: ProjectilePool::new(settings.max_projectile_age),
            resolver: CombatResolver::new(
                settings.critical_distance,
                settings.single_hit_projectiles,
            ),
            mode: settings.mode,
            colors: [settings.player1.color, settings.player2.color],
            barrel_length: settings.barrel_length,
            projectile_speed_factor: settings.projectile_speed_factor,
            frame: 0,
            playtime: 0.0,
            next_id: 1,
        };
        arena.player1.id = arena.next_entity_id();
        arena.player2.id = arena.next_entity_id();
        Ok(arena)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn outcome(&self) -> MatchOutcome {
        self.resolver.outcome()
    }

    pub fn craft(&self, side: Side) -> &Craft {
        match side {
            Side::Player1 => &self.player1,
            Side::Player2 => &self.player2,
        }
    }

    pub fn craft_mut(&mut self, side: Side) -> &mut Craft {
        match side {
            Side::Player1 => &mut self.player1,
            Side::Player2 => &mut self.player2,
        }
    }

    /// Which side owns the craft with this id
    pub fn side_of(&self, craft_id: u32) -> Option<Side> {
        if self.player1.id == craft_id {
            Some(Side::Player1)
        } else if self.player2.id == craft_id {
            Some(Side::Player2)
        } else {
            None
        }
    }

    /// Fire from `side`, at the opponent unless `aim` overrides the direction.
    ///
    /// Returns the new projectile id.
    pub fn fire(&mut self, side: Side, aim: Option<Vector2>) -> u32 {
        let shooter = self.craft(side);
        let target = self.craft(side.opponent());
        let FireSolution { origin, velocity } = match aim {
            Some(direction) => {
                fire_along(shooter, direction, self.barrel_length, self.projectile_speed_factor)
            }
            None => fire_solution(shooter, target, self.barrel_length, self.projectile_speed_factor),
        };
        let owner = shooter.id;
        let color = self.colors[side_index(side)];
        let id = self.projectiles.spawn(origin, velocity, owner, color).id;
        log::debug!("Craft {} fired projectile {}", owner, id);
        id
    }

    /// Gun barrels for both craft, player 1 then player 2
    pub fn barrels(&self) -> [BarrelLine; 2] {
        [
            barrel_line(&self.player1, &self.player2, self.barrel_length),
            barrel_line(&self.player2, &self.player1, self.barrel_length),
        ]
    }

    /// Apply one frame of combat; a no-op outcome in visual mode
    pub fn resolve_combat(&mut self) -> MatchOutcome {
        match self.mode {
            MatchMode::Versus => {
                self.resolver
                    .resolve(&mut self.player1, &mut self.player2, &mut self.projectiles)
            }
            MatchMode::Visual => MatchOutcome::Ongoing,
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let view = |craft: &Craft, side: Side| CraftView {
            id: craft.id,
            side,
            outline: craft.world_outline(),
            position: craft.position,
            health: craft.health,
        };
        FrameSnapshot {
            crafts: [
                view(&self.player1, Side::Player1),
                view(&self.player2, Side::Player2),
            ],
            projectiles: self
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    position: p.position,
                    color: p.color,
                })
                .collect(),
            barrels: self.barrels(),
            outcome: self.outcome(),
            frame: self.frame,
        }
    }
}

#[inline]
fn side_index(side: Side) -> usize {
    match side {
        Side::Player1 => 0,
        Side::Player2 => 1,
    }
}
