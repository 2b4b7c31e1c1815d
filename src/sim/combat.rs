//! Proximity damage and match outcome
//!
//! Every live projectile is tested against every craft that did not fire it.
//! A projectile closer than the critical distance deals 1 damage per frame,
//! so a slow shot lingering near a craft keeps hurting it for as long as it
//! lives (unless single-hit mode removes it on first contact).

use serde::{Deserialize, Serialize};

use super::craft::{Craft, Side};
use super::projectile::ProjectilePool;
use crate::consts::CRITICAL_DISTANCE;

/// Match state; both won states are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchOutcome {
    #[default]
    Ongoing,
    Player1Won,
    Player2Won,
}

impl MatchOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchOutcome::Ongoing)
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            MatchOutcome::Ongoing => None,
            MatchOutcome::Player1Won => Some(Side::Player1),
            MatchOutcome::Player2Won => Some(Side::Player2),
        }
    }

    fn won_by(side: Side) -> Self {
        match side {
            Side::Player1 => MatchOutcome::Player1Won,
            Side::Player2 => MatchOutcome::Player2Won,
        }
    }
}

/// Decide the outcome from current health.
///
/// Player 1 is checked first: if both craft are at or below zero in the same
/// frame, player 1 is the one found destroyed and player 2 wins.
pub fn decide_outcome(player1: &Craft, player2: &Craft) -> MatchOutcome {
    if player1.is_destroyed() {
        MatchOutcome::won_by(Side::Player2)
    } else if player2.is_destroyed() {
        MatchOutcome::won_by(Side::Player1)
    } else {
        MatchOutcome::Ongoing
    }
}

/// Applies projectile damage and tracks the match outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatResolver {
    pub critical_distance: f64,
    /// Remove a projectile after it damages a craft
    pub single_hit_projectiles: bool,
    outcome: MatchOutcome,
}

impl Default for CombatResolver {
    fn default() -> Self {
        Self::new(CRITICAL_DISTANCE, false)
    }
}

impl CombatResolver {
    pub fn new(critical_distance: f64, single_hit_projectiles: bool) -> Self {
        Self {
            critical_distance,
            single_hit_projectiles,
            outcome: MatchOutcome::Ongoing,
        }
    }

    pub fn outcome(&self) -> MatchOutcome {
        self.outcome
    }

    /// Apply one frame of damage, then update the outcome.
    ///
    /// Once the outcome is terminal this does nothing and returns it.
    pub fn resolve(
        &mut self,
        player1: &mut Craft,
        player2: &mut Craft,
        projectiles: &mut ProjectilePool,
    ) -> MatchOutcome {
        if self.outcome.is_terminal() {
            return self.outcome;
        }

        let hits = self.apply_damage(player1, player2, projectiles);
        if self.single_hit_projectiles {
            projectiles.remove_ids(&hits);
        }

        self.outcome = decide_outcome(player1, player2);
        if let Some(winner) = self.outcome.winner() {
            log::info!(
                "Match over: {:?} wins (health {} / {})",
                winner,
                player1.health,
                player2.health
            );
        }
        self.outcome
    }

    /// Damage every craft in range of a foreign projectile; returns the ids of
    /// projectiles that hit something
    fn apply_damage(
        &self,
        player1: &mut Craft,
        player2: &mut Craft,
        projectiles: &ProjectilePool,
    ) -> Vec<u32> {
        let mut hits = Vec::new();
        for projectile in projectiles.iter() {
            let mut hit = false;
            for craft in [&mut *player1, &mut *player2] {
                if projectile.owner == craft.id {
                    continue;
                }
                if projectile.position.distance(craft.position) < self.critical_distance {
                    craft.take_damage(1);
                    hit = true;
                }
            }
            if hit {
                hits.push(projectile.id);
            }
        }
        hits
    }
}
