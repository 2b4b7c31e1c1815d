//! Per-frame step
//!
//! One call advances the arena by one rendered frame: commands, craft
//! integration, projectile advance and expiry, combat, terminal check.

use serde::{Deserialize, Serialize};

use super::craft::Side;
use super::state::Arena;
use super::vector::Vector2;

/// A normalized player command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Turn left (negative angle, y-down screen space) by this many degrees
    RotateLeft(f64),
    /// Turn right by this many degrees
    RotateRight(f64),
    /// Accelerate forward by this amount
    Thrust(f64),
    /// Accelerate backward by this amount
    Brake(f64),
    /// Fire at the opponent, or along `aim` if set
    Fire { aim: Option<Vector2> },
}

impl Command {
    pub fn fire() -> Self {
        Command::Fire { aim: None }
    }
}

/// A command addressed to a craft by id
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CraftCommand {
    pub craft_id: u32,
    pub command: Command,
}

/// Input commands for a single frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub commands: Vec<CraftCommand>,
}

impl TickInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, craft_id: u32, command: Command) -> &mut Self {
        self.commands.push(CraftCommand { craft_id, command });
        self
    }

    pub fn extend(&mut self, commands: impl IntoIterator<Item = CraftCommand>) -> &mut Self {
        self.commands.extend(commands);
        self
    }
}

/// What the caller should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameResult {
    Ongoing,
    MatchOver { winner: Side },
}

/// Advance the arena by one frame of `dt` seconds.
///
/// After the match is over nothing moves and the result repeats.
pub fn tick(arena: &mut Arena, input: &TickInput, dt: f64) -> FrameResult {
    if let Some(winner) = arena.outcome().winner() {
        return FrameResult::MatchOver { winner };
    }

    arena.frame += 1;
    arena.playtime += dt;

    for cmd in &input.commands {
        apply_command(arena, cmd);
    }

    let bounds = arena.bounds;
    arena.player1.integrate(dt, &bounds);
    arena.player2.integrate(dt, &bounds);

    arena.projectiles.advance_all(dt);
    let expired = arena.projectiles.expire();
    log::trace!(
        "Frame {}: {} projectiles live, {} expired",
        arena.frame,
        arena.projectiles.len(),
        expired
    );

    match arena.resolve_combat().winner() {
        Some(winner) => {
            log::info!("Match ended on frame {} ({:.1}s)", arena.frame, arena.playtime);
            FrameResult::MatchOver { winner }
        }
        None => FrameResult::Ongoing,
    }
}

fn apply_command(arena: &mut Arena, cmd: &CraftCommand) {
    let Some(side) = arena.side_of(cmd.craft_id) else {
        log::warn!("Ignoring {:?} for unknown craft {}", cmd.command, cmd.craft_id);
        return;
    };
    match cmd.command {
        Command::RotateLeft(degrees) => arena.craft_mut(side).rotate(-degrees),
        Command::RotateRight(degrees) => arena.craft_mut(side).rotate(degrees),
        Command::Thrust(amount) => arena.craft_mut(side).thrust(amount),
        Command::Brake(amount) => arena.craft_mut(side).thrust(-amount),
        Command::Fire { aim } => {
            arena.fire(side, aim);
        }
    }
}

impl Arena {
    /// Advance one frame; see [`tick`]
    pub fn advance_frame(&mut self, input: &TickInput, dt: f64) -> FrameResult {
        tick(self, input, dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SIM_DT, START_HEALTH};
    use crate::settings::{MatchMode, MatchSettings};
    use crate::sim::{MatchOutcome, ProjectileColor};

    fn close_duel() -> Arena {
        Arena::with_positions(
            &MatchSettings::default(),
            Vector2::new(200.0, 200.0),
            Vector2::new(240.0, 200.0),
        )
        .unwrap()
    }

    #[test]
    fn test_commands_reach_craft() {
        let mut arena = Arena::new(&MatchSettings::default()).unwrap();
        let p1 = arena.player1.id;
        let mut input = TickInput::new();
        input.push(p1, Command::RotateRight(90.0)).push(p1, Command::Thrust(150.0));
        arena.advance_frame(&input, SIM_DT);

        assert!((arena.player1.facing_degrees - 90.0).abs() < 1e-9);
        // Moved along +y by v * dt before friction
        assert!((arena.player1.position.y - (80.0 + 150.0 * SIM_DT)).abs() < 1e-9);
        assert!((arena.player1.position.x - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotate_left_and_brake() {
        let mut arena = Arena::new(&MatchSettings::default()).unwrap();
        let p1 = arena.player1.id;
        let mut input = TickInput::new();
        input.push(p1, Command::RotateLeft(10.0)).push(p1, Command::Brake(50.0));
        arena.advance_frame(&input, SIM_DT);
        assert!((arena.player1.facing_degrees + 10.0).abs() < 1e-9);
        assert!(arena.player1.velocity.x < 0.0);
    }

    #[test]
    fn test_unknown_craft_is_noop() {
        let mut arena = Arena::new(&MatchSettings::default()).unwrap();
        let before = arena.player1.position;
        let mut input = TickInput::new();
        input.push(42, Command::fire()).push(42, Command::Thrust(500.0));
        assert_eq!(arena.advance_frame(&input, SIM_DT), FrameResult::Ongoing);
        assert!(arena.projectiles.is_empty());
        assert_eq!(arena.player1.position, before);
    }

    #[test]
    fn test_fire_then_advance_same_frame() {
        let mut arena = close_duel();
        let mut input = TickInput::new();
        input.push(arena.player1.id, Command::fire());
        arena.advance_frame(&input, SIM_DT);

        assert_eq!(arena.projectiles.len(), 1);
        let shot = arena.projectiles.iter().next().unwrap();
        assert_eq!(shot.age_frames, 1);
        // Spawned 35 ahead, then one step of 1.75
        assert!(shot.position.distance(Vector2::new(236.75, 200.0)) < 1e-9);
        assert_eq!(arena.player2.health, START_HEALTH - 1);
        assert_eq!(arena.player1.health, START_HEALTH);
    }

    #[test]
    fn test_projectiles_expire_in_tick() {
        let settings = MatchSettings {
            max_projectile_age: 3,
            ..Default::default()
        };
        let mut arena = Arena::new(&settings).unwrap();
        arena.fire(Side::Player1, Some(Vector2::X));
        let idle = TickInput::new();
        arena.advance_frame(&idle, SIM_DT);
        arena.advance_frame(&idle, SIM_DT);
        assert_eq!(arena.projectiles.len(), 1);
        arena.advance_frame(&idle, SIM_DT);
        assert!(arena.projectiles.is_empty());
    }

    #[test]
    fn test_match_ends_and_freezes() {
        let mut arena = close_duel();
        arena.player2.health = 1;
        let mut input = TickInput::new();
        input.push(arena.player1.id, Command::fire());
        assert_eq!(
            arena.advance_frame(&input, SIM_DT),
            FrameResult::MatchOver { winner: Side::Player1 }
        );
        assert_eq!(arena.outcome(), MatchOutcome::Player1Won);

        let frame = arena.frame;
        let positions: Vec<_> = arena.projectiles.iter().map(|p| p.position).collect();
        let mut more = TickInput::new();
        more.push(arena.player2.id, Command::fire());
        assert_eq!(
            arena.advance_frame(&more, SIM_DT),
            FrameResult::MatchOver { winner: Side::Player1 }
        );
        assert_eq!(arena.frame, frame);
        let after: Vec<_> = arena.projectiles.iter().map(|p| p.position).collect();
        assert_eq!(positions, after);
    }

    #[test]
    fn test_visual_mode_never_ends() {
        let settings = MatchSettings {
            mode: MatchMode::Visual,
            ..Default::default()
        };
        let mut arena =
            Arena::with_positions(&settings, Vector2::new(200.0, 200.0), Vector2::new(240.0, 200.0))
                .unwrap();
        arena.player2.health = 1;
        let mut input = TickInput::new();
        input.push(arena.player1.id, Command::fire());
        for _ in 0..20 {
            assert_eq!(arena.advance_frame(&input, SIM_DT), FrameResult::Ongoing);
        }
        assert_eq!(arena.player2.health, 1);
        assert_eq!(arena.projectiles.iter().next().unwrap().color, ProjectileColor::Red);
    }

    #[test]
    fn test_frame_and_playtime_counters() {
        let mut arena = Arena::new(&MatchSettings::default()).unwrap();
        for _ in 0..30 {
            arena.advance_frame(&TickInput::default(), SIM_DT);
        }
        assert_eq!(arena.frame, 30);
        assert!((arena.playtime - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_determinism() {
        let mut a = close_duel();
        let mut b = close_duel();
        let mut input = TickInput::new();
        input
            .push(1, Command::Thrust(150.0))
            .push(2, Command::RotateLeft(5.0))
            .push(2, Command::fire());
        for _ in 0..50 {
            a.advance_frame(&input, SIM_DT);
            b.advance_frame(&input, SIM_DT);
        }
        assert_eq!(a.player1.position, b.player1.position);
        assert_eq!(a.player1.health, b.player1.health);
        assert_eq!(a.projectiles.len(), b.projectiles.len());
    }
}
