//! End-to-end match scenarios against the public API

use vector_duel::MatchSettings;
use vector_duel::consts::{BARREL_LENGTH, SIM_DT, START_HEALTH};
use vector_duel::sim::{
    Arena, Bounds, Command, CombatResolver, Craft, FrameResult, MatchOutcome, OutlineVariant,
    ProjectileColor, ProjectilePool, Side, TickInput, Vector2, VectorExt, aim_vector,
};

fn craft(id: u32, side: Side, x: f64, y: f64) -> Craft {
    Craft::from_variant(id, OutlineVariant::Standard, side, Vector2::new(x, y), 0.5).unwrap()
}

#[test]
fn test_owner_immune_single_resolve() {
    let mut a = craft(1, Side::Player1, 0.0, 0.0);
    let mut b = craft(2, Side::Player2, 100.0, 0.0);
    let mut pool = ProjectilePool::default();
    pool.spawn(Vector2::new(10.0, 0.0), Vector2::ZERO, b.id, ProjectileColor::Blue);

    let mut resolver = CombatResolver::new(60.0, false);
    resolver.resolve(&mut a, &mut b, &mut pool);

    assert_eq!(a.health, 999);
    assert_eq!(b.health, 1000);
}

#[test]
fn test_lingering_projectile_wins_for_player2() {
    let mut a = craft(1, Side::Player1, 0.0, 0.0);
    let mut b = craft(2, Side::Player2, 100.0, 0.0);
    let mut pool = ProjectilePool::default();
    pool.spawn(Vector2::new(10.0, 0.0), Vector2::ZERO, b.id, ProjectileColor::Blue);

    let mut resolver = CombatResolver::new(60.0, false);
    for call in 1..=1000 {
        let outcome = resolver.resolve(&mut a, &mut b, &mut pool);
        if call < 1000 {
            assert_eq!(outcome, MatchOutcome::Ongoing, "ended early on call {call}");
        } else {
            assert_eq!(outcome, MatchOutcome::Player2Won);
        }
    }
    assert_eq!(a.health, 0);
    assert_eq!(b.health, 1000);
}

#[test]
fn test_full_friction_moves_once() {
    let bounds = Bounds::new(1000.0, 1000.0).unwrap();
    let mut c = Craft::new(1, vec![Vector2::ZERO], Vector2::new(100.0, 100.0), 1.0).unwrap();
    c.velocity = Vector2::new(10.0, 0.0);

    c.integrate(1.0, &bounds);
    assert!((c.position.x - 110.0).abs() < 1e-9);
    assert_eq!(c.velocity, Vector2::ZERO);

    for _ in 0..5 {
        c.integrate(1.0, &bounds);
    }
    assert!((c.position.x - 110.0).abs() < 1e-9);
}

#[test]
fn test_aim_vector_is_barrel_length() {
    let a = craft(1, Side::Player1, 0.0, 0.0);
    let b = craft(2, Side::Player2, 100.0, 0.0);
    let aim = aim_vector(&a, &b, BARREL_LENGTH);
    assert!((aim.length() - 35.0).abs() < 1e-9);
    assert!(aim.normalized().distance(Vector2::new(1.0, 0.0)) < 1e-9);
}

#[test]
fn test_both_destroyed_same_frame_player2_wins() {
    let settings = MatchSettings::default();
    let mut arena =
        Arena::with_positions(&settings, Vector2::new(300.0, 300.0), Vector2::new(320.0, 300.0))
            .unwrap();
    arena.player1.health = 1;
    arena.player2.health = 1;

    let mut input = TickInput::new();
    input
        .push(arena.player1.id, Command::fire())
        .push(arena.player2.id, Command::fire());
    let result = arena.advance_frame(&input, SIM_DT);

    assert_eq!(result, FrameResult::MatchOver { winner: Side::Player2 });
    assert!(arena.player1.health <= 0 && arena.player2.health <= 0);
}

#[test]
fn test_repeated_fire_decides_match() {
    let settings = MatchSettings::default();
    let mut arena =
        Arena::with_positions(&settings, Vector2::new(300.0, 300.0), Vector2::new(400.0, 300.0))
            .unwrap();
    let mut input = TickInput::new();
    input.push(arena.player1.id, Command::fire());

    let mut result = FrameResult::Ongoing;
    for _ in 0..2000 {
        result = arena.advance_frame(&input, SIM_DT);
        if result != FrameResult::Ongoing {
            break;
        }
    }
    assert_eq!(result, FrameResult::MatchOver { winner: Side::Player1 });
    assert_eq!(arena.player1.health, START_HEALTH);
    assert!(arena.player2.is_destroyed());

    let snapshot = arena.snapshot();
    assert_eq!(snapshot.outcome, MatchOutcome::Player1Won);
    assert_eq!(snapshot.crafts[1].health, arena.player2.health);
}

#[test]
fn test_independent_arenas_share_nothing() {
    let settings = MatchSettings::default();
    let mut preview = Arena::new(&settings).unwrap();
    let live = Arena::new(&settings).unwrap();

    preview.fire(Side::Player1, None);
    preview.fire(Side::Player2, None);

    assert_eq!(preview.projectiles.len(), 2);
    assert!(live.projectiles.is_empty());
}

#[test]
fn test_settings_json_into_arena() {
    let settings = MatchSettings::from_json(
        r#"{
            "arena_width": 640,
            "arena_height": 400,
            "single_hit_projectiles": true,
            "player1": { "variant": "dagger", "color": "yellow" },
            "player2": { "variant": "arrow", "color": "purple" }
        }"#,
    )
    .unwrap();
    let arena = Arena::new(&settings).unwrap();
    assert_eq!(arena.bounds.width, 640.0);
    assert_eq!(arena.player2.position, Vector2::new(540.0, 300.0));
    assert!(arena.resolver.single_hit_projectiles);
    assert_eq!(arena.colors, [ProjectileColor::Yellow, ProjectileColor::Purple]);
}

#[test]
fn test_single_hit_from_settings_removes_shot() {
    let settings = MatchSettings::from_json(r#"{ "single_hit_projectiles": true }"#).unwrap();
    let mut arena =
        Arena::with_positions(&settings, Vector2::new(300.0, 300.0), Vector2::new(340.0, 300.0))
            .unwrap();

    let mut input = TickInput::new();
    input.push(arena.player1.id, Command::fire());
    assert_eq!(arena.advance_frame(&input, SIM_DT), FrameResult::Ongoing);
    assert_eq!(arena.player2.health, START_HEALTH - 1);
    assert!(arena.projectiles.is_empty());

    let idle = TickInput::new();
    arena.advance_frame(&idle, SIM_DT);
    assert_eq!(arena.player2.health, START_HEALTH - 1);
}

#[test]
fn test_lingering_shot_without_single_hit() {
    let settings = MatchSettings::default();
    let mut arena =
        Arena::with_positions(&settings, Vector2::new(300.0, 300.0), Vector2::new(340.0, 300.0))
            .unwrap();

    let mut input = TickInput::new();
    input.push(arena.player1.id, Command::fire());
    arena.advance_frame(&input, SIM_DT);

    let idle = TickInput::new();
    arena.advance_frame(&idle, SIM_DT);
    assert_eq!(arena.projectiles.len(), 1);
    assert_eq!(arena.player2.health, START_HEALTH - 2);
}
