//! Vector Duel headless runner
//!
//! Plays a scripted match (both craft chase and shoot each other) and
//! reports the winner. Usage: `vector-duel [settings.json] [seed]`

use std::process::ExitCode;

use vector_duel::consts::SIM_DT;
use vector_duel::sim::{Arena, Command, Craft, CraftCommand, FrameResult, TickInput, VectorExt};
use vector_duel::{MatchSettings, wrap_degrees};

/// Give up after this many frames (ten minutes at 30 fps)
const MAX_FRAMES: u64 = 30 * 60 * 10;
/// Frames between shots for each autopilot
const FIRE_INTERVAL: u64 = 3;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Vector Duel (headless) starting...");

    let mut args = std::env::args().skip(1);
    let mut settings = match args.next() {
        Some(path) => match load_settings(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Could not load {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => MatchSettings::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    settings.randomize_loadouts(seed);

    let mut arena = match Arena::new(&settings) {
        Ok(arena) => arena,
        Err(e) => {
            log::error!("Could not build arena: {}", e);
            return ExitCode::FAILURE;
        }
    };

    while arena.frame < MAX_FRAMES {
        let mut input = TickInput::new();
        input
            .extend(autopilot(&arena.player1, &arena.player2, arena.frame))
            .extend(autopilot(&arena.player2, &arena.player1, arena.frame));

        if let FrameResult::MatchOver { winner } = arena.advance_frame(&input, SIM_DT) {
            println!(
                "{:?} has won the game! (frame {}, {:.1}s, health {} / {})",
                winner, arena.frame, arena.playtime, arena.player1.health, arena.player2.health
            );
            return ExitCode::SUCCESS;
        }
    }

    println!(
        "No winner after {} frames (health {} / {})",
        arena.frame, arena.player1.health, arena.player2.health
    );
    ExitCode::SUCCESS
}

fn load_settings(path: &str) -> Result<MatchSettings, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(MatchSettings::from_json(&json)?)
}

/// Turn toward the opponent, thrust when roughly facing it, fire periodically
fn autopilot(me: &Craft, opponent: &Craft, frame: u64) -> Vec<CraftCommand> {
    let mut input = TickInput::new();
    let desired = (opponent.position - me.position).angle_degrees();
    let delta = wrap_degrees(desired - me.facing_degrees);

    if delta < -5.0 {
        input.push(me.id, Command::RotateLeft(5.0));
    } else if delta > 5.0 {
        input.push(me.id, Command::RotateRight(5.0));
    }
    if delta.abs() < 30.0 && me.position.distance(opponent.position) > 40.0 {
        input.push(me.id, Command::Thrust(150.0));
    }
    if frame % FIRE_INTERVAL == 0 {
        input.push(me.id, Command::fire());
    }
    input.commands
}
