//! Simulation module
//!
//! All gameplay logic lives here. This module is pure and synchronous:
//! - One `tick` per rendered frame, dt supplied by the caller
//! - No I/O, no timers, no rendering or platform dependencies
//! - Everything owned by a single `Arena`

pub mod aim;
pub mod combat;
pub mod craft;
pub mod outline;
pub mod projectile;
pub mod state;
pub mod tick;
pub mod vector;

pub use aim::{BarrelLine, FireSolution, aim_between, aim_vector, barrel_line, fire_along, fire_solution};
pub use combat::{CombatResolver, MatchOutcome, decide_outcome};
pub use craft::{Craft, FrictionModel, Side};
pub use outline::OutlineVariant;
pub use projectile::{Projectile, ProjectileColor, ProjectilePool};
pub use state::{Arena, Bounds, CraftView, FrameSnapshot, ProjectileView};
pub use tick::{Command, CraftCommand, FrameResult, TickInput, tick};
pub use vector::{Vector2, VectorExt};
