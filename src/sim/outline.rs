//! Named craft outlines
//!
//! Each variant resolves once, at craft construction, into a closed point
//! list relative to the craft pivot. Nothing downstream branches on the
//! variant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::craft::Side;
use super::vector::Vector2;
use crate::error::SimError;

/// Selectable craft outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlineVariant {
    #[default]
    Standard,
    Rectangle,
    Diamond,
    SpaceShuttle,
    Dagger,
    Rocket,
    Pacman,
    Arrow,
}

impl OutlineVariant {
    pub const ALL: [OutlineVariant; 8] = [
        OutlineVariant::Standard,
        OutlineVariant::Rectangle,
        OutlineVariant::Diamond,
        OutlineVariant::SpaceShuttle,
        OutlineVariant::Dagger,
        OutlineVariant::Rocket,
        OutlineVariant::Pacman,
        OutlineVariant::Arrow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutlineVariant::Standard => "standard",
            OutlineVariant::Rectangle => "rectangle",
            OutlineVariant::Diamond => "diamond",
            OutlineVariant::SpaceShuttle => "space_shuttle",
            OutlineVariant::Dagger => "dagger",
            OutlineVariant::Rocket => "rocket",
            OutlineVariant::Pacman => "pacman",
            OutlineVariant::Arrow => "arrow",
        }
    }

    /// Outline points facing +x, in drawing order.
    ///
    /// Player 2's standard craft has a longer nose than player 1's.
    pub fn points(&self, side: Side) -> Vec<Vector2> {
        let raw: &[(f64, f64)] = match (self, side) {
            (OutlineVariant::Standard, Side::Player1) => {
                &[(0.0, 0.0), (-25.0, 25.0), (25.0, 0.0), (-25.0, -25.0), (0.0, 0.0)]
            }
            (OutlineVariant::Standard, Side::Player2) => {
                &[(0.0, 0.0), (-25.0, 25.0), (75.0, 0.0), (-25.0, -25.0), (0.0, 0.0)]
            }
            (OutlineVariant::Rectangle, _) => &[
                (-25.0, -25.0),
                (25.0, -25.0),
                (25.0, -10.0),
                (0.0, 0.0),
                (25.0, 10.0),
                (25.0, 25.0),
                (-25.0, 25.0),
                (-25.0, -25.0),
            ],
            (OutlineVariant::Diamond, _) => &[
                (-5.0, -15.0),
                (-5.0, 15.0),
                (0.0, 25.0),
                (25.0, 0.0),
                (0.0, -25.0),
                (-5.0, -15.0),
            ],
            (OutlineVariant::SpaceShuttle, _) => &[
                (-25.0, -25.0),
                (-25.0, 25.0),
                (25.0, 10.0),
                (25.0, -10.0),
                (-25.0, -25.0),
            ],
            (OutlineVariant::Dagger, _) => &[
                (-25.0, -5.0),
                (-25.0, 5.0),
                (-5.0, 5.0),
                (0.0, 15.0),
                (5.0, 5.0),
                (25.0, 0.0),
                (5.0, -5.0),
                (0.0, -15.0),
                (-5.0, -5.0),
                (-25.0, -5.0),
            ],
            (OutlineVariant::Rocket, _) => &[
                (-25.0, -5.0),
                (-25.0, 5.0),
                (-15.0, 5.0),
                (-15.0, 15.0),
                (-5.0, 15.0),
                (5.0, 5.0),
                (15.0, 5.0),
                (25.0, 0.0),
                (15.0, -5.0),
                (5.0, -5.0),
                (-5.0, -15.0),
                (-15.0, -15.0),
                (-15.0, -5.0),
                (-25.0, -5.0),
            ],
            (OutlineVariant::Pacman, _) => &[
                (-25.0, -15.0),
                (-25.0, 15.0),
                (-15.0, 25.0),
                (15.0, 25.0),
                (25.0, 15.0),
                (25.0, 10.0),
                (5.0, 0.0),
                (25.0, -10.0),
                (25.0, -15.0),
                (15.0, -25.0),
                (-15.0, -25.0),
                (-25.0, -15.0),
            ],
            (OutlineVariant::Arrow, _) => &[
                (5.0, -5.0),
                (-25.0, -5.0),
                (-5.0, 0.0),
                (-25.0, 5.0),
                (5.0, 5.0),
                (25.0, 0.0),
                (5.0, -5.0),
            ],
        };
        raw.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
    }
}

impl fmt::Display for OutlineVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutlineVariant {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace([' ', '-'], "_");
        OutlineVariant::ALL
            .into_iter()
            .find(|v| v.as_str() == name)
            .ok_or_else(|| SimError::UnknownVariant(s.to_string()))
    }
}
