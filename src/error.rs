//! Construction-time errors
//!
//! The per-frame simulation path never fails; everything that can go wrong is
//! rejected when an arena, craft, or settings value is built.

use thiserror::Error;

/// Errors raised while building a match
#[derive(Error, Debug)]
pub enum SimError {
    /// A craft outline needs at least one point
    #[error("craft outline must contain at least one point")]
    EmptyOutline,

    /// Arena bounds must be positive and finite
    #[error("invalid arena bounds {width}x{height}")]
    InvalidBounds {
        /// Requested width
        width: f64,
        /// Requested height
        height: f64,
    },

    /// Friction is a per-frame fraction in [0, 1]
    #[error("friction {0} outside [0, 1]")]
    InvalidFriction(f64),

    /// Combat tuning must be finite and non-negative
    #[error("invalid {name}: {value}")]
    InvalidParameter {
        /// Settings field name
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Outline variant name not in the known set
    #[error("unknown outline variant: {0}")]
    UnknownVariant(String),

    /// Projectile color name not in the known set
    #[error("unknown projectile color: {0}")]
    UnknownColor(String),

    /// Settings JSON could not be parsed
    #[error("invalid match settings: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
