#![forbid(unsafe_code)]

//! Host color tokens.

use serde::{Deserialize, Serialize};

/// A color token the display host understands.
///
/// The host exposes a fixed palette; applications reference entries by name
/// in the render tree and [`CarColor::from_token`] resolves them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarColor {
    Blue,
    Green,
    Primary,
    Red,
    Secondary,
    Yellow,
    #[default]
    Default,
}

impl CarColor {
    /// Resolve a color token string to a host color.
    ///
    /// Unrecognized tokens (including the literal `"default"`) resolve to
    /// [`CarColor::Default`]; this lookup never fails.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "blue" => Self::Blue,
            "green" => Self::Green,
            "primary" => Self::Primary,
            "red" => Self::Red,
            "secondary" => Self::Secondary,
            "yellow" => Self::Yellow,
            _ => Self::Default,
        }
    }

    /// Stable token name for logging and serialized output.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Primary => "primary",
            Self::Red => "red",
            Self::Secondary => "secondary",
            Self::Yellow => "yellow",
            Self::Default => "default",
        }
    }
}
