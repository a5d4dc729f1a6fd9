//! Theme mode and the single derivation direction it selects.
//!
//! Every mode-dependent derivation (borders, text adjustment, hover
//! states, layer elevation) goes through [`Direction`], computed once
//! from [`Mode`]: dark themes elevate by lightening, light themes by
//! darkening. Keeping the branch here makes the light/dark contract
//! auditable in one place instead of scattering `if dark` pairs through
//! every derivation.

use veneer_color::Rgba;

/// Theme mode, the sole external input to theme construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Light, Mode::Dark];

    pub const fn index(self) -> usize {
        match self {
            Mode::Light => 0,
            Mode::Dark => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Mode::Dark)
    }

    /// The derivation direction for this mode.
    pub const fn direction(self) -> Direction {
        match self {
            Mode::Light => Direction::Darken,
            Mode::Dark => Direction::Lighten,
        }
    }
}

/// The one blend operation a mode derives with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Lighten,
    Darken,
}

impl Direction {
    /// Apply the selected operation. Amounts are clamped to `[0, 1]`.
    pub fn apply(self, color: Rgba, amount: f32) -> Rgba {
        match self {
            Direction::Lighten => color.lighten(amount),
            Direction::Darken => color.darken(amount),
        }
    }

    pub const fn invert(self) -> Direction {
        match self {
            Direction::Lighten => Direction::Darken,
            Direction::Darken => Direction::Lighten,
        }
    }

    /// The gamut boundary this direction converges to.
    pub const fn pole(self) -> Rgba {
        match self {
            Direction::Lighten => Rgba::WHITE,
            Direction::Darken => Rgba::BLACK,
        }
    }
}

/// Blend amount applied to interactive hover states.
pub const HOVER_SHIFT: f32 = 0.08;

/// Hover variant of `base` for the given mode.
///
/// Total: already-extreme inputs clamp at the gamut boundary instead of
/// erroring, so white stays white in dark mode and black stays black in
/// light mode.
pub fn hover_color(base: Rgba, mode: Mode) -> Rgba {
    mode.direction().apply(base, HOVER_SHIFT)
}
