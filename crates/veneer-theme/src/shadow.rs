//! Elevation shadow tokens.
//!
//! Shadows are derived entirely from the mode: geometry grows with
//! depth and opacity compensates for the background. Dark themes need
//! heavier shadows because a dark shadow over a dark surface is nearly
//! invisible at light-theme opacities.

use core::fmt;

use veneer_color::Rgba;

use crate::mode::Mode;

/// Per-depth shadow opacity, dark mode.
const DARK_OPACITY: [f32; 3] = [0.45, 0.55, 0.65];
/// Per-depth shadow opacity, light mode.
const LIGHT_OPACITY: [f32; 3] = [0.15, 0.20, 0.25];

/// Closed, ordered set of shadow elevation levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShadowLevel {
    Z1,
    Z2,
    Z3,
}

impl ShadowLevel {
    pub const ALL: [ShadowLevel; 3] = [ShadowLevel::Z1, ShadowLevel::Z2, ShadowLevel::Z3];

    pub const fn index(self) -> usize {
        match self {
            ShadowLevel::Z1 => 0,
            ShadowLevel::Z2 => 1,
            ShadowLevel::Z3 => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShadowLevel::Z1 => "z1",
            ShadowLevel::Z2 => "z2",
            ShadowLevel::Z3 => "z3",
        }
    }

    /// Depth in logical pixels; drives the token geometry.
    const fn depth(self) -> f32 {
        (self.index() as f32) + 1.0
    }
}

/// One resolved shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShadowToken {
    pub name: &'static str,
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    /// Shadow color with the opacity already applied.
    pub color: Rgba,
    pub opacity: f32,
}

impl ShadowToken {
    /// CSS `box-shadow` value for this token.
    pub fn to_css_string(&self) -> String {
        format!(
            "{}px {}px {}px {}px {}",
            self.offset_x, self.offset_y, self.blur, self.spread, self.color
        )
    }
}

impl fmt::Display for ShadowToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string())
    }
}

/// The three shadow tokens of a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Shadows {
    pub z1: ShadowToken,
    pub z2: ShadowToken,
    pub z3: ShadowToken,
}

impl Shadows {
    pub fn get(&self, level: ShadowLevel) -> &ShadowToken {
        match level {
            ShadowLevel::Z1 => &self.z1,
            ShadowLevel::Z2 => &self.z2,
            ShadowLevel::Z3 => &self.z3,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShadowLevel, &ShadowToken)> {
        ShadowLevel::ALL.iter().map(|&level| (level, self.get(level)))
    }
}

/// Derive all shadow tokens for a mode.
///
/// Vertical offset equals the depth, blur is twice the depth, spread
/// stays zero. Color is always black at the mode's opacity for that
/// depth.
pub fn derive_shadows(mode: Mode) -> Shadows {
    let opacities = if mode.is_dark() {
        DARK_OPACITY
    } else {
        LIGHT_OPACITY
    };
    let token = |level: ShadowLevel| {
        let depth = level.depth();
        let opacity = opacities[level.index()];
        ShadowToken {
            name: level.name(),
            offset_x: 0.0,
            offset_y: depth,
            blur: 2.0 * depth,
            spread: 0.0,
            color: Rgba::BLACK.with_opacity(opacity),
            opacity,
        }
    };
    Shadows {
        z1: token(ShadowLevel::Z1),
        z2: token(ShadowLevel::Z2),
        z3: token(ShadowLevel::Z3),
    }
}
