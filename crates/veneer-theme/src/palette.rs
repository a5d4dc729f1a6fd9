//! Palette colors and the rich-color registry.
//!
//! A [`PaletteColor`] is a named group of four related colors derived
//! from one seed: the seed itself (`main`), a mode-shifted `border`, a
//! `text` variant adjusted to a minimum contrast against the surface it
//! is composed on, and a white-or-black `contrast_text` for content
//! rendered on top of `main`. [`RichColors`] holds the closed set of
//! semantic palette colors; keys are a fixed enumeration, never dynamic
//! strings.

use core::fmt;

use veneer_color::{Rgba, contrast};

use crate::mode::{Direction, Mode};

/// Contrast target for palette `text` variants (UI text, WCAG AA large).
pub const TEXT_CONTRAST_TARGET: f64 = contrast::WCAG_AA_LARGE_TEXT;
/// Blend step of the iterative contrast search.
pub const CONTRAST_STEP: f32 = 0.05;
/// Iteration budget of the contrast search.
pub const CONTRAST_MAX_STEPS: u32 = 10;

/// Border shift away from the seed, per mode.
const BORDER_SHIFT_DARK: f32 = 0.25;
const BORDER_SHIFT_LIGHT: f32 = 0.2;

/// Non-fatal diagnostic: the contrast search exhausted its budget.
///
/// The best candidate is still used so rendering proceeds; the warning
/// is recorded on the built theme and logged for token authors to fix
/// the seed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LowContrastWarning {
    /// Token path the search ran for, e.g. `"primary.text"`.
    pub token: String,
    /// Ratio the best candidate achieved.
    pub achieved: f64,
    /// Ratio the search was asked for.
    pub target: f64,
}

impl fmt::Display for LowContrastWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} reached contrast {:.2}, target {:.2}",
            self.token, self.achieved, self.target
        )
    }
}

/// Outcome of the iterative contrast search.
pub(crate) struct ContrastSearch {
    pub color: Rgba,
    pub achieved: f64,
    pub met: bool,
}

/// Move `start` toward the direction's gamut pole in fixed steps until
/// it reaches `target` contrast against `bg`, keeping the best
/// candidate seen if the budget runs out.
///
/// Candidate `i` blends the original start by `i * CONTRAST_STEP`
/// (linear from the start, not compounding).
pub(crate) fn adjust_for_contrast(
    start: Rgba,
    bg: Rgba,
    direction: Direction,
    target: f64,
) -> ContrastSearch {
    let current = contrast::contrast_ratio(start, bg);
    if current >= target {
        return ContrastSearch {
            color: start,
            achieved: current,
            met: true,
        };
    }
    let pole = direction.pole();
    let mut best = start;
    let mut best_ratio = current;
    for step in 1..=CONTRAST_MAX_STEPS {
        let candidate = start.mix(pole, step as f32 * CONTRAST_STEP);
        let ratio = contrast::contrast_ratio(candidate, bg);
        if ratio > best_ratio {
            best = candidate;
            best_ratio = ratio;
        }
        if ratio >= target {
            return ContrastSearch {
                color: candidate,
                achieved: ratio,
                met: true,
            };
        }
    }
    ContrastSearch {
        color: best,
        achieved: best_ratio,
        met: false,
    }
}

/// White or black, whichever contrasts more with `main`; ties go to black.
pub(crate) fn contrast_text_for(main: Rgba) -> Rgba {
    if contrast::contrast_ratio(Rgba::BLACK, main) >= contrast::contrast_ratio(Rgba::WHITE, main) {
        Rgba::BLACK
    } else {
        Rgba::WHITE
    }
}

/// A named semantic color group derived from a single seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PaletteColor {
    pub name: &'static str,
    /// The seed color itself.
    pub main: Rgba,
    /// Mode-shifted variant that stays visible against the mode's layers.
    pub border: Rgba,
    /// Border variant adjusted to the UI text contrast target.
    pub text: Rgba,
    /// White or black, whichever reads better on `main`.
    pub contrast_text: Rgba,
}

impl PaletteColor {
    /// Derive the group from a seed. `surface` is the layer the `text`
    /// variant is composed on. A failed contrast search is pushed to
    /// `warnings` and logged; the best candidate is still used.
    pub(crate) fn derive(
        key: RichColorKey,
        seed: Rgba,
        mode: Mode,
        surface: Rgba,
        warnings: &mut Vec<LowContrastWarning>,
    ) -> Self {
        let direction = mode.direction();
        let border_shift = if mode.is_dark() {
            BORDER_SHIFT_DARK
        } else {
            BORDER_SHIFT_LIGHT
        };
        let border = direction.apply(seed, border_shift);
        let search = adjust_for_contrast(border, surface, direction, TEXT_CONTRAST_TARGET);
        if !search.met {
            let warning = LowContrastWarning {
                token: format!("{}.text", key.name()),
                achieved: search.achieved,
                target: TEXT_CONTRAST_TARGET,
            };
            tracing::warn!(
                token = %warning.token,
                achieved = warning.achieved,
                target = warning.target,
                "palette text failed to reach its contrast target"
            );
            warnings.push(warning);
        }
        Self {
            name: key.name(),
            main: seed,
            border,
            text: search.color,
            contrast_text: contrast_text_for(seed),
        }
    }
}

/// Closed, ordered key set of the rich semantic colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RichColorKey {
    Primary,
    Secondary,
    Success,
    Error,
    Warning,
    Info,
}

impl RichColorKey {
    pub const ALL: [RichColorKey; 6] = [
        RichColorKey::Primary,
        RichColorKey::Secondary,
        RichColorKey::Success,
        RichColorKey::Error,
        RichColorKey::Warning,
        RichColorKey::Info,
    ];

    pub const fn index(self) -> usize {
        match self {
            RichColorKey::Primary => 0,
            RichColorKey::Secondary => 1,
            RichColorKey::Success => 2,
            RichColorKey::Error => 3,
            RichColorKey::Warning => 4,
            RichColorKey::Info => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RichColorKey::Primary => "primary",
            RichColorKey::Secondary => "secondary",
            RichColorKey::Success => "success",
            RichColorKey::Error => "error",
            RichColorKey::Warning => "warning",
            RichColorKey::Info => "info",
        }
    }
}

/// The rich semantic palette colors, one per [`RichColorKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RichColors {
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub success: PaletteColor,
    pub error: PaletteColor,
    pub warning: PaletteColor,
    pub info: PaletteColor,
}

impl RichColors {
    /// Total lookup; the key set is closed.
    pub fn get(&self, key: RichColorKey) -> &PaletteColor {
        match key {
            RichColorKey::Primary => &self.primary,
            RichColorKey::Secondary => &self.secondary,
            RichColorKey::Error => &self.error,
            RichColorKey::Success => &self.success,
            RichColorKey::Warning => &self.warning,
            RichColorKey::Info => &self.info,
        }
    }

    /// Exhaustive iteration in key order.
    pub fn iter(&self) -> impl Iterator<Item = (RichColorKey, &PaletteColor)> {
        RichColorKey::ALL.iter().map(|&key| (key, self.get(key)))
    }
}

/// The theme-level text color hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextColors {
    pub primary: Rgba,
    pub secondary: Rgba,
    /// Deliberately low-contrast; exempt from the contrast floor.
    pub disabled: Rgba,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_order_matches_index() {
        for (position, key) in RichColorKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), position);
        }
    }

    #[test]
    fn contrast_text_is_black_on_light_and_white_on_dark() {
        assert_eq!(contrast_text_for(Rgba::rgb(250, 240, 200)), Rgba::BLACK);
        assert_eq!(contrast_text_for(Rgba::rgb(20, 20, 40)), Rgba::WHITE);
    }

    #[test]
    fn contrast_text_prefers_black_at_the_midpoint() {
        // Scan grays around the crossover; whichever is chosen must be at
        // least as good as the alternative, and ties must resolve to black.
        for v in 100u8..140 {
            let main = Rgba::rgb(v, v, v);
            let chosen = contrast_text_for(main);
            let black = Rgba::BLACK.contrast_ratio(main);
            let white = Rgba::WHITE.contrast_ratio(main);
            if chosen == Rgba::BLACK {
                assert!(black >= white);
            } else {
                assert!(white > black);
            }
        }
    }

    #[test]
    fn adjust_returns_immediately_when_target_met() {
        let bg = Rgba::rgb(17, 18, 23);
        let start = Rgba::rgb(220, 220, 220);
        let search = adjust_for_contrast(start, bg, Direction::Lighten, 3.0);
        assert!(search.met);
        assert_eq!(search.color, start);
    }

    #[test]
    fn adjust_walks_toward_the_pole() {
        let bg = Rgba::rgb(17, 18, 23);
        let start = Rgba::rgb(60, 60, 70);
        let search = adjust_for_contrast(start, bg, Direction::Lighten, 3.0);
        assert!(search.met);
        assert!(search.color.luminance() > start.luminance());
        assert!(search.achieved >= 3.0);
    }

    #[test]
    fn adjust_reports_failure_on_unreachable_target() {
        // Max contrast against mid-gray is below 3:1 in the darken
        // direction, so the budget must run out.
        let bg = Rgba::rgb(0x55, 0x55, 0x55);
        let start = Rgba::rgb(0x44, 0x44, 0x44);
        let search = adjust_for_contrast(start, bg, Direction::Darken, 3.0);
        assert!(!search.met);
        assert!(search.achieved < 3.0);
        // Best candidate is still the darkest one tried.
        assert!(search.color.luminance() < start.luminance());
    }

    #[test]
    fn derive_produces_distinct_border_in_mode_direction() {
        let seed = Rgba::rgb(0x38, 0x71, 0xDC);
        let surface = Rgba::rgb(24, 25, 30);
        let mut warnings = Vec::new();
        let dark =
            PaletteColor::derive(RichColorKey::Primary, seed, Mode::Dark, surface, &mut warnings);
        assert!(dark.border.luminance() > dark.main.luminance());
        assert_eq!(dark.border, seed.lighten(0.25));

        let light_surface = Rgba::rgb(237, 238, 238);
        let light = PaletteColor::derive(
            RichColorKey::Primary,
            seed,
            Mode::Light,
            light_surface,
            &mut warnings,
        );
        assert!(light.border.luminance() < light.main.luminance());
        assert_eq!(light.border, seed.darken(0.2));
        assert!(warnings.is_empty());
    }
}
