//! Theme construction: seeds in, a complete token set out.
//!
//! All derivation happens here, eagerly, at build time. A built
//! [`Theme`] is plain data; readers never trigger derivation and never
//! observe a partially-derived theme.

use core::fmt;

use veneer_color::{ColorParseError, Rgba, contrast};

use crate::layer::{LAYER_COUNT, Layer, derive_layers};
use crate::mode::{Mode, hover_color};
use crate::palette::{
    LowContrastWarning, PaletteColor, RichColorKey, RichColors, TextColors, adjust_for_contrast,
};
use crate::shadow::{Shadows, derive_shadows};
use crate::shape::Shape;

/// Contrast floor for theme-level body text (WCAG AA normal text).
const THEME_TEXT_TARGET: f64 = contrast::WCAG_AA_NORMAL_TEXT;

/// Seed colors a theme is derived from. Everything else is computed.
struct Seeds {
    background: Rgba,
    text_primary: Rgba,
    text_secondary: Rgba,
    text_disabled: Rgba,
    rich: [Rgba; 6],
}

/// Built-in dark seeds.
const DARK_SEEDS: Seeds = Seeds {
    background: Rgba::rgb(0x11, 0x12, 0x17),
    text_primary: Rgba::rgb(0xCC, 0xCC, 0xDC),
    text_secondary: Rgba::rgb(0x8E, 0x8E, 0x9A),
    text_disabled: Rgba::rgb(0x5A, 0x5C, 0x66),
    rich: [
        Rgba::rgb(0x38, 0x71, 0xDC), // primary
        Rgba::rgb(0x55, 0x63, 0x6F), // secondary
        Rgba::rgb(0x1A, 0x7F, 0x4B), // success
        Rgba::rgb(0xD1, 0x0E, 0x5C), // error
        Rgba::rgb(0xF5, 0xB7, 0x3D), // warning
        Rgba::rgb(0x2D, 0x9C, 0xDB), // info
    ],
};

/// Built-in light seeds.
const LIGHT_SEEDS: Seeds = Seeds {
    background: Rgba::rgb(0xF4, 0xF5, 0xF5),
    text_primary: Rgba::rgb(0x24, 0x29, 0x2E),
    text_secondary: Rgba::rgb(0x5A, 0x5F, 0x66),
    text_disabled: Rgba::rgb(0xA4, 0xAB, 0xB3),
    rich: [
        Rgba::rgb(0x38, 0x71, 0xDC),
        Rgba::rgb(0x64, 0x6B, 0x73),
        Rgba::rgb(0x0A, 0x76, 0x4E),
        Rgba::rgb(0xCF, 0x0E, 0x5B),
        Rgba::rgb(0xB5, 0x51, 0x0D),
        Rgba::rgb(0x1C, 0x7F, 0xBF),
    ],
};

const fn builtin_seeds(mode: Mode) -> &'static Seeds {
    match mode {
        Mode::Dark => &DARK_SEEDS,
        Mode::Light => &LIGHT_SEEDS,
    }
}

/// A complete, immutable set of design tokens for one mode.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Theme {
    pub mode: Mode,
    /// Elevation surfaces; index 0 is the theme background.
    pub layers: [Layer; LAYER_COUNT],
    pub text: TextColors,
    pub rich: RichColors,
    pub shape: Shape,
    pub shadows: Shadows,
    warnings: Vec<LowContrastWarning>,
}

impl Theme {
    /// Build the built-in theme for `mode`.
    pub fn new(mode: Mode) -> Self {
        Self::from_seeds(mode, builtin_seeds(mode), Shape::default())
    }

    /// Start a builder over the built-in seeds for `mode`.
    pub fn builder(mode: Mode) -> ThemeBuilder {
        ThemeBuilder::new(mode)
    }

    fn from_seeds(mode: Mode, seeds: &Seeds, shape: Shape) -> Self {
        let mut warnings = Vec::new();
        let direction = mode.direction();
        let layers = derive_layers(seeds.background, mode);
        let surface = layers[0].main;

        // Body text must clear AA normal-text contrast against the
        // background. Disabled text is deliberately muted and exempt.
        let mut text_token = |seed: Rgba, token: &'static str| {
            let search = adjust_for_contrast(seed, surface, direction, THEME_TEXT_TARGET);
            if !search.met {
                let warning = LowContrastWarning {
                    token: token.to_owned(),
                    achieved: search.achieved,
                    target: THEME_TEXT_TARGET,
                };
                tracing::warn!(
                    token = %warning.token,
                    achieved = warning.achieved,
                    target = warning.target,
                    "theme text failed to reach its contrast target"
                );
                warnings.push(warning);
            }
            search.color
        };
        let text = TextColors {
            primary: text_token(seeds.text_primary, "text.primary"),
            secondary: text_token(seeds.text_secondary, "text.secondary"),
            disabled: seeds.text_disabled,
        };

        // Rich text variants are checked against the first elevated
        // layer, the surface most components sit on.
        let rich_surface = layers[1].main;
        let derive =
            |key: RichColorKey, warnings: &mut Vec<LowContrastWarning>| -> PaletteColor {
                PaletteColor::derive(key, seeds.rich[key.index()], mode, rich_surface, warnings)
            };
        let rich = RichColors {
            primary: derive(RichColorKey::Primary, &mut warnings),
            secondary: derive(RichColorKey::Secondary, &mut warnings),
            success: derive(RichColorKey::Success, &mut warnings),
            error: derive(RichColorKey::Error, &mut warnings),
            warning: derive(RichColorKey::Warning, &mut warnings),
            info: derive(RichColorKey::Info, &mut warnings),
        };

        Self {
            mode,
            layers,
            text,
            rich,
            shape,
            shadows: derive_shadows(mode),
            warnings,
        }
    }

    /// Contrast diagnostics collected while deriving this theme. Empty
    /// for the built-in seed sets.
    pub fn warnings(&self) -> &[LowContrastWarning] {
        &self.warnings
    }

    /// Hover variant of `base` under this theme's mode.
    pub fn hover_color(&self, base: Rgba) -> Rgba {
        hover_color(base, self.mode)
    }
}

/// A seed color that failed to parse.
#[derive(Debug)]
pub struct ThemeBuildError {
    /// Token path of the offending seed, e.g. `"rich.primary"`.
    pub token: &'static str,
    pub source: ColorParseError,
}

impl fmt::Display for ThemeBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid seed color for {}: {}", self.token, self.source)
    }
}

impl std::error::Error for ThemeBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Builds a [`Theme`] from textual seed overrides.
///
/// Unset seeds fall back to the built-in table for the mode. Overrides
/// accept any form [`Rgba::parse`] does; parsing happens in [`build`],
/// so setters never fail.
///
/// [`build`]: ThemeBuilder::build
#[derive(Debug, Clone, Default)]
pub struct ThemeBuilder {
    mode: Option<Mode>,
    background: Option<String>,
    text_primary: Option<String>,
    text_secondary: Option<String>,
    text_disabled: Option<String>,
    rich: [Option<String>; 6],
    base_radius: Option<f32>,
}

impl ThemeBuilder {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode: Some(mode),
            ..Self::default()
        }
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn text_primary(mut self, color: impl Into<String>) -> Self {
        self.text_primary = Some(color.into());
        self
    }

    pub fn text_secondary(mut self, color: impl Into<String>) -> Self {
        self.text_secondary = Some(color.into());
        self
    }

    pub fn text_disabled(mut self, color: impl Into<String>) -> Self {
        self.text_disabled = Some(color.into());
        self
    }

    /// Override the seed for one rich color.
    pub fn rich(mut self, key: RichColorKey, color: impl Into<String>) -> Self {
        self.rich[key.index()] = Some(color.into());
        self
    }

    pub fn primary(self, color: impl Into<String>) -> Self {
        self.rich(RichColorKey::Primary, color)
    }

    pub fn secondary(self, color: impl Into<String>) -> Self {
        self.rich(RichColorKey::Secondary, color)
    }

    pub fn success(self, color: impl Into<String>) -> Self {
        self.rich(RichColorKey::Success, color)
    }

    pub fn error(self, color: impl Into<String>) -> Self {
        self.rich(RichColorKey::Error, color)
    }

    pub fn warning(self, color: impl Into<String>) -> Self {
        self.rich(RichColorKey::Warning, color)
    }

    pub fn info(self, color: impl Into<String>) -> Self {
        self.rich(RichColorKey::Info, color)
    }

    pub fn base_radius(mut self, radius: f32) -> Self {
        self.base_radius = Some(radius);
        self
    }

    /// Parse the overrides and derive the theme.
    ///
    /// Fails only on unparseable seed strings; contrast shortfalls are
    /// reported through [`Theme::warnings`], not as errors.
    pub fn build(self) -> Result<Theme, ThemeBuildError> {
        let mode = self.mode.unwrap_or(Mode::Dark);
        let defaults = builtin_seeds(mode);

        fn resolve(
            raw: &Option<String>,
            fallback: Rgba,
            token: &'static str,
        ) -> Result<Rgba, ThemeBuildError> {
            match raw {
                Some(text) => Rgba::parse(text).map_err(|source| ThemeBuildError { token, source }),
                None => Ok(fallback),
            }
        }

        const RICH_TOKENS: [&str; 6] = [
            "rich.primary",
            "rich.secondary",
            "rich.success",
            "rich.error",
            "rich.warning",
            "rich.info",
        ];
        let mut rich = defaults.rich;
        for key in RichColorKey::ALL {
            let i = key.index();
            rich[i] = resolve(&self.rich[i], defaults.rich[i], RICH_TOKENS[i])?;
        }

        let seeds = Seeds {
            background: resolve(&self.background, defaults.background, "background")?,
            text_primary: resolve(&self.text_primary, defaults.text_primary, "text.primary")?,
            text_secondary: resolve(
                &self.text_secondary,
                defaults.text_secondary,
                "text.secondary",
            )?,
            text_disabled: resolve(
                &self.text_disabled,
                defaults.text_disabled,
                "text.disabled",
            )?,
            rich,
        };
        let shape = match self.base_radius {
            Some(radius) => Shape::new(radius.max(0.0)),
            None => Shape::default(),
        };
        Ok(Theme::from_seeds(mode, &seeds, shape))
    }
}
