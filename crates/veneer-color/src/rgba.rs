//! Packed sRGB + alpha color value.
//!
//! [`Rgba`] stores four 8-bit channels in a single `u32` (`0xRRGGBBAA`).
//! It is `Copy` and immutable; every operation returns a new value.
//! Out-of-range blend amounts are clamped, never rejected, so the
//! derivation functions built on top of this type are total.

use core::fmt;
use core::str::FromStr;

use crate::contrast;
use crate::parse::{self, ColorParseError};

/// An sRGB color with alpha, packed as `0xRRGGBBAA`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba(u32);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    /// Build a color from four 8-bit channels.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Build an opaque color from three 8-bit channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Parse a color from its textual authoring form.
    ///
    /// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(...)`,
    /// `rgba(...)`, `hsl(...)`, and `hsla(...)`. Malformed input is an
    /// error; it is never coerced to a default color.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        parse::parse(input)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// The raw `0xRRGGBBAA` representation.
    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Replace the alpha channel only.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0xFFFF_FF00) | alpha as u32)
    }

    /// Replace the alpha channel with a floating opacity in `[0, 1]`.
    ///
    /// Out-of-range opacities are clamped.
    pub fn with_opacity(self, opacity: f32) -> Self {
        self.with_alpha(clamp_channel(opacity.clamp(0.0, 1.0) * 255.0))
    }

    /// Linear blend toward `other` by `t` (clamped to `[0, 1]`),
    /// including the alpha channel.
    pub fn mix(self, other: Rgba, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        Self::rgba(
            clamp_channel(self.r() as f32 * inv + other.r() as f32 * t),
            clamp_channel(self.g() as f32 * inv + other.g() as f32 * t),
            clamp_channel(self.b() as f32 * inv + other.b() as f32 * t),
            clamp_channel(self.a() as f32 * inv + other.a() as f32 * t),
        )
    }

    /// Blend toward white by `amount` (clamped), preserving alpha.
    pub fn lighten(self, amount: f32) -> Self {
        let alpha = self.a();
        self.mix(Self::WHITE, amount).with_alpha(alpha)
    }

    /// Blend toward black by `amount` (clamped), preserving alpha.
    pub fn darken(self, amount: f32) -> Self {
        let alpha = self.a();
        self.mix(Self::BLACK, amount).with_alpha(alpha)
    }

    /// Source-over composite of `self` on top of `base`.
    pub fn over(self, base: Rgba) -> Self {
        let sa = self.a() as f32 / 255.0;
        let ba = base.a() as f32 / 255.0;
        let out_a = sa + ba * (1.0 - sa);
        if out_a <= f32::EPSILON {
            return Self::TRANSPARENT;
        }
        let channel = |s: u8, b: u8| {
            clamp_channel((s as f32 * sa + b as f32 * ba * (1.0 - sa)) / out_a)
        };
        Self::rgba(
            channel(self.r(), base.r()),
            channel(self.g(), base.g()),
            channel(self.b(), base.b()),
            clamp_channel(out_a * 255.0),
        )
    }

    /// WCAG relative luminance of the color, in `[0, 1]`.
    ///
    /// Alpha is ignored; the color is treated as composited.
    pub fn luminance(self) -> f64 {
        contrast::relative_luminance(self)
    }

    /// WCAG contrast ratio against `other`, in `[1, 21]`.
    pub fn contrast_ratio(self, other: Rgba) -> f64 {
        contrast::contrast_ratio(self, other)
    }
}

fn clamp_channel(value: f32) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a() == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r(),
                self.g(),
                self.b(),
                self.a()
            )
        }
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgba({self})")
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct RgbaVisitor;

        impl serde::de::Visitor<'_> for RgbaVisitor {
            type Value = Rgba;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a CSS color string")
            }

            fn visit_str<E>(self, value: &str) -> Result<Rgba, E>
            where
                E: serde::de::Error,
            {
                Rgba::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(RgbaVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_channels_round_trip() {
        let color = Rgba::rgba(12, 34, 56, 78);
        assert_eq!(color.r(), 12);
        assert_eq!(color.g(), 34);
        assert_eq!(color.b(), 56);
        assert_eq!(color.a(), 78);
    }

    #[test]
    fn rgb_defaults_to_opaque() {
        assert_eq!(Rgba::rgb(1, 2, 3).a(), 255);
    }

    #[test]
    fn with_alpha_preserves_rgb() {
        let color = Rgba::rgb(10, 20, 30).with_alpha(99);
        assert_eq!(color, Rgba::rgba(10, 20, 30, 99));
    }

    #[test]
    fn with_opacity_clamps() {
        assert_eq!(Rgba::BLACK.with_opacity(2.0).a(), 255);
        assert_eq!(Rgba::BLACK.with_opacity(-1.0).a(), 0);
        assert_eq!(Rgba::BLACK.with_opacity(0.5).a(), 128);
    }

    #[test]
    fn mix_endpoints() {
        let a = Rgba::rgb(0, 0, 0);
        let b = Rgba::rgb(200, 100, 50);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 0.5), Rgba::rgb(100, 50, 25));
    }

    #[test]
    fn lighten_and_darken_clamp_amount() {
        let base = Rgba::rgb(100, 100, 100);
        assert_eq!(base.lighten(5.0), Rgba::WHITE);
        assert_eq!(base.darken(5.0), Rgba::BLACK);
        assert_eq!(base.lighten(-1.0), base);
        assert_eq!(base.darken(-1.0), base);
    }

    #[test]
    fn lighten_preserves_alpha() {
        let base = Rgba::rgba(100, 100, 100, 40);
        assert_eq!(base.lighten(0.5).a(), 40);
        assert_eq!(base.darken(0.5).a(), 40);
    }

    #[test]
    fn boundary_colors_are_fixed_points() {
        assert_eq!(Rgba::WHITE.lighten(0.08), Rgba::WHITE);
        assert_eq!(Rgba::BLACK.darken(0.08), Rgba::BLACK);
    }

    #[test]
    fn over_opaque_top_wins() {
        let top = Rgba::rgb(10, 20, 30);
        let base = Rgba::rgb(200, 200, 200);
        assert_eq!(top.over(base), top);
    }

    #[test]
    fn over_half_alpha_blends() {
        let top = Rgba::rgba(255, 0, 0, 128);
        let base = Rgba::rgb(0, 0, 255);
        let out = top.over(base);
        assert_eq!(out.a(), 255);
        assert!(out.r() > 100 && out.b() > 100);
    }

    #[test]
    fn over_transparent_top_is_base() {
        let base = Rgba::rgb(9, 9, 9);
        assert_eq!(Rgba::TRANSPARENT.over(base), base);
    }

    #[test]
    fn display_opaque_and_alpha_forms() {
        assert_eq!(Rgba::rgb(0x38, 0x71, 0xDC).to_string(), "#3871dc");
        assert_eq!(Rgba::rgba(0x38, 0x71, 0xDC, 0x80).to_string(), "#3871dc80");
    }
}
