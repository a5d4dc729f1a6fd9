#![forbid(unsafe_code)]

//! Color primitive for the Veneer token engine.
//!
//! # Role in Veneer
//! `veneer-color` is the shared vocabulary for color values. The theme
//! layer derives every token (layers, text, rich colors, shadows) from
//! [`Rgba`] values using the operations in this crate, so the derivation
//! rules stay deterministic and free of rendering concerns.
//!
//! # This crate provides
//! - [`Rgba`]: an immutable packed sRGB + alpha value with blend,
//!   lighten/darken, and compositing operations.
//! - [`Rgba::parse`] for the textual authoring formats (`#hex`,
//!   `rgb()`/`rgba()`, `hsl()`/`hsla()`), failing with
//!   [`ColorParseError`] on malformed input.
//! - [`contrast`]: WCAG relative luminance and contrast-ratio utilities.
//!
//! All transforms return new values; nothing here is mutated in place.

/// WCAG contrast utilities and thresholds.
pub mod contrast;
mod parse;
mod rgba;

pub use parse::ColorParseError;
pub use rgba::Rgba;
