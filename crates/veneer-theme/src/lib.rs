#![forbid(unsafe_code)]

//! Theme token model for Veneer.
//!
//! # Role in Veneer
//! This crate turns a small set of seed colors plus a [`Mode`] into a
//! complete, immutable [`Theme`]: elevation layers, text colors, rich
//! semantic colors, a shape scale, and shadow tokens. Rendering layers
//! only read tokens off a built theme; they never derive colors
//! themselves.
//!
//! # Derivation model
//! All derivation happens eagerly in [`Theme`] construction and goes
//! through a single [`Direction`] selected once from the mode, so the
//! light/dark contract is auditable in one place. Contrast guarantees
//! (white-or-black contrast text, iterative text adjustment) are
//! enforced at build time; failures to meet the text contrast target
//! are non-fatal and surface as [`LowContrastWarning`] diagnostics via
//! `tracing` and [`Theme::warnings`].
//!
//! # Sharing
//! A built theme is never mutated, so it can be shared freely across
//! threads. [`registry`] offers cached per-mode built-ins and an
//! explicit process-wide current theme published by a single atomic
//! store.

pub mod layer;
pub mod mode;
pub mod palette;
pub mod registry;
pub mod shadow;
pub mod shape;
pub mod theme;

pub use layer::{LAYER_COUNT, Layer};
pub use mode::{Direction, HOVER_SHIFT, Mode, hover_color};
pub use palette::{LowContrastWarning, PaletteColor, RichColorKey, RichColors, TextColors};
pub use registry::{ScopedThemeLock, current_theme, set_current_mode, set_current_theme, theme};
pub use shadow::{ShadowLevel, ShadowToken, Shadows};
pub use shape::Shape;
pub use theme::{Theme, ThemeBuildError, ThemeBuilder};

pub use veneer_color::{ColorParseError, Rgba};
