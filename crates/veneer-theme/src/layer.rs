//! Elevation layers derived from the theme background.
//!
//! Layer 0 is the theme background; each higher layer shifts a fixed
//! step toward the mode's derivation pole, so elevation reads as
//! lighter-on-dark and darker-on-light without per-layer seed colors.

use veneer_color::Rgba;

use crate::mode::Mode;

/// Number of elevation layers every theme carries.
pub const LAYER_COUNT: usize = 3;

/// Blend step between adjacent layers.
pub const LAYER_STEP: f32 = 0.03;

/// Blend amount of a layer border relative to that layer's surface.
pub const LAYER_BORDER_SHIFT: f32 = 0.1;

/// One elevation surface and its border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layer {
    pub main: Rgba,
    pub border: Rgba,
}

/// Derive the full layer stack from the background seed.
///
/// Each layer shifts `LAYER_STEP` from the previous one in the mode's
/// direction; each border shifts a further `LAYER_BORDER_SHIFT` from
/// its own surface.
pub fn derive_layers(base: Rgba, mode: Mode) -> [Layer; LAYER_COUNT] {
    let direction = mode.direction();
    let mut main = base;
    core::array::from_fn(|i| {
        if i > 0 {
            main = direction.apply(main, LAYER_STEP);
        }
        Layer {
            main,
            border: direction.apply(main, LAYER_BORDER_SHIFT),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_zero_is_the_base() {
        let base = Rgba::rgb(17, 18, 23);
        let layers = derive_layers(base, Mode::Dark);
        assert_eq!(layers[0].main, base);
    }

    #[test]
    fn dark_layers_get_lighter_with_elevation() {
        let layers = derive_layers(Rgba::rgb(17, 18, 23), Mode::Dark);
        assert!(layers[1].main.luminance() > layers[0].main.luminance());
        assert!(layers[2].main.luminance() > layers[1].main.luminance());
    }

    #[test]
    fn light_layers_get_darker_with_elevation() {
        let layers = derive_layers(Rgba::rgb(244, 245, 245), Mode::Light);
        assert!(layers[1].main.luminance() < layers[0].main.luminance());
        assert!(layers[2].main.luminance() < layers[1].main.luminance());
    }

    #[test]
    fn borders_shift_past_their_surface() {
        for mode in Mode::ALL {
            let base = match mode {
                Mode::Dark => Rgba::rgb(17, 18, 23),
                Mode::Light => Rgba::rgb(244, 245, 245),
            };
            for layer in derive_layers(base, mode) {
                if mode.is_dark() {
                    assert!(layer.border.luminance() > layer.main.luminance());
                } else {
                    assert!(layer.border.luminance() < layer.main.luminance());
                }
            }
        }
    }

    #[test]
    fn derivation_saturates_at_the_gamut_boundary() {
        let layers = derive_layers(Rgba::WHITE, Mode::Dark);
        for layer in layers {
            assert_eq!(layer.main, Rgba::WHITE);
            assert_eq!(layer.border, Rgba::WHITE);
        }
    }
}
