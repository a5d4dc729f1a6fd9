//! WCAG contrast utilities.
//!
//! Relative luminance and contrast ratios follow the WCAG 2.x
//! definitions: channels are linearized, weighted, and the ratio is
//! `(L1 + 0.05) / (L2 + 0.05)` with `L1 >= L2`.

use crate::rgba::Rgba;

/// Minimum ratio for normal body text (WCAG AA).
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;
/// Minimum ratio for large text and UI components (WCAG AA).
pub const WCAG_AA_LARGE_TEXT: f64 = 3.0;
/// Minimum ratio for normal body text (WCAG AAA).
pub const WCAG_AAA_NORMAL_TEXT: f64 = 7.0;
/// Minimum ratio for large text (WCAG AAA).
pub const WCAG_AAA_LARGE_TEXT: f64 = 4.5;

pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance, in `[0, 1]`. Alpha is ignored.
pub fn relative_luminance(color: Rgba) -> f64 {
    let r = srgb_to_linear(color.r() as f64 / 255.0);
    let g = srgb_to_linear(color.g() as f64 / 255.0);
    let b = srgb_to_linear(color.b() as f64 / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG contrast ratio between two colors, in `[1, 21]`. Symmetric.
pub fn contrast_ratio(a: Rgba, b: Rgba) -> f64 {
    let lum_a = relative_luminance(a);
    let lum_b = relative_luminance(b);
    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);
    (lighter + 0.05) / (darker + 0.05)
}

pub fn meets_wcag_aa(fg: Rgba, bg: Rgba) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AA_NORMAL_TEXT
}

/// Pick the candidate with the highest contrast against `bg`.
///
/// Earlier candidates win ties, so a preferred fallback should be
/// listed first.
///
/// # Panics
///
/// Panics if `candidates` is empty.
pub fn best_text_color(bg: Rgba, candidates: &[Rgba]) -> Rgba {
    debug_assert!(!candidates.is_empty(), "candidate list must be non-empty");
    let mut best = candidates[0];
    let mut best_ratio = contrast_ratio(best, bg);
    for &candidate in candidates.iter().skip(1) {
        let ratio = contrast_ratio(candidate, bg);
        if ratio > best_ratio {
            best = candidate;
            best_ratio = ratio;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_of_black_and_white() {
        assert!(relative_luminance(Rgba::BLACK) < 0.01);
        assert!(relative_luminance(Rgba::WHITE) > 0.99);
    }

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(Rgba::BLACK, Rgba::WHITE);
        assert!((ratio - 21.0).abs() < 0.01);
    }

    #[test]
    fn ratio_is_symmetric() {
        let a = Rgba::rgb(0x38, 0x71, 0xDC);
        let b = Rgba::rgb(0xF4, 0xF5, 0xF5);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn same_color_ratio_is_one() {
        let c = Rgba::rgb(40, 90, 160);
        assert!((contrast_ratio(c, c) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn best_text_color_picks_highest_ratio() {
        let bg = Rgba::rgb(10, 10, 10);
        let best = best_text_color(bg, &[Rgba::BLACK, Rgba::rgb(90, 90, 90), Rgba::WHITE]);
        assert_eq!(best, Rgba::WHITE);
    }

    #[test]
    fn best_text_color_first_wins_ties() {
        let bg = Rgba::rgb(200, 200, 200);
        let best = best_text_color(bg, &[Rgba::rgb(1, 2, 3), Rgba::rgb(1, 2, 3)]);
        assert_eq!(best, Rgba::rgb(1, 2, 3));
    }
}
