//! Textual color parsing.
//!
//! Supports the authoring formats design tokens are written in: hex
//! (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), `rgb()`/`rgba()` with
//! integer channels, and `hsl()`/`hsla()` with percentage saturation and
//! lightness. Parsing is strict: malformed input surfaces a
//! [`ColorParseError`] so token authoring mistakes are not masked by a
//! fallback color.

use core::fmt;

use crate::rgba::Rgba;

/// Errors while parsing a textual color.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorParseError {
    /// Input was empty or whitespace.
    Empty,
    /// Input matched none of the supported formats.
    UnsupportedFormat,
    /// Hex body had an unsupported digit count.
    HexLength { len: usize },
    /// Hex body contained a non-hex character.
    HexDigit { ch: char },
    /// A functional form (`rgb()`, `hsl()`, ...) was structurally invalid.
    Malformed { what: &'static str },
    /// A component was outside its allowed range.
    OutOfRange { component: &'static str, value: f64 },
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty color string"),
            Self::UnsupportedFormat => write!(f, "unsupported color syntax"),
            Self::HexLength { len } => {
                write!(f, "hex color must have 3, 4, 6 or 8 digits, got {len}")
            }
            Self::HexDigit { ch } => write!(f, "invalid hex digit {ch:?}"),
            Self::Malformed { what } => write!(f, "malformed {what}"),
            Self::OutOfRange { component, value } => {
                write!(f, "{component} component {value} out of range")
            }
        }
    }
}

impl std::error::Error for ColorParseError {}

pub(crate) fn parse(input: &str) -> Result<Rgba, ColorParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ColorParseError::Empty);
    }
    if let Some(body) = input.strip_prefix('#') {
        return parse_hex(body);
    }
    if let Some(args) = function_args(input, "rgba") {
        return parse_rgb(args, true);
    }
    if let Some(args) = function_args(input, "rgb") {
        return parse_rgb(args, false);
    }
    if let Some(args) = function_args(input, "hsla") {
        return parse_hsl(args, true);
    }
    if let Some(args) = function_args(input, "hsl") {
        return parse_hsl(args, false);
    }
    Err(ColorParseError::UnsupportedFormat)
}

/// Strip `name(` ... `)` case-insensitively, returning the argument body.
fn function_args<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    let rest = input
        .get(..name.len())
        .filter(|prefix| prefix.eq_ignore_ascii_case(name))
        .map(|_| &input[name.len()..])?;
    let rest = rest.trim_start();
    rest.strip_prefix('(')?.strip_suffix(')')
}

fn hex_digit(ch: char) -> Result<u8, ColorParseError> {
    ch.to_digit(16)
        .map(|d| d as u8)
        .ok_or(ColorParseError::HexDigit { ch })
}

fn parse_hex(body: &str) -> Result<Rgba, ColorParseError> {
    let digits: Vec<u8> = body.chars().map(hex_digit).collect::<Result<_, _>>()?;
    // Shorthand digits expand by repetition: #abc == #aabbcc.
    let wide = |d: u8| d * 17;
    match digits.as_slice() {
        [r, g, b] => Ok(Rgba::rgb(wide(*r), wide(*g), wide(*b))),
        [r, g, b, a] => Ok(Rgba::rgba(wide(*r), wide(*g), wide(*b), wide(*a))),
        [r1, r0, g1, g0, b1, b0] => {
            Ok(Rgba::rgb(r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0))
        }
        [r1, r0, g1, g0, b1, b0, a1, a0] => Ok(Rgba::rgba(
            r1 * 16 + r0,
            g1 * 16 + g0,
            b1 * 16 + b0,
            a1 * 16 + a0,
        )),
        _ => Err(ColorParseError::HexLength { len: digits.len() }),
    }
}

fn parse_number(text: &str, what: &'static str) -> Result<f64, ColorParseError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ColorParseError::Malformed { what })
}

fn channel_u8(value: f64, component: &'static str) -> Result<u8, ColorParseError> {
    if !(0.0..=255.0).contains(&value) {
        return Err(ColorParseError::OutOfRange { component, value });
    }
    Ok(value.round() as u8)
}

fn alpha_u8(value: f64) -> Result<u8, ColorParseError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ColorParseError::OutOfRange {
            component: "alpha",
            value,
        });
    }
    Ok((value * 255.0).round() as u8)
}

fn parse_rgb(args: &str, with_alpha: bool) -> Result<Rgba, ColorParseError> {
    let parts: Vec<&str> = args.split(',').collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(ColorParseError::Malformed {
            what: "rgb() argument list",
        });
    }
    let r = channel_u8(parse_number(parts[0], "red channel")?, "red")?;
    let g = channel_u8(parse_number(parts[1], "green channel")?, "green")?;
    let b = channel_u8(parse_number(parts[2], "blue channel")?, "blue")?;
    let a = if with_alpha {
        alpha_u8(parse_number(parts[3], "alpha channel")?)?
    } else {
        255
    };
    Ok(Rgba::rgba(r, g, b, a))
}

fn percentage(text: &str, component: &'static str) -> Result<f64, ColorParseError> {
    let body = text
        .trim()
        .strip_suffix('%')
        .ok_or(ColorParseError::Malformed {
            what: "percentage (missing %)",
        })?;
    let value = parse_number(body, "percentage")?;
    if !(0.0..=100.0).contains(&value) {
        return Err(ColorParseError::OutOfRange { component, value });
    }
    Ok(value / 100.0)
}

fn parse_hsl(args: &str, with_alpha: bool) -> Result<Rgba, ColorParseError> {
    let parts: Vec<&str> = args.split(',').collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(ColorParseError::Malformed {
            what: "hsl() argument list",
        });
    }
    let h = parse_number(parts[0], "hue")?;
    // f64 parsing accepts "NaN" and "inf"; a non-finite hue would
    // otherwise propagate through rem_euclid into the chroma math.
    if !h.is_finite() {
        return Err(ColorParseError::OutOfRange {
            component: "hue",
            value: h,
        });
    }
    let h = h.rem_euclid(360.0);
    let s = percentage(parts[1], "saturation")?;
    let l = percentage(parts[2], "lightness")?;
    let a = if with_alpha {
        alpha_u8(parse_number(parts[3], "alpha channel")?)?
    } else {
        255
    };

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = chroma * (1.0 - (hp.rem_euclid(2.0) - 1.0).abs());
    let (r1, g1, b1) = match hp {
        hp if hp < 1.0 => (chroma, x, 0.0),
        hp if hp < 2.0 => (x, chroma, 0.0),
        hp if hp < 3.0 => (0.0, chroma, x),
        hp if hp < 4.0 => (0.0, x, chroma),
        hp if hp < 5.0 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - chroma / 2.0;
    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Ok(Rgba::rgba(to_u8(r1), to_u8(g1), to_u8(b1), a))
}
