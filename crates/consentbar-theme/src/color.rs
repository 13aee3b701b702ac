// SPDX-License-Identifier: Apache-2.0
//! Color grammar and alpha derivation.
//!
//! Three input grammars are recognized:
//!
//! | Grammar | Example | Alpha variant |
//! |---------|---------|---------------|
//! | `#RRGGBB` | `#FAEBD7` | `rgba(250, 235, 215, 0.6)` |
//! | `rgb(r, g, b)` | `rgb(1, 1, 1)` | `rgba(1, 1, 1, 0.8)` (inner text kept verbatim) |
//! | `rgba(r, g, b, a)` | `rgba(16, 16, 16, 0.5)` | `rgba(16, 16, 16, 0.10)` (existing alpha scaled) |
//!
//! Anything else (keywords, `hsl(...)`, `#RGB` shorthand) is not a color for
//! derivation purposes and yields `None`.

/// Opaque 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xRRGGBB` integer.
    #[must_use]
    pub const fn from_packed(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xFF) as u8,
            g: ((v >> 8) & 0xFF) as u8,
            b: (v & 0xFF) as u8,
        }
    }
}

/// A color string recognized by one of the derivation grammars.
///
/// The `rgb` and `rgba` forms borrow from the input so the alpha variant can
/// be spliced without reformatting the channel text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue<'a> {
    Hex(Rgb),
    Rgb {
        /// Text between the parentheses.
        inner: &'a str,
    },
    Rgba {
        /// Everything up to and including the last comma.
        head: &'a str,
        /// Whitespace that preceded the alpha field.
        pad: &'a str,
        alpha: f64,
    },
}

impl<'a> ColorValue<'a> {
    /// Parse a color string; surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(value: &'a str) -> Option<Self> {
        let trimmed = value.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).map(Self::Hex);
        }

        if let Some(inner) = function_args(trimmed, "rgba") {
            let (head_inner, alpha_field) = inner.rsplit_once(',')?;
            let channels: Vec<&str> = head_inner.split(',').collect();
            if channels.len() != 3 || !channels.iter().all(|c| is_channel(c)) {
                return None;
            }
            let alpha_text = alpha_field.trim();
            let alpha: f64 = alpha_text.parse().ok()?;
            if !alpha.is_finite() {
                return None;
            }
            // "rgba(" + channels + ","
            let head_len = "rgba(".len() + head_inner.len() + 1;
            let pad_len = alpha_field.len() - alpha_field.trim_start().len();
            return Some(Self::Rgba {
                head: &trimmed[..head_len],
                pad: &alpha_field[..pad_len],
                alpha,
            });
        }

        if let Some(inner) = function_args(trimmed, "rgb") {
            let channels: Vec<&str> = inner.split(',').collect();
            if channels.len() != 3 || !channels.iter().all(|c| is_channel(c)) {
                return None;
            }
            return Some(Self::Rgb { inner });
        }

        None
    }

    /// Produce the same color with its alpha channel set (or scaled) by `factor`.
    #[must_use]
    pub fn with_alpha(&self, factor: f64) -> String {
        match *self {
            Self::Hex(Rgb { r, g, b }) => format!("rgba({r}, {g}, {b}, {factor})"),
            Self::Rgb { inner } => format!("rgba({inner}, {factor})"),
            Self::Rgba { head, pad, alpha } => {
                format!("{head}{pad}{})", format_alpha(alpha * factor))
            }
        }
    }
}

/// Derive a translucent variant of `color`.
///
/// `factor` is printed as given for hex and `rgb` inputs. For `rgba` inputs
/// the existing alpha is multiplied by `factor` and printed with two
/// decimals, so repeated derivation compounds. Returns `None` for any other
/// grammar.
#[must_use]
pub fn derive_alpha_variant(color: &str, factor: f64) -> Option<String> {
    ColorValue::parse(color).map(|c| c.with_alpha(factor))
}

/// Format an alpha value with exactly two decimals.
///
/// The stored binary value is rounded once, so `0.35 * 0.5`
/// (`0.17499999999999998`) prints `0.17`. Exact ties round away from zero.
#[must_use]
pub fn format_alpha(alpha: f64) -> String {
    let scaled = alpha * 100.0;
    // Exact ties at the second decimal are multiples of 1/8; `* 8.0` is exact.
    let value = if (alpha * 8.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        scaled.round() / 100.0
    } else {
        alpha
    };
    let text = format!("{value:.2}");
    if text == "-0.00" {
        "0.00".to_string()
    } else {
        text
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().map(Rgb::from_packed)
}

/// `name(` ... `)` with the arguments returned, matched case-insensitively.
fn function_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    let open = name.len();
    if value.len() < open + 2 || !value.is_char_boundary(open) {
        return None;
    }
    let (prefix, rest) = value.split_at(open);
    if !prefix.eq_ignore_ascii_case(name) {
        return None;
    }
    rest.strip_prefix('(')?.strip_suffix(')')
}

fn is_channel(text: &str) -> bool {
    text.trim().parse::<u8>().is_ok()
}
