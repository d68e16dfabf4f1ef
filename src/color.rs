//! Accent color handling
//!
//! The overlay carries its accent color as an opaque hex string: the
//! construction contract only checks that the string is non-empty, and the
//! raw value is forwarded to the host console as a presentation hint. Hosts
//! that want to actually colorize output can run the hint through
//! [`Rgba::parse`], which understands the usual `#RGB`, `#RGBA`, `#RRGGBB`
//! and `#RRGGBBAA` notations. A hint that fails to parse never affects
//! overlay behavior.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Accent color used when the embedder does not supply one.
pub const DEFAULT_ACCENT_COLOR: &str = "#27AE60";

/// Errors from parsing a hex color hint
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
  /// The string does not start with `#`
  #[error("invalid color format: {0}")]
  InvalidFormat(String),

  /// The `#`-prefixed payload is not 3, 4, 6 or 8 hex digits
  #[error("invalid hex color: {0}")]
  InvalidHex(String),
}

/// An RGBA color decoded from a hex hint
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  /// Alpha in [0.0, 1.0]
  pub a: f32,
}

impl Rgba {
  /// Constructs a fully opaque color
  pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b, a: 1.0 }
  }

  /// Parses a `#`-prefixed hex color string
  ///
  /// Accepts `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`; shorthand digits
  /// are doubled (`#2a6` is `#22aa66`).
  pub fn parse(s: &str) -> Result<Self, ColorParseError> {
    let hex = s
      .trim()
      .strip_prefix('#')
      .ok_or_else(|| ColorParseError::InvalidFormat(s.to_string()))?;

    let invalid = || ColorParseError::InvalidHex(s.to_string());
    if !hex.is_ascii() {
      return Err(invalid());
    }
    let wide = |range: std::ops::Range<usize>| {
      u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
    };
    let short = |idx: usize| {
      u8::from_str_radix(&hex[idx..idx + 1].repeat(2), 16).map_err(|_| invalid())
    };

    match hex.len() {
      3 => Ok(Self::opaque(short(0)?, short(1)?, short(2)?)),
      4 => Ok(Self {
        r: short(0)?,
        g: short(1)?,
        b: short(2)?,
        a: short(3)? as f32 / 255.0,
      }),
      6 => Ok(Self::opaque(wide(0..2)?, wide(2..4)?, wide(4..6)?)),
      8 => Ok(Self {
        r: wide(0..2)?,
        g: wide(2..4)?,
        b: wide(4..6)?,
        a: wide(6..8)? as f32 / 255.0,
      }),
      _ => Err(invalid()),
    }
  }
}

impl fmt::Display for Rgba {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
  }
}
