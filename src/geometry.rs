//! Viewport geometry for the overlay readout
//!
//! The overlay only ever reports whole CSS pixels: hosts hand back the
//! integer `innerWidth`/`innerHeight` pair a browser window exposes, and the
//! readout renders it as `"<width> / <height>"`.

use serde::Serialize;
use std::fmt;

/// A viewport size in whole CSS pixels
///
/// # Examples
///
/// ```
/// use devoverlay::Size;
///
/// let viewport = Size::new(1280, 720);
///
/// assert_eq!(viewport.width, 1280);
/// assert_eq!(viewport.height, 720);
/// assert_eq!(viewport.to_string(), "1280 / 720");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
  /// Horizontal extent in CSS pixels
  pub width: u32,
  /// Vertical extent in CSS pixels
  pub height: u32,
}

impl Size {
  /// The empty size (0, 0)
  pub const ZERO: Self = Self {
    width: 0,
    height: 0,
  };

  /// Creates a new size from a width/height pair
  ///
  /// # Examples
  ///
  /// ```
  /// use devoverlay::Size;
  ///
  /// let size = Size::new(800, 600);
  /// assert_eq!(size, Size { width: 800, height: 600 });
  /// ```
  pub const fn new(width: u32, height: u32) -> Self {
    Self { width, height }
  }

  /// True when either dimension is zero
  pub const fn is_empty(self) -> bool {
    self.width == 0 || self.height == 0
  }
}

impl fmt::Display for Size {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} / {}", self.width, self.height)
  }
}
