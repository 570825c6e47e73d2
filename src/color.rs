//! Color primitives and the brand palette.

use serde::{Deserialize, Serialize};

/// An 8-bit RGBA color.
///
/// The all-zero value doubles as the "transparent"/no-fill sentinel, the same
/// convention the configuration tables use for backgrounds that should not be
/// painted at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent sentinel (no fill).
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Whether this is the no-fill sentinel.
    pub fn is_transparent(self) -> bool {
        self == Self::TRANSPARENT
    }

    /// CSS `rgba(...)` form used by the vector renderer.
    pub fn css(self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a as f32 / 255.0)
    }

    /// Channel-wise linear interpolation, `t` in `0.0..=1.0`.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

/// Background or shape fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fill {
    Solid(Color),
    /// Horizontal gradient, left edge `start` to right edge `end`.
    LinearGradient { start: Color, end: Color },
}

// Brand palette
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);
/// #02FFCF
pub const GREEN: Color = Color::rgb(2, 255, 207);
/// #D4AF37, the intrinsic color of the master logo artwork
pub const GOLD: Color = Color::rgb(212, 175, 55);

/// Stops for the gradient banner background.
pub const GRADIENT_START: Color = Color::rgb(0, 50, 0);
pub const GRADIENT_END: Color = Color::rgb(0, 200, 100);
