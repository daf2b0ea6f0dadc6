//! Minimal 2-D paint model shared by the motion field and its canvas backends.
//!
//! Colors render to CSS strings so the web frontend can hand them straight to
//! `CanvasRenderingContext2d`; host tests inspect the structured values.

use glam::Vec2;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// Hue in degrees, saturation and lightness in percent.
    Hsla { h: f32, s: f32, l: f32, a: f32 },
}

impl Paint {
    pub const TRANSPARENT: Paint = Paint::Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    #[inline]
    pub fn is_finite(&self) -> bool {
        match *self {
            Paint::Rgba { a, .. } => a.is_finite(),
            Paint::Hsla { h, s, l, a } => {
                h.is_finite() && s.is_finite() && l.is_finite() && a.is_finite()
            }
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Paint::Rgba { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
            Paint::Hsla { h, s, l, a } => write!(f, "hsla({}, {}%, {}%, {})", h, s, l, a),
        }
    }
}

/// Axis-aligned rectangle in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn centered_square(center: Vec2, half_extent: f32) -> Self {
        Self {
            x: center.x - half_extent,
            y: center.y - half_extent,
            width: half_extent * 2.0,
            height: half_extent * 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub paint: Paint,
}

/// Radial gradient from a zero-radius center out to `radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: [ColorStop; 3],
}

/// Drawing primitives the motion field needs from a raster surface.
pub trait FieldCanvas {
    fn fill_rect(&mut self, rect: Rect, paint: Paint);
    fn fill_rect_with_gradient(&mut self, rect: Rect, gradient: &GlowGradient);
}
