pub(crate) mod ellipse;
pub(crate) mod line;
pub(crate) mod text;

pub use ellipse::{FillEllipseCmd, StrokeEllipseCmd};
pub use line::LineCmd;
pub use text::TextCmd;

use crate::coords::Vec2;
use crate::paint::Color;

/// Stroke drawn along the outline of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Drop shadow applied beneath a shape or run of text.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shadow {
    pub color: Color,
    /// Blur radius in logical pixels.
    pub radius: f32,
    pub offset: Vec2,
}

impl Shadow {
    #[inline]
    pub const fn new(color: Color, radius: f32, offset: Vec2) -> Self {
        Self { color, radius, offset }
    }
}

/// Stroke end style for open lines.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}
