use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::{LineCap, Shadow};

/// Straight stroked segment.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub start: Vec2,
    pub end: Vec2,
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
    pub shadow: Option<Shadow>,
}

impl LineCmd {
    #[inline]
    pub fn new(start: Vec2, end: Vec2, width: f32, color: Color) -> Self {
        Self { start, end, width, color, cap: LineCap::Butt, shadow: None }
    }

    #[inline]
    pub fn cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    #[inline]
    pub fn shadow(mut self, shadow: Option<Shadow>) -> Self {
        self.shadow = shadow;
        self
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

impl DrawList {
    /// Records a stroked line.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, line: LineCmd) {
        self.push(z, DrawCmd::Line(line));
    }
}
