use dial_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::face::render_face;
use crate::labels::ClockLabels;
use crate::layout::{DEFAULT_INSET_RATIO, clock_frame_in};
use crate::painter::Painter;
use crate::style::ClockStyle;
use crate::widget::Widget;

/// Size a clock asks for when the host gives it unbounded space.
pub const PREFERRED_SIZE: f32 = 300.0;

/// The static part of the clock: disc, rim, ticks and labels.
///
/// # Example
/// ```rust,ignore
/// ClockBody::new(&style, &labels).inset(0.9).paint(&mut painter, rect);
/// ```
pub struct ClockBody<'a> {
    style: &'a ClockStyle,
    labels: &'a ClockLabels,
    inset: f32,
}

impl<'a> ClockBody<'a> {
    pub fn new(style: &'a ClockStyle, labels: &'a ClockLabels) -> Self {
        Self { style, labels, inset: DEFAULT_INSET_RATIO }
    }

    pub fn inset(mut self, v: f32) -> Self { self.inset = v; self }
}

impl Widget for ClockBody<'_> {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(constraints.biggest_or(Vec2::new(PREFERRED_SIZE, PREFERRED_SIZE)))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        render_face(clock_frame_in(rect, self.inset), self.style, self.labels, painter);
    }
}
