use dial_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::painter::Painter;

/// The trait every clock component implements.
///
/// The static body and the animated hands are separate widgets so a host can
/// cache the former and repaint only the latter on every tick.
pub trait Widget {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic — calling `measure` twice with the same arguments
    /// must return the same result.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Draw this widget into `painter` within the bounds of `rect`.
    ///
    /// `rect` is the space allocated by the host; the clock is laid out as a
    /// centred square inside it.
    fn paint(&self, painter: &mut Painter, rect: Rect);
}
