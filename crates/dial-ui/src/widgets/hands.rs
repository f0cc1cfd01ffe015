use dial_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::hand::render_hands;
use crate::layout::{DEFAULT_INSET_RATIO, clock_frame_in};
use crate::painter::Painter;
use crate::style::ClockStyle;
use crate::time_of_day::TimeOfDay;
use crate::widget::Widget;

use super::body::PREFERRED_SIZE;

/// The animated part of the clock: hour, minute and second hands plus pivot.
///
/// Lays out exactly like [`ClockBody`](super::body::ClockBody) so the two can
/// be stacked in the same rect.
pub struct ClockHands<'a> {
    time: TimeOfDay,
    style: &'a ClockStyle,
    inset: f32,
}

impl<'a> ClockHands<'a> {
    pub fn new(time: TimeOfDay, style: &'a ClockStyle) -> Self {
        Self { time, style, inset: DEFAULT_INSET_RATIO }
    }

    pub fn inset(mut self, v: f32) -> Self { self.inset = v; self }
}

impl Widget for ClockHands<'_> {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(constraints.biggest_or(Vec2::new(PREFERRED_SIZE, PREFERRED_SIZE)))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        render_hands(self.time, clock_frame_in(rect, self.inset), self.style, painter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dial_engine::scene::{DrawCmd, DrawList, ZIndex};

    use crate::labels::ClockLabels;
    use crate::widgets::body::ClockBody;

    #[test]
    fn unbounded_measure_uses_preferred_size() {
        let style = ClockStyle::default();
        let hands = ClockHands::new(TimeOfDay::midnight(), &style);
        let size = hands.measure(Constraints::loose(Vec2::new(f32::INFINITY, f32::INFINITY)));
        assert_eq!(size, Vec2::new(PREFERRED_SIZE, PREFERRED_SIZE));
    }

    #[test]
    fn body_and_hands_share_a_center() {
        let style = ClockStyle::default();
        let labels = ClockLabels::arabic();
        let rect = Rect::new(10.0, 10.0, 400.0, 300.0);

        let mut list = DrawList::new();
        {
            let mut face = Painter::new(&mut list, ZIndex::FACE);
            ClockBody::new(&style, &labels).paint(&mut face, rect);
        }
        {
            let mut hands = Painter::new(&mut list, ZIndex::HANDS);
            ClockHands::new(TimeOfDay::new(1, 2, 3), &style).paint(&mut hands, rect);
        }

        let disc_center = match &list.items()[0].cmd {
            DrawCmd::FillEllipse(e) => e.rect.center(),
            other => panic!("unexpected {other:?}"),
        };
        let hand_start = list
            .commands()
            .filter_map(|c| match c {
                DrawCmd::Line(l) if l.width == 2.0 => Some(l.start),
                _ => None,
            })
            .next();
        assert_eq!(disc_center, Vec2::new(210.0, 160.0));
        assert_eq!(hand_start, Some(disc_center));
    }
}
