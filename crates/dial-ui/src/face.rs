//! Static clock face: disc, rim, tick marks, hour labels.
//!
//! Nothing here depends on the time of day, so the result can be recorded
//! once and replayed until the frame or the style changes.

use core::f32::consts::{FRAC_PI_2, TAU};

use dial_engine::coords::{Rect, Vec2};
use dial_engine::paint::Color;
use dial_engine::scene::shapes::LineCmd;
use dial_engine::scene::Shadow;

use crate::labels::{ClockLabels, LABEL_COUNT};
use crate::painter::Painter;
use crate::style::ClockStyle;

pub const TICK_COUNT: usize = 60;
/// Ticks at multiples of this index are hour ticks.
pub const HOUR_TICK_EVERY: usize = 5;

/// Tick ring outer radius as a fraction of the frame radius.
pub const TICK_OUTER_FRACTION: f32 = 0.95;
/// Minute tick length as a fraction of the tick ring radius. Hour ticks are twice as long.
pub const TICK_LENGTH_FRACTION: f32 = 0.05;
pub const TICK_WIDTH: f32 = 1.0;

/// Label circle radius as a fraction of the frame radius.
pub const LABEL_RADIUS_FRACTION: f32 = 0.70;
/// Label font size is the frame side divided by this.
pub const LABEL_FONT_DIVISOR: f32 = 10.0;

pub const BORDER_WIDTH: f32 = 2.0;

/// Shadow under the hour labels: half-transparent black, 1pt blur, 1pt down.
pub const LABEL_SHADOW: Shadow =
    Shadow::new(Color::from_premul(0.0, 0.0, 0.0, 0.5), 1.0, Vec2::new(0.0, 1.0));

/// One radial tick segment, running from `start` (inner) to `end` (outer).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickMark {
    pub index: usize,
    pub start: Vec2,
    pub end: Vec2,
    pub is_hour: bool,
}

/// Where one hour label is drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LabelPlacement {
    pub index: usize,
    /// Centre of the label text.
    pub anchor: Vec2,
    pub font_size: f32,
}

/// Angle of position `i` out of `count`, 0 at 12 o'clock, clockwise positive.
#[inline]
fn dial_angle(i: usize, count: usize) -> f32 {
    i as f32 * TAU / count as f32 - FRAC_PI_2
}

/// The 60 tick marks for `frame`, every fifth one an hour tick.
pub fn tick_marks(frame: Rect) -> [TickMark; TICK_COUNT] {
    let center = frame.center();
    let outer = frame.min_side() / 2.0 * TICK_OUTER_FRACTION;
    let length = outer * TICK_LENGTH_FRACTION;

    std::array::from_fn(|index| {
        let dir = Vec2::from_angle(dial_angle(index, TICK_COUNT));
        let is_hour = index % HOUR_TICK_EVERY == 0;
        let inner = if is_hour { outer - 2.0 * length } else { outer - length };
        TickMark {
            index,
            start: center + dir * inner,
            end: center + dir * outer,
            is_hour,
        }
    })
}

/// Label anchors on the 0.70 circle.
///
/// The anchor is the text centre; no correction is made for the text's
/// extent, so multi-character labels ("10", "11", "12") sit visibly closer to
/// their ticks than single-character ones.
pub fn label_placements(frame: Rect) -> [LabelPlacement; LABEL_COUNT] {
    let center = frame.center();
    let side = frame.min_side();
    let radius = side / 2.0 * LABEL_RADIUS_FRACTION;
    let font_size = side / LABEL_FONT_DIVISOR;

    std::array::from_fn(|index| LabelPlacement {
        index,
        anchor: center + Vec2::from_angle(dial_angle(index, LABEL_COUNT)) * radius,
        font_size,
    })
}

/// Paints the full static face: disc, rim, ticks, then labels.
///
/// Pure in its inputs: the same frame, style and labels always record the same
/// commands.
pub fn render_face(frame: Rect, style: &ClockStyle, labels: &ClockLabels, painter: &mut Painter) {
    painter.fill_ellipse(frame, style.background().clone());
    painter.stroke_ellipse(frame, BORDER_WIDTH, style.border());

    for tick in tick_marks(frame) {
        let color = if tick.is_hour { style.tick_primary() } else { style.tick_secondary() };
        painter.line(LineCmd::new(tick.start, tick.end, TICK_WIDTH, color));
    }

    let shadow = style.use_label_shadow().then_some(LABEL_SHADOW);
    for (placement, text) in label_placements(frame).iter().zip(labels.iter()) {
        painter.text(text, placement.font_size, style.label_color(), placement.anchor, shadow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dial_engine::scene::{DrawCmd, DrawList, ZIndex};

    use crate::style::StyleDraft;

    fn frame() -> Rect {
        Rect::new(80.0, 30.0, 240.0, 240.0)
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    fn record(style: &ClockStyle, labels: &ClockLabels) -> DrawList {
        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list, ZIndex::FACE);
        render_face(frame(), style, labels, &mut painter);
        list
    }

    // ── ticks ─────────────────────────────────────────────────────────────

    #[test]
    fn sixty_ticks_twelve_hour_marks() {
        let ticks = tick_marks(frame());
        assert_eq!(ticks.len(), 60);
        let hours: Vec<_> = ticks.iter().filter(|t| t.is_hour).map(|t| t.index).collect();
        assert_eq!(hours, (0..60).step_by(5).collect::<Vec<_>>());
    }

    #[test]
    fn tick_zero_points_up() {
        let t = tick_marks(frame())[0];
        // outer = 120 × 0.95 = 114, length = 5.7, hour tick inner = 102.6.
        assert!(approx(t.end, Vec2::new(200.0, 150.0 - 114.0)));
        assert!(approx(t.start, Vec2::new(200.0, 150.0 - 102.6)));
    }

    #[test]
    fn tick_fifteen_points_right() {
        let t = tick_marks(frame())[15];
        assert!(t.is_hour);
        assert!(approx(t.end, Vec2::new(314.0, 150.0)));
    }

    #[test]
    fn hour_ticks_are_twice_as_long() {
        let ticks = tick_marks(frame());
        let minute = ticks[1].start.distance(ticks[1].end);
        let hour = ticks[5].start.distance(ticks[5].end);
        assert!((minute - 5.7).abs() < 1e-3);
        assert!((hour - 2.0 * minute).abs() < 1e-3);
    }

    #[test]
    fn ticks_stay_inside_frame() {
        let f = frame();
        for t in tick_marks(f) {
            assert!(f.contains(t.start) && f.contains(t.end), "tick {} escapes", t.index);
        }
    }

    // ── labels ────────────────────────────────────────────────────────────

    #[test]
    fn label_anchors_on_seventy_percent_circle() {
        let f = frame();
        let placements = label_placements(f);
        for p in placements {
            assert!((p.anchor.distance(f.center()) - 84.0).abs() < 1e-3);
            assert_eq!(p.font_size, 24.0);
        }
        assert!(approx(placements[0].anchor, Vec2::new(200.0, 66.0)));
        assert!(approx(placements[3].anchor, Vec2::new(284.0, 150.0)));
        assert!(approx(placements[6].anchor, Vec2::new(200.0, 234.0)));
        assert!(approx(placements[9].anchor, Vec2::new(116.0, 150.0)));
    }

    // ── render_face ───────────────────────────────────────────────────────

    #[test]
    fn command_sequence_shape() {
        let list = record(&ClockStyle::default(), &ClockLabels::arabic());
        let kinds: Vec<_> = list.commands().map(DrawCmd::kind).collect();
        assert_eq!(kinds.len(), 2 + 60 + 12);
        assert_eq!(kinds[0], "fill-ellipse");
        assert_eq!(kinds[1], "stroke-ellipse");
        assert!(kinds[2..62].iter().all(|k| *k == "line"));
        assert!(kinds[62..].iter().all(|k| *k == "text"));
    }

    #[test]
    fn border_is_two_wide() {
        let style = ClockStyle::default();
        let list = record(&style, &ClockLabels::arabic());
        match &list.items()[1].cmd {
            DrawCmd::StrokeEllipse(s) => {
                assert_eq!(s.rect, frame());
                assert_eq!(s.border.width, BORDER_WIDTH);
                assert_eq!(s.border.color, style.border());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn tick_tones_follow_hour_marks() {
        let style = ClockStyle::default();
        let list = record(&style, &ClockLabels::arabic());
        for (i, item) in list.items()[2..62].iter().enumerate() {
            let DrawCmd::Line(line) = &item.cmd else { panic!("tick {i} is not a line") };
            let expected = if i % 5 == 0 { style.tick_primary() } else { style.tick_secondary() };
            assert_eq!(line.color, expected, "tick {i}");
        }
    }

    #[test]
    fn labels_in_clockwise_order_with_shadow() {
        let list = record(&ClockStyle::default(), &ClockLabels::roman());
        let texts: Vec<_> = list
            .commands()
            .filter_map(|c| match c {
                DrawCmd::Text(t) => Some((t.text.as_str(), t.shadow)),
                _ => None,
            })
            .collect();
        assert_eq!(texts[0], ("XII", Some(LABEL_SHADOW)));
        assert_eq!(texts[11].0, "XI");
    }

    #[test]
    fn label_shadow_can_be_disabled() {
        let style = StyleDraft::default().label_shadow(false).preview();
        let list = record(&style, &ClockLabels::arabic());
        assert!(list.commands().all(|c| !matches!(c, DrawCmd::Text(t) if t.shadow.is_some())));
    }

    #[test]
    fn rendering_is_idempotent() {
        let style = StyleDraft::gradient().finalize(frame());
        let labels = ClockLabels::arabic();
        assert_eq!(record(&style, &labels), record(&style, &labels));
    }

    #[test]
    fn zero_frame_still_records_everything() {
        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list, ZIndex::FACE);
        render_face(Rect::default(), &ClockStyle::default(), &ClockLabels::arabic(), &mut painter);
        assert_eq!(list.len(), 74);
    }
}
