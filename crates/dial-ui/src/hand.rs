//! Hand geometry.
//!
//! All three hands share one 60-unit angular scale: minutes and seconds map
//! directly, hours are folded onto a 12-hour dial and multiplied by 5.

use core::f32::consts::{PI, TAU};

use dial_engine::coords::{Rect, Vec2};
use dial_engine::paint::Color;
use dial_engine::scene::shapes::LineCmd;
use dial_engine::scene::{LineCap, Shadow};

use crate::painter::Painter;
use crate::style::ClockStyle;
use crate::time_of_day::TimeOfDay;

/// Units in one full turn of the dial.
pub const DIAL_UNITS: f32 = 60.0;

/// Shadow under the hour and minute hands.
pub const HAND_SHADOW: Shadow = Shadow::new(Color::black(), 2.0, Vec2::new(1.0, 1.0));

/// Radius of the pivot cap drawn over the hands.
pub const PIVOT_RADIUS: f32 = 2.0;
/// Radius of the hole punched in the pivot cap.
pub const PIVOT_HOLE_RADIUS: f32 = 1.0;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    /// All hands in draw order; later hands cover earlier ones.
    pub const ALL: [HandKind; 3] = [HandKind::Hour, HandKind::Minute, HandKind::Second];

    /// Scale from the time field to dial units.
    #[inline]
    pub const fn multiplier(self) -> f32 {
        match self {
            HandKind::Hour => 5.0,
            HandKind::Minute | HandKind::Second => 1.0,
        }
    }

    /// Hand length as a fraction of the frame radius.
    #[inline]
    pub const fn length_fraction(self) -> f32 {
        match self {
            HandKind::Hour => 0.4,
            HandKind::Minute => 0.6,
            HandKind::Second => 0.8,
        }
    }

    #[inline]
    pub const fn stroke_width(self) -> f32 {
        match self {
            HandKind::Hour => 2.0,
            HandKind::Minute => 1.0,
            HandKind::Second => 0.5,
        }
    }

    #[inline]
    pub const fn cap(self) -> LineCap {
        match self {
            HandKind::Hour | HandKind::Minute => LineCap::Round,
            HandKind::Second => LineCap::Butt,
        }
    }

    /// The seconds hand never carries a shadow.
    #[inline]
    pub const fn casts_shadow(self) -> bool {
        !matches!(self, HandKind::Second)
    }

    /// Raw time field this hand tracks (hour on a 12-hour dial).
    #[inline]
    pub const fn field(self, time: TimeOfDay) -> u32 {
        match self {
            HandKind::Hour => time.hour12(),
            HandKind::Minute => time.minute,
            HandKind::Second => time.second,
        }
    }

    fn color(self, style: &ClockStyle) -> Color {
        match self {
            HandKind::Hour => style.hour_hand_color(),
            HandKind::Minute => style.minute_hand_color(),
            HandKind::Second => style.second_hand_color(),
        }
    }
}

/// One hand as a segment from the frame centre outwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandSegment {
    pub kind: HandKind,
    pub start: Vec2,
    pub end: Vec2,
}

impl HandSegment {
    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Position of `kind` on the 60-unit dial, in [0, 60).
#[inline]
pub fn hand_value(time: TimeOfDay, kind: HandKind) -> f32 {
    kind.field(time) as f32 * kind.multiplier()
}

/// Angle fed to the `(sin, cos)` endpoint formula for a dial value.
///
/// Negated so the hand sweeps clockwise as the value grows; offset by π so
/// that value 0 lands at 12 o'clock (`cos(−π) = −1`, i.e. up in a +Y-down space).
#[inline]
pub fn hand_angle(value: f32) -> f32 {
    -value * TAU / DIAL_UNITS - PI
}

/// Segment for one hand at `time` inside `frame`.
///
/// The radius is `frame.width / 2`; the clock frame is square so either side
/// works, and width matches how the frame is built.
pub fn hand_endpoint(time: TimeOfDay, kind: HandKind, frame: Rect) -> HandSegment {
    let center = frame.center();
    let radius = frame.width() / 2.0;
    let theta = hand_angle(hand_value(time, kind));
    let reach = kind.length_fraction() * radius;

    HandSegment {
        kind,
        start: center,
        end: center + Vec2::new(theta.sin(), theta.cos()) * reach,
    }
}

/// Segments for all hands, in draw order.
pub fn hand_endpoints(time: TimeOfDay, frame: Rect) -> [HandSegment; 3] {
    HandKind::ALL.map(|kind| hand_endpoint(time, kind, frame))
}

/// Paints hour, minute and second hands, then the pivot cap and its hole.
///
/// The order is fixed: when hands coincide the later one covers the earlier,
/// and the pivot always sits on top.
pub fn render_hands(time: TimeOfDay, frame: Rect, style: &ClockStyle, painter: &mut Painter) {
    for segment in hand_endpoints(time, frame) {
        let kind = segment.kind;
        let shadow = (style.use_hand_shadow() && kind.casts_shadow()).then_some(HAND_SHADOW);
        painter.line(
            LineCmd::new(segment.start, segment.end, kind.stroke_width(), kind.color(style))
                .cap(kind.cap())
                .shadow(shadow),
        );
    }

    let center = frame.center();
    painter.fill_circle(center, PIVOT_RADIUS, style.pivot_color());
    painter.fill_circle(center, PIVOT_HOLE_RADIUS, style.background().clone());
}
