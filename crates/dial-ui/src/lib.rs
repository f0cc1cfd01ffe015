//! Dial UI — an analog clock face on top of `dial-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use dial_ui::prelude::*;
//!
//! let mut clock = ClockView::new(StyleDraft::gradient(), ClockLabels::arabic());
//! let mut ticks = TickClock::default();
//!
//! loop {
//!     ticks.tick();
//!     let frame = clock.frame(viewport, TimeOfDay::now_local());
//!     // frame.face() is re-used across ticks; frame.hands() is fresh.
//! }
//! ```
//!
//! The geometry (`layout`, `hand`, `face`) is plain functions over
//! `Rect`/`TimeOfDay`; `ClockView` adds the caching so the static face is only
//! rebuilt when the viewport or the style changes.

pub mod clock;
pub mod constraints;
pub mod face;
pub mod hand;
pub mod labels;
pub mod layout;
pub mod painter;
pub mod style;
pub mod time_of_day;
pub mod widget;
pub mod widgets;

/// Everything needed to drive a clock — import this in host code.
pub mod prelude {
    pub use crate::clock::{ClockFrame, ClockView};
    pub use crate::constraints::Constraints;
    pub use crate::hand::{HandKind, HandSegment, hand_endpoint, hand_endpoints};
    pub use crate::labels::{ClockLabels, LabelError};
    pub use crate::layout::{DEFAULT_INSET_RATIO, clock_frame, clock_frame_with_inset};
    pub use crate::painter::Painter;
    pub use crate::style::{BackgroundSpec, ClockStyle, StyleDraft};
    pub use crate::time_of_day::{FixedClock, LocalClock, TimeOfDay, TimeSource};
    pub use crate::widget::Widget;
    pub use crate::widgets::{body::ClockBody, hands::ClockHands};

    // Re-export the engine primitives hosts need.
    pub use dial_engine::coords::{Rect, Vec2, Viewport};
    pub use dial_engine::paint::{Color, Paint};
    pub use dial_engine::scene::DrawList;
    pub use dial_engine::time::{Tick, TickClock};
}
