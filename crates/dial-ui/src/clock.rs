//! Cached clock view.
//!
//! Splits every redraw into a cheap part (hands, recorded on every call) and
//! an expensive part (the static face, recorded only when the viewport or the
//! style changes).
//!
//! Styling converges in two passes. Until the first layout the view only has
//! [`StyleDraft::preview`]; the first [`ClockView::frame`] measures the clock
//! frame, finalizes the draft against it (e.g. centres a radial background on
//! the dial) and records the face with the finalized style. Each time the face
//! is re-recorded the view's *generation* advances, which hosts with their own
//! caches can use as an invalidation signal.

use dial_engine::coords::{Rect, Vec2, Viewport};
use dial_engine::scene::{DrawList, ZIndex};

use crate::labels::ClockLabels;
use crate::layout::{DEFAULT_INSET_RATIO, clock_frame_with_inset, sanitize_inset};
use crate::painter::Painter;
use crate::style::{ClockStyle, StyleDraft};
use crate::time_of_day::TimeOfDay;
use crate::widget::Widget;
use crate::widgets::body::ClockBody;
use crate::widgets::hands::ClockHands;

/// Layout inputs the cached face was recorded for.
#[derive(Debug, Copy, Clone, PartialEq)]
struct FaceKey {
    viewport: Viewport,
    inset: f32,
}

/// A clock that can be redrawn once per tick.
pub struct ClockView {
    draft: StyleDraft,
    style: ClockStyle,
    labels: ClockLabels,
    inset: f32,

    face: DrawList,
    face_key: Option<FaceKey>,
    clock_rect: Rect,
    generation: u64,
    face_builds: u64,

    hands: DrawList,
}

/// Output of one redraw: the cached face and the fresh hands.
///
/// Draw `face` first, then `hands`. Both lists are read-only: the face is
/// replayed on later ticks and must stay as recorded.
pub struct ClockFrame<'a> {
    face: &'a DrawList,
    hands: &'a DrawList,
    clock_rect: Rect,
    generation: u64,
    time: TimeOfDay,
}

impl ClockFrame<'_> {
    pub fn face(&self) -> &DrawList {
        self.face
    }

    pub fn hands(&self) -> &DrawList {
        self.hands
    }

    /// Both lists, back to front.
    pub fn layers(&self) -> [&DrawList; 2] {
        [self.face, self.hands]
    }

    /// The clock frame this redraw was laid out in.
    pub fn clock_rect(&self) -> Rect {
        self.clock_rect
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }
}

impl ClockView {
    pub fn new(draft: StyleDraft, labels: ClockLabels) -> Self {
        let style = draft.preview();
        Self {
            draft,
            style,
            labels,
            inset: DEFAULT_INSET_RATIO,
            face: DrawList::new(),
            face_key: None,
            clock_rect: Rect::default(),
            generation: 0,
            face_builds: 0,
            hands: DrawList::new(),
        }
    }

    /// Overrides the inset ratio. Invalidates the face.
    ///
    /// A non-finite ratio falls back to [`DEFAULT_INSET_RATIO`].
    pub fn with_inset(mut self, ratio: f32) -> Self {
        self.inset = sanitize_inset(ratio);
        self.face_key = None;
        self
    }

    /// Replaces the style wholesale. The face is re-recorded on the next frame.
    pub fn set_style(&mut self, draft: StyleDraft) {
        self.style = draft.preview();
        self.draft = draft;
        self.face_key = None;
    }

    /// Replaces the hour labels. The face is re-recorded on the next frame.
    pub fn set_labels(&mut self, labels: ClockLabels) {
        self.labels = labels;
        self.face_key = None;
    }

    /// Current style: the preview before the first layout, finalized after.
    pub fn style(&self) -> &ClockStyle {
        &self.style
    }

    pub fn draft(&self) -> &StyleDraft {
        &self.draft
    }

    pub fn labels(&self) -> &ClockLabels {
        &self.labels
    }

    /// Bumped each time the face is re-recorded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// How many times the face has been recorded since construction.
    pub fn face_builds(&self) -> u64 {
        self.face_builds
    }

    /// Whether the next [`frame`](Self::frame) for `viewport` will re-record the face.
    pub fn needs_face(&self, viewport: Viewport) -> bool {
        self.face_key != Some(FaceKey { viewport: viewport.sanitized(), inset: self.inset })
    }

    /// Lays out (if needed) and records one redraw for `time`.
    pub fn frame(&mut self, viewport: Viewport, time: TimeOfDay) -> ClockFrame<'_> {
        let viewport = viewport.sanitized();
        if self.needs_face(viewport) {
            self.rebuild_face(viewport);
        }

        self.hands.clear();
        {
            let mut painter = Painter::new(&mut self.hands, ZIndex::HANDS);
            ClockHands::new(time, &self.style)
                .inset(self.inset)
                .paint(&mut painter, viewport_rect(viewport));
        }
        log::trace!("hands recorded for {time}");

        ClockFrame {
            face: &self.face,
            hands: &self.hands,
            clock_rect: self.clock_rect,
            generation: self.generation,
            time,
        }
    }

    fn rebuild_face(&mut self, viewport: Viewport) {
        self.clock_rect = clock_frame_with_inset(viewport, self.inset);

        // Second pass of the style: resolve frame-relative paints now that the
        // dial's on-screen rect is known.
        self.style = self.draft.finalize(self.clock_rect);

        self.face.clear();
        {
            let mut painter = Painter::new(&mut self.face, ZIndex::FACE);
            ClockBody::new(&self.style, &self.labels)
                .inset(self.inset)
                .paint(&mut painter, viewport_rect(viewport));
        }

        self.face_key = Some(FaceKey { viewport, inset: self.inset });
        self.generation = self.generation.wrapping_add(1);
        self.face_builds += 1;

        log::debug!(
            "face recorded: viewport {}x{}, clock rect {:?}, generation {}, {} commands",
            viewport.width,
            viewport.height,
            self.clock_rect,
            self.generation,
            self.face.len(),
        );
    }
}

#[inline]
fn viewport_rect(viewport: Viewport) -> Rect {
    Rect::from_origin_size(Vec2::zero(), viewport.size())
}
