//! Clock frame layout.
//!
//! Every other piece of the clock is drawn relative to the *clock frame*: a
//! square, centred in the viewport, whose side is the viewport's shorter edge
//! scaled by the inset ratio.

use dial_engine::coords::{Rect, Vec2, Viewport};

/// Fraction of the viewport's shorter side used by the clock frame.
pub const DEFAULT_INSET_RATIO: f32 = 0.80;

/// Replaces a non-finite inset ratio with [`DEFAULT_INSET_RATIO`].
#[inline]
pub fn sanitize_inset(ratio: f32) -> f32 {
    if ratio.is_finite() { ratio } else { DEFAULT_INSET_RATIO }
}

/// Clock frame for `viewport` using [`DEFAULT_INSET_RATIO`].
#[inline]
pub fn clock_frame(viewport: Viewport) -> Rect {
    clock_frame_with_inset(viewport, DEFAULT_INSET_RATIO)
}

/// Clock frame for `viewport` with an explicit inset ratio.
///
/// The square is first inset around its own origin (see
/// [`Rect::inset_centered`]) and then re-centred in the viewport, so the result
/// is always a square centred on the viewport centre. The ratio is not
/// clamped: values above 1 produce a frame larger than the viewport's shorter
/// side, still centred.
///
/// Negative or non-finite viewport dimensions are treated as zero; a
/// non-finite ratio falls back to [`DEFAULT_INSET_RATIO`].
pub fn clock_frame_with_inset(viewport: Viewport, ratio: f32) -> Rect {
    let viewport = viewport.sanitized();
    let ratio = sanitize_inset(ratio);
    let side = viewport.min_side();

    let inset = Rect::square(Vec2::zero(), side).inset_centered(ratio);

    Rect::from_origin_size(
        Vec2::new(
            viewport.width / 2.0 - inset.size.x / 2.0,
            viewport.height / 2.0 - inset.size.y / 2.0,
        ),
        inset.size,
    )
}

/// Clock frame for a widget rect that does not start at the origin.
pub fn clock_frame_in(rect: Rect, ratio: f32) -> Rect {
    let local = clock_frame_with_inset(Viewport::new(rect.size.x, rect.size.y), ratio);
    Rect::from_origin_size(local.origin + rect.origin, local.size)
}
