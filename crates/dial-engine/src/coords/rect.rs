use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// `side × side` square with its top-left corner at `origin`.
    #[inline]
    pub const fn square(origin: Vec2, side: f32) -> Self {
        Self { origin, size: Vec2::new(side, side) }
    }

    /// Rectangle of `size` whose centre sits on `center`.
    #[inline]
    pub fn centered_at(center: Vec2, size: Vec2) -> Self {
        Self::from_origin_size(center - size / 2.0, size)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    /// Centre point (`midX`, `midY`).
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x / 2.0, self.origin.y + self.size.y / 2.0)
    }

    #[inline]
    pub fn min_side(self) -> f32 {
        self.size.x.min(self.size.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Scales the size by `ratio` and shifts the origin back by half the
    /// scaled size.
    ///
    /// The result is centred on the *original origin*, not on the original
    /// centre: callers that want the result centred inside some container
    /// re-position it afterwards. No clamping is applied, so `ratio > 1.0`
    /// grows the rectangle and a negative ratio mirrors it.
    #[inline]
    pub fn inset_centered(self, ratio: f32) -> Self {
        let inset = self.size * ratio;
        Self::from_origin_size(self.origin - inset / 2.0, inset)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < (self.origin.x + self.size.x)
            && p.y < (self.origin.y + self.size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── center / min_side ─────────────────────────────────────────────────

    #[test]
    fn center_of_offset_rect() {
        assert_eq!(r(10.0, 20.0, 100.0, 50.0).center(), Vec2::new(60.0, 45.0));
    }

    #[test]
    fn min_side_picks_shorter_edge() {
        assert_eq!(r(0.0, 0.0, 400.0, 300.0).min_side(), 300.0);
        assert_eq!(r(0.0, 0.0, 120.0, 640.0).min_side(), 120.0);
    }

    #[test]
    fn centered_at_round_trips_center() {
        let c = Vec2::new(33.0, -7.0);
        assert_eq!(Rect::centered_at(c, Vec2::new(10.0, 4.0)).center(), c);
    }

    // ── inset_centered ────────────────────────────────────────────────────

    #[test]
    fn inset_centered_shrinks_around_origin() {
        let inset = Rect::square(Vec2::zero(), 300.0).inset_centered(0.8);
        assert_eq!(inset, r(-120.0, -120.0, 240.0, 240.0));
    }

    #[test]
    fn inset_centered_ratio_above_one_grows() {
        let inset = r(10.0, 10.0, 100.0, 100.0).inset_centered(1.5);
        assert_eq!(inset, r(-65.0, -65.0, 150.0, 150.0));
    }

    #[test]
    fn inset_centered_zero_size_stays_degenerate() {
        let inset = r(5.0, 5.0, 0.0, 0.0).inset_centered(0.8);
        assert_eq!(inset, r(5.0, 5.0, 0.0, 0.0));
        assert!(inset.is_empty());
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        // Half-open [min, max) — the max edge is not contained.
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
    }

    #[test]
    fn is_empty_positive_size() {
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
