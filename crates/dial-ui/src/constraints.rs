use dial_engine::coords::Vec2;

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. Parents enforce their own
/// policy by calling [`Constraints::constrain`] on the returned size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Largest size allowed, with unbounded axes replaced by `fallback`.
    #[inline]
    pub fn biggest_or(self, fallback: Vec2) -> Vec2 {
        Vec2::new(
            if self.max.x.is_finite() { self.max.x } else { fallback.x },
            if self.max.y.is_finite() { self.max.y } else { fallback.y },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_clamps_below_min() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 100.0) };
        let out = c.constrain(Vec2::new(5.0, 3.0));
        assert_eq!(out, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn constrain_clamps_above_max() {
        let c = Constraints::loose(Vec2::new(50.0, 50.0));
        assert_eq!(c.constrain(Vec2::new(200.0, 200.0)), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn tight_forces_size() {
        let c = Constraints::tight(Vec2::new(30.0, 40.0));
        assert_eq!(c.constrain(Vec2::zero()), Vec2::new(30.0, 40.0));
    }

    #[test]
    fn biggest_or_replaces_infinite_axis() {
        let c = Constraints::loose(Vec2::new(f32::INFINITY, 80.0));
        assert_eq!(c.biggest_or(Vec2::new(300.0, 300.0)), Vec2::new(300.0, 80.0));
    }
}
