use super::Vec2;

/// Output surface size in logical pixels.
///
/// Both dimensions are expected to be non-negative. Degenerate sizes are legal
/// and flow through layout as zero-area rectangles.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Copy with negative or non-finite dimensions replaced by zero.
    #[inline]
    pub fn sanitized(self) -> Self {
        fn clean(v: f32) -> f32 {
            if v.is_finite() && v > 0.0 { v } else { 0.0 }
        }
        Self::new(clean(self.width), clean(self.height))
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_clamps_negative_and_nan() {
        let v = Viewport::new(-10.0, f32::NAN).sanitized();
        assert_eq!(v, Viewport::new(0.0, 0.0));
    }

    #[test]
    fn zero_size_is_not_valid() {
        assert!(!Viewport::new(0.0, 100.0).is_valid());
        assert!(Viewport::new(1.0, 1.0).is_valid());
    }
}
