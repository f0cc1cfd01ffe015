use crate::coords::Vec2;

use super::Color;

/// Gradient spread behavior outside [0, 1] range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1] in typical usage, but is not strictly enforced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Radial gradient definition in logical pixel space.
///
/// Semantics:
/// - `center` is in the same coordinate space as geometry.
/// - `t = 0` maps to `start_radius`, `t = 1` to `end_radius`; inside
///   `start_radius` the first stop colour is used.
/// - `spread` defines behavior beyond `end_radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub start_radius: f32,
    pub end_radius: f32,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl RadialGradient {
    pub fn new(
        center: Vec2,
        start_radius: f32,
        end_radius: f32,
        stops: Vec<ColorStop>,
        spread: SpreadMode,
    ) -> Self {
        Self { center, start_radius, end_radius, stops, spread }
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.start_radius.is_finite()
            && self.end_radius.is_finite()
            && self.start_radius >= 0.0
            && self.end_radius > self.start_radius
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
    }

    /// Colour of the first stop, used as a flat fallback.
    pub fn first_color(&self) -> Color {
        self.stops.first().map(|s| s.color).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops() -> Vec<ColorStop> {
        vec![ColorStop::new(0.5, Color::white()), ColorStop::new(1.0, Color::black())]
    }

    #[test]
    fn valid_gradient() {
        let g = RadialGradient::new(Vec2::new(10.0, 10.0), 5.0, 10.0, stops(), SpreadMode::Pad);
        assert!(g.is_valid());
        assert_eq!(g.first_color(), Color::white());
    }

    #[test]
    fn collapsed_radii_are_invalid() {
        // Zero-size clock frame: both radii collapse to 0.
        let g = RadialGradient::new(Vec2::zero(), 0.0, 0.0, stops(), SpreadMode::Pad);
        assert!(!g.is_valid());
    }

    #[test]
    fn single_stop_is_invalid() {
        let g = RadialGradient::new(
            Vec2::zero(),
            1.0,
            2.0,
            vec![ColorStop::new(0.0, Color::white())],
            SpreadMode::Pad,
        );
        assert!(!g.is_valid());
    }
}
