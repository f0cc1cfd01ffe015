//! Clock styling.
//!
//! Styling happens in two phases. A [`StyleDraft`] is what the host knows
//! before layout: flat colours, shadow switches, and possibly a background
//! that depends on where the clock ends up on screen. Once the clock frame is
//! known, [`StyleDraft::finalize`] resolves it into an immutable
//! [`ClockStyle`]. A theme change builds a new draft and replaces the style
//! wholesale; nothing mutates a `ClockStyle` in place.

use dial_engine::coords::Rect;
use dial_engine::paint::{Color, ColorStop, Paint, RadialGradient, SpreadMode};

/// Warm ivory dial.
pub const CLOCK_BACKGROUND: Color = Color::from_premul(0.961, 0.941, 0.894, 1.0);
/// Mid-grey rim.
pub const CLOCK_BORDER: Color = Color::from_premul(0.47, 0.47, 0.47, 1.0);
/// Red seconds hand.
pub const SECOND_HAND: Color = Color::from_premul(0.8, 0.141, 0.114, 1.0);
/// Hour-position ticks.
pub const TICK_PRIMARY: Color = Color::black();
/// Minute-position ticks: translucent grey.
pub const TICK_SECONDARY: Color = Color::from_premul(0.141, 0.141, 0.158, 0.6);

/// Background choice before layout.
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundSpec {
    Solid(Color),
    /// Radial gradient centred on the clock frame: `inner` from the centre out
    /// to half the frame radius, blending to `outer` at the rim and beyond.
    RadialFromFrame { inner: Color, outer: Color },
}

/// Pre-layout style description.
///
/// Defaults: ivory solid background, grey border, black labels and
/// hour/minute hands, red seconds hand, both shadows on.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDraft {
    pub background: BackgroundSpec,
    pub border: Color,
    pub label_color: Color,
    pub hour_hand_color: Color,
    pub minute_hand_color: Color,
    pub second_hand_color: Color,
    pub tick_primary: Color,
    pub tick_secondary: Color,
    pub pivot_color: Color,
    pub use_hand_shadow: bool,
    pub use_label_shadow: bool,
}

impl Default for StyleDraft {
    fn default() -> Self {
        Self {
            background: BackgroundSpec::Solid(CLOCK_BACKGROUND),
            border: CLOCK_BORDER,
            label_color: Color::black(),
            hour_hand_color: Color::black(),
            minute_hand_color: Color::black(),
            second_hand_color: SECOND_HAND,
            tick_primary: TICK_PRIMARY,
            tick_secondary: TICK_SECONDARY,
            pivot_color: Color::black(),
            use_hand_shadow: true,
            use_label_shadow: true,
        }
    }
}

impl StyleDraft {
    /// Default draft with a white-to-ivory radial background.
    pub fn gradient() -> Self {
        Self {
            background: BackgroundSpec::RadialFromFrame {
                inner: Color::white(),
                outer: CLOCK_BACKGROUND,
            },
            ..Self::default()
        }
    }

    pub fn background(mut self, v: BackgroundSpec) -> Self { self.background = v; self }
    pub fn border(mut self, v: Color) -> Self { self.border = v; self }
    pub fn label_color(mut self, v: Color) -> Self { self.label_color = v; self }
    pub fn hour_hand_color(mut self, v: Color) -> Self { self.hour_hand_color = v; self }
    pub fn minute_hand_color(mut self, v: Color) -> Self { self.minute_hand_color = v; self }
    pub fn second_hand_color(mut self, v: Color) -> Self { self.second_hand_color = v; self }
    pub fn tick_colors(mut self, primary: Color, secondary: Color) -> Self {
        self.tick_primary = primary;
        self.tick_secondary = secondary;
        self
    }
    pub fn pivot_color(mut self, v: Color) -> Self { self.pivot_color = v; self }
    pub fn hand_shadow(mut self, v: bool) -> Self { self.use_hand_shadow = v; self }
    pub fn label_shadow(mut self, v: bool) -> Self { self.use_label_shadow = v; self }

    /// Whether finalizing depends on the measured frame.
    pub fn is_layout_dependent(&self) -> bool {
        matches!(self.background, BackgroundSpec::RadialFromFrame { .. })
    }

    /// Best-effort style usable before layout has run.
    ///
    /// A frame-relative gradient is approximated by its rim colour.
    pub fn preview(&self) -> ClockStyle {
        let background = match self.background {
            BackgroundSpec::Solid(c) => Paint::Solid(c),
            BackgroundSpec::RadialFromFrame { outer, .. } => Paint::Solid(outer),
        };
        self.build(background)
    }

    /// Resolves the draft against the measured clock frame.
    ///
    /// For a radial background the gradient is centred on the frame centre and
    /// spans the frame radius (`width / 2`), with `inner` at t = 0.5 and
    /// `outer` at t = 1.0.
    pub fn finalize(&self, frame: Rect) -> ClockStyle {
        let background = match self.background {
            BackgroundSpec::Solid(c) => Paint::Solid(c),
            BackgroundSpec::RadialFromFrame { inner, outer } => {
                let radius = frame.width() / 2.0;
                Paint::RadialGradient(RadialGradient::new(
                    frame.center(),
                    0.0,
                    radius,
                    vec![ColorStop::new(0.5, inner), ColorStop::new(1.0, outer)],
                    SpreadMode::Pad,
                ))
            }
        };
        self.build(background)
    }

    fn build(&self, background: Paint) -> ClockStyle {
        ClockStyle {
            background,
            border: self.border,
            label_color: self.label_color,
            hour_hand_color: self.hour_hand_color,
            minute_hand_color: self.minute_hand_color,
            second_hand_color: self.second_hand_color,
            tick_primary: self.tick_primary,
            tick_secondary: self.tick_secondary,
            pivot_color: self.pivot_color,
            use_hand_shadow: self.use_hand_shadow,
            use_label_shadow: self.use_label_shadow,
        }
    }
}

/// Resolved, immutable paint set for one clock layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockStyle {
    background: Paint,
    border: Color,
    label_color: Color,
    hour_hand_color: Color,
    minute_hand_color: Color,
    second_hand_color: Color,
    tick_primary: Color,
    tick_secondary: Color,
    pivot_color: Color,
    use_hand_shadow: bool,
    use_label_shadow: bool,
}

impl ClockStyle {
    pub fn background(&self) -> &Paint { &self.background }
    pub fn border(&self) -> Color { self.border }
    pub fn label_color(&self) -> Color { self.label_color }
    pub fn hour_hand_color(&self) -> Color { self.hour_hand_color }
    pub fn minute_hand_color(&self) -> Color { self.minute_hand_color }
    pub fn second_hand_color(&self) -> Color { self.second_hand_color }
    pub fn tick_primary(&self) -> Color { self.tick_primary }
    pub fn tick_secondary(&self) -> Color { self.tick_secondary }
    pub fn pivot_color(&self) -> Color { self.pivot_color }
    pub fn use_hand_shadow(&self) -> bool { self.use_hand_shadow }
    pub fn use_label_shadow(&self) -> bool { self.use_label_shadow }
}

impl Default for ClockStyle {
    fn default() -> Self {
        StyleDraft::default().preview()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dial_engine::coords::Vec2;

    #[test]
    fn solid_draft_ignores_frame() {
        let draft = StyleDraft::default();
        assert!(!draft.is_layout_dependent());
        let a = draft.finalize(Rect::new(0.0, 0.0, 100.0, 100.0));
        let b = draft.finalize(Rect::new(50.0, 50.0, 10.0, 10.0));
        assert_eq!(a, b);
        assert_eq!(a, draft.preview());
    }

    #[test]
    fn gradient_is_centred_on_frame() {
        let frame = Rect::new(80.0, 30.0, 240.0, 240.0);
        let style = StyleDraft::gradient().finalize(frame);
        let Paint::RadialGradient(g) = style.background() else {
            panic!("expected gradient, got {:?}", style.background());
        };
        assert_eq!(g.center, Vec2::new(200.0, 150.0));
        assert_eq!(g.start_radius, 0.0);
        assert_eq!(g.end_radius, 120.0);
        assert_eq!(g.stops[0], ColorStop::new(0.5, Color::white()));
        assert_eq!(g.stops[1], ColorStop::new(1.0, CLOCK_BACKGROUND));
        assert!(g.is_valid());
    }

    #[test]
    fn preview_approximates_gradient_with_rim_colour() {
        let style = StyleDraft::gradient().preview();
        assert_eq!(style.background(), &Paint::Solid(CLOCK_BACKGROUND));
    }

    #[test]
    fn builder_flags_carry_through() {
        let style = StyleDraft::default()
            .hand_shadow(false)
            .label_shadow(false)
            .second_hand_color(Color::black())
            .preview();
        assert!(!style.use_hand_shadow());
        assert!(!style.use_label_shadow());
        assert_eq!(style.second_hand_color(), Color::black());
    }
}
