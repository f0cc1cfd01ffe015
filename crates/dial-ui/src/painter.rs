use dial_engine::coords::{Rect, Vec2};
use dial_engine::paint::{Color, Paint};
use dial_engine::scene::shapes::LineCmd;
use dial_engine::scene::{Border, DrawList, Shadow, ZIndex};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps a `DrawList` and hands out increasing z-indices starting from a base
/// layer, so call order is paint order within a widget.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: ZIndex,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, base: ZIndex) -> Self {
        Self { draw_list, z: base }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Ellipse inscribed in `rect`, filled with `paint`.
    pub fn fill_ellipse(&mut self, rect: Rect, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_fill_ellipse(z, rect, paint.into());
    }

    /// Outline of the ellipse inscribed in `rect`.
    pub fn stroke_ellipse(&mut self, rect: Rect, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_stroke_ellipse(z, rect, Border::new(width, color));
    }

    /// Filled circle of `radius` around `center`.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, paint: impl Into<Paint>) {
        let d = radius * 2.0;
        self.fill_ellipse(Rect::centered_at(center, Vec2::new(d, d)), paint);
    }

    pub fn line(&mut self, line: LineCmd) {
        let z = self.next_z();
        self.draw_list.push_line(z, line);
    }

    /// Text centred on `position`.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        size: f32,
        color: Color,
        position: Vec2,
        shadow: Option<Shadow>,
    ) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, size, color, position, shadow);
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = self.z;
        self.z = self.z.offset(1);
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dial_engine::scene::DrawCmd;

    #[test]
    fn z_increases_per_call() {
        let mut list = DrawList::new();
        {
            let mut p = Painter::new(&mut list, ZIndex::HANDS);
            p.fill_circle(Vec2::new(5.0, 5.0), 2.0, Color::black());
            p.fill_circle(Vec2::new(5.0, 5.0), 1.0, Color::white());
        }
        let zs: Vec<_> = list.items().iter().map(|i| i.key.z).collect();
        assert_eq!(zs, [ZIndex::HANDS, ZIndex::HANDS.offset(1)]);
    }

    #[test]
    fn fill_circle_inscribes_square() {
        let mut list = DrawList::new();
        Painter::new(&mut list, ZIndex::FACE).fill_circle(Vec2::new(10.0, 20.0), 2.0, Color::black());
        match &list.items()[0].cmd {
            DrawCmd::FillEllipse(e) => assert_eq!(e.rect, Rect::new(8.0, 18.0, 4.0, 4.0)),
            other => panic!("unexpected {other:?}"),
        }
    }
}
