use std::fs;
use std::path::Path;

use anyhow::Context;
use dial_engine::paint::Color;
use dial_engine::svg::{SvgWriter, render_png};
use dial_ui::prelude::*;

/// Serializes one redraw (face under hands) into an SVG document.
pub fn frame_to_svg(viewport: Viewport, frame: &ClockFrame<'_>) -> String {
    let mut svg = SvgWriter::new(viewport);
    svg.clear(Color::white());
    for layer in frame.layers() {
        svg.push_list(layer);
    }
    svg.finish()
}

/// Writes `svg` to `path`, rasterizing first when the extension is `png`.
pub fn write_frame(path: &Path, svg: &str) -> anyhow::Result<()> {
    let is_png = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    if is_png {
        let png = render_png(svg).context("rasterizing clock frame")?;
        fs::write(path, png).with_context(|| format!("writing {}", path.display()))?;
    } else {
        fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_contains_face_and_hands() {
        let viewport = Viewport::new(400.0, 300.0);
        let mut clock = ClockView::new(StyleDraft::gradient(), ClockLabels::arabic());
        let frame = clock.frame(viewport, TimeOfDay::new(14, 30, 45));
        let svg = frame_to_svg(viewport, &frame);

        assert!(svg.contains("<radialGradient"));
        // 60 ticks + 3 hands.
        assert_eq!(svg.matches("<line").count(), 63);
        assert_eq!(svg.matches("<text").count(), 12);
        // Disc, rim, pivot, hole.
        assert_eq!(svg.matches("<ellipse").count(), 4);
        // Hands start at the centre of the 400×300 viewport.
        assert_eq!(svg.matches("x1=\"200\" y1=\"150\"").count(), 3);
    }
}
