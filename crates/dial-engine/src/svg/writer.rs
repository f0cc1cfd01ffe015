use crate::coords::{Rect, Viewport};
use crate::paint::{Color, Paint, RadialGradient, SpreadMode};
use crate::scene::shapes::{FillEllipseCmd, LineCmd, StrokeEllipseCmd, TextCmd};
use crate::scene::{DrawCmd, DrawList, LineCap, Shadow};

/// Accumulates draw commands into a standalone SVG document.
///
/// Lists are appended in call order and each list is replayed in its own paint
/// order, so pushing the face list and then the hands list reproduces the
/// on-screen layering.
///
/// ```rust,ignore
/// let mut svg = SvgWriter::new(viewport);
/// svg.push_list(&face);
/// svg.push_list(&hands);
/// std::fs::write("clock.svg", svg.finish())?;
/// ```
#[derive(Debug)]
pub struct SvgWriter {
    viewport: Viewport,
    defs: String,
    body: String,
    gradients: usize,
    /// Shadow filters already emitted, keyed by their parameters.
    filters: Vec<(Shadow, String)>,
}

impl SvgWriter {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport: viewport.sanitized(),
            defs: String::new(),
            body: String::new(),
            gradients: 0,
            filters: Vec::new(),
        }
    }

    /// Fills the whole canvas with `color` (emitted below anything pushed so far).
    pub fn clear(&mut self, color: Color) {
        let rect = format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" {}/>\n",
            self.viewport.width,
            self.viewport.height,
            fill_attrs(color),
        );
        self.body.insert_str(0, &rect);
    }

    /// Appends every item of `list` in paint order.
    pub fn push_list(&mut self, list: &DrawList) {
        for item in list.paint_order() {
            self.push_cmd(&item.cmd);
        }
    }

    pub fn push_cmd(&mut self, cmd: &DrawCmd) {
        match cmd {
            DrawCmd::FillEllipse(c) => self.fill_ellipse(c),
            DrawCmd::StrokeEllipse(c) => self.stroke_ellipse(c),
            DrawCmd::Line(c) => self.line(c),
            DrawCmd::Text(c) => self.text(c),
        }
    }

    /// Closes the document and returns the SVG source.
    pub fn finish(self) -> String {
        let mut out = String::with_capacity(self.defs.len() + self.body.len() + 256);
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.viewport.width,
            h = self.viewport.height,
        ));
        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            out.push_str(&self.defs);
            out.push_str("</defs>\n");
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    // ── shapes ────────────────────────────────────────────────────────────

    fn fill_ellipse(&mut self, cmd: &FillEllipseCmd) {
        let fill = self.paint_attrs(&cmd.paint);
        self.body.push_str(&format!("<ellipse {} {fill}/>\n", ellipse_attrs(cmd.rect)));
    }

    fn stroke_ellipse(&mut self, cmd: &StrokeEllipseCmd) {
        self.body.push_str(&format!(
            "<ellipse {} fill=\"none\" {} stroke-width=\"{}\"/>\n",
            ellipse_attrs(cmd.rect),
            stroke_attrs(cmd.border.color),
            cmd.border.width,
        ));
    }

    fn line(&mut self, cmd: &LineCmd) {
        let cap = match cmd.cap {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
        };
        let filter = self.filter_attr(cmd.shadow);
        self.body.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {} stroke-width=\"{}\" stroke-linecap=\"{cap}\"{filter}/>\n",
            cmd.start.x,
            cmd.start.y,
            cmd.end.x,
            cmd.end.y,
            stroke_attrs(cmd.color),
            cmd.width,
        ));
    }

    fn text(&mut self, cmd: &TextCmd) {
        let placement = "text-anchor=\"middle\" dominant-baseline=\"central\"";
        let filter = self.filter_attr(cmd.shadow);
        self.body.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"{}\" {placement} {}{filter}>{}</text>\n",
            cmd.position.x,
            cmd.position.y,
            cmd.size,
            fill_attrs(cmd.color),
            escape(&cmd.text),
        ));
    }

    // ── defs ──────────────────────────────────────────────────────────────

    fn paint_attrs(&mut self, paint: &Paint) -> String {
        match paint {
            Paint::Solid(c) => fill_attrs(*c),
            Paint::RadialGradient(g) if g.is_valid() => {
                let id = self.radial_gradient(g);
                format!("fill=\"url(#{id})\"")
            }
            Paint::RadialGradient(g) => {
                // Collapsed radii (zero-size frame) cannot be expressed; paint flat.
                log::debug!("degenerate radial gradient; using first stop");
                fill_attrs(g.first_color())
            }
        }
    }

    fn radial_gradient(&mut self, g: &RadialGradient) -> String {
        let id = format!("g{}", self.gradients);
        self.gradients += 1;

        let spread = match g.spread {
            SpreadMode::Pad => "pad",
            SpreadMode::Repeat => "repeat",
            SpreadMode::Reflect => "reflect",
        };
        self.defs.push_str(&format!(
            "<radialGradient id=\"{id}\" gradientUnits=\"userSpaceOnUse\" cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" spreadMethod=\"{spread}\">\n",
            cx = g.center.x,
            cy = g.center.y,
            r = g.end_radius,
        ));

        // SVG gradients run from the centre; remap stops so t=0 lands on start_radius.
        let span = g.end_radius - g.start_radius;
        self.defs.push_str(&stop_element(0.0, g.first_color()));
        for stop in &g.stops {
            let offset = (g.start_radius + stop.t.clamp(0.0, 1.0) * span) / g.end_radius;
            self.defs.push_str(&stop_element(offset, stop.color));
        }
        self.defs.push_str("</radialGradient>\n");
        id
    }

    fn filter_attr(&mut self, shadow: Option<Shadow>) -> String {
        let Some(shadow) = shadow else {
            return String::new();
        };
        if let Some((_, id)) = self.filters.iter().find(|(s, _)| *s == shadow) {
            return format!(" filter=\"url(#{id})\"");
        }

        let id = format!("s{}", self.filters.len());
        let [r, g, b, a] = shadow.color.to_srgb_u8();
        // The region covers the canvas: lines have zero-area bounding boxes,
        // which would clip an objectBoundingBox filter to nothing.
        self.defs.push_str(&format!(
            "<filter id=\"{id}\" filterUnits=\"userSpaceOnUse\" x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\">\
<feDropShadow dx=\"{dx}\" dy=\"{dy}\" stdDeviation=\"{sd}\" flood-color=\"rgb({r},{g},{b})\" flood-opacity=\"{op}\"/></filter>\n",
            w = self.viewport.width,
            h = self.viewport.height,
            dx = shadow.offset.x,
            dy = shadow.offset.y,
            sd = shadow.radius / 2.0,
            op = a as f32 / 255.0,
        ));
        self.filters.push((shadow, id.clone()));
        format!(" filter=\"url(#{id})\"")
    }
}

fn ellipse_attrs(rect: Rect) -> String {
    let c = rect.center();
    format!(
        "cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\"",
        c.x,
        c.y,
        (rect.size.x / 2.0).abs(),
        (rect.size.y / 2.0).abs(),
    )
}

fn fill_attrs(color: Color) -> String {
    let [r, g, b, a] = color.to_srgb_u8();
    format!("fill=\"rgb({r},{g},{b})\" fill-opacity=\"{}\"", a as f32 / 255.0)
}

fn stroke_attrs(color: Color) -> String {
    let [r, g, b, a] = color.to_srgb_u8();
    format!("stroke=\"rgb({r},{g},{b})\" stroke-opacity=\"{}\"", a as f32 / 255.0)
}

fn stop_element(offset: f32, color: Color) -> String {
    let [r, g, b, a] = color.to_srgb_u8();
    format!(
        "<stop offset=\"{}\" stop-color=\"rgb({r},{g},{b})\" stop-opacity=\"{}\"/>\n",
        offset.clamp(0.0, 1.0),
        a as f32 / 255.0,
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
