use crate::scene::shapes::ellipse::{FillEllipseCmd, StrokeEllipseCmd};
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `svg::SvgWriter` to emit it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillEllipse(FillEllipseCmd),
    StrokeEllipse(StrokeEllipseCmd),
    Line(LineCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Short tag used in logs and debug dumps.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::FillEllipse(_) => "fill-ellipse",
            DrawCmd::StrokeEllipse(_) => "stroke-ellipse",
            DrawCmd::Line(_) => "line",
            DrawCmd::Text(_) => "text",
        }
    }
}
