use crate::coords::Rect;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Filled ellipse inscribed in `rect`.
#[derive(Debug, Clone, PartialEq)]
pub struct FillEllipseCmd {
    pub rect: Rect,
    pub paint: Paint,
}

/// Outline of the ellipse inscribed in `rect`, stroked on its centre line.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeEllipseCmd {
    pub rect: Rect,
    pub border: Border,
}

impl DrawList {
    /// Records a filled ellipse.
    #[inline]
    pub fn push_fill_ellipse(&mut self, z: ZIndex, rect: Rect, paint: Paint) {
        self.push(z, DrawCmd::FillEllipse(FillEllipseCmd { rect, paint }));
    }

    /// Records an ellipse outline.
    #[inline]
    pub fn push_stroke_ellipse(&mut self, z: ZIndex, rect: Rect, border: Border) {
        self.push(z, DrawCmd::StrokeEllipse(StrokeEllipseCmd { rect, border }));
    }
}
