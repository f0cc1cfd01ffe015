use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Shadow;

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Centre of the text box in logical pixels.
    pub position: Vec2,
    pub shadow: Option<Shadow>,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        size: f32,
        color: Color,
        position: Vec2,
        shadow: Option<Shadow>,
    ) {
        self.push(z, DrawCmd::Text(TextCmd {
            text: text.into(),
            size,
            color,
            position,
            shadow,
        }));
    }
}
