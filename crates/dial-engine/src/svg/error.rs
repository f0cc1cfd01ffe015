use std::fmt;

/// Error returned when an SVG document cannot be rasterized.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// `usvg` rejected the document.
    Parse(String),
    /// The document has a zero-area canvas.
    EmptyCanvas,
    /// PNG encoding failed.
    Encode(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Parse(e) => write!(f, "svg parse error: {e}"),
            RenderError::EmptyCanvas => f.write_str("cannot rasterize a zero-area canvas"),
            RenderError::Encode(e) => write!(f, "png encode error: {e}"),
        }
    }
}

impl std::error::Error for RenderError {}
