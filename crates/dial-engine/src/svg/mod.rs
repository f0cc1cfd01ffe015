//! Software output path.
//!
//! Turns recorded draw lists into an SVG document, and optionally rasterizes
//! that document to PNG through `resvg`. This is the surface used by the
//! command-line studio and by tests; a windowed host would consume the same
//! `DrawList`s directly.

mod error;
mod raster;
mod writer;

pub use error::RenderError;
pub use raster::render_png;
pub use writer::SvgWriter;
