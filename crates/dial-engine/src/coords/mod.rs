//! Coordinate and geometry types shared across the engine and the clock.
//!
//! Canonical CPU space:
//! - Logical pixels (display points)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles follow the same basis, so a positive rotation sweeps clockwise on screen.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
