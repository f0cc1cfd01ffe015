//! Dial engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by the clock layer:
//! geometry, paint, the recorded draw stream, timing, and an SVG/PNG
//! output path for surfaces that are not a live window.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod svg;
pub mod time;
