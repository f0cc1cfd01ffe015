//! Time subsystem.
//!
//! Provides the redraw cadence without coupling to any window runtime.
//! Intended usage:
//! - one `TickClock` per clock surface
//! - call `tick()` in the redraw loop; it returns once per period

mod tick_clock;

pub use tick_clock::{DEFAULT_TICK_PERIOD, Tick, TickClock};
