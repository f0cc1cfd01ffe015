use std::time::{Duration, Instant};

/// Redraw cadence of an analog clock with a seconds hand.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Tick snapshot.
#[derive(Debug, Copy, Clone)]
pub struct Tick {
    /// Monotonic tick counter, starting at 0.
    pub index: u64,

    /// Monotonic timestamp taken when the tick fired.
    pub now: Instant,

    /// How far past its deadline this tick fired.
    pub late: Duration,
}

/// Fixed-period tick source.
///
/// Deadlines are derived from the previous deadline rather than from the time
/// the caller got around to asking, so a steady loop does not drift. If the
/// caller falls a whole period behind (debugger pause, suspended laptop) the
/// schedule is re-anchored to the present instead of firing a burst of
/// catch-up ticks.
#[derive(Debug, Clone)]
pub struct TickClock {
    period: Duration,
    next: Instant,
    index: u64,
}

impl TickClock {
    /// Creates a clock whose first tick fires immediately.
    pub fn new(period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self { period, next: Instant::now(), index: 0 }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Instant at which the next tick is due.
    #[inline]
    pub fn next_deadline(&self) -> Instant {
        self.next
    }

    /// Resets the schedule so the next tick is due now.
    pub fn reset(&mut self) {
        self.next = Instant::now();
    }

    /// Returns the tick if its deadline has passed, without blocking.
    pub fn poll(&mut self) -> Option<Tick> {
        let now = Instant::now();
        if now < self.next {
            return None;
        }
        Some(self.fire(now))
    }

    /// Blocks until the next deadline and returns the tick.
    pub fn tick(&mut self) -> Tick {
        let now = Instant::now();
        if let Some(wait) = self.next.checked_duration_since(now) {
            std::thread::sleep(wait);
        }
        self.fire(Instant::now())
    }

    fn fire(&mut self, now: Instant) -> Tick {
        let late = now.saturating_duration_since(self.next);

        self.next += self.period;
        if late >= self.period {
            log::debug!("tick {} late by {:?}; re-anchoring schedule", self.index, late);
            self.next = now + self.period;
        }

        let tick = Tick { index: self.index, now, late };
        self.index = self.index.wrapping_add(1);
        tick
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_PERIOD)
    }
}
