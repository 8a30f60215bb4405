use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Source of elapsed time for the frame loop
pub trait TimeSource {
    /// Seconds since the source started; never decreases
    fn elapsed(&self) -> f64;
}

/// Wall clock started at construction
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for Clock {
    fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock for tests and benchmarks
///
/// Clones share the same time, so a test can keep one handle and give
/// the other to the frame loop.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump to `seconds`; earlier times are ignored
    pub fn set(&self, seconds: f64) {
        if seconds > self.now.get() {
            self.now.set(seconds);
        }
    }

    pub fn advance(&self, seconds: f64) {
        self.set(self.now.get() + seconds.max(0.0));
    }
}

impl TimeSource for ManualClock {
    fn elapsed(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.009);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let clock = Clock::new();
        let first = clock.elapsed();
        thread::sleep(Duration::from_millis(2));
        let second = clock.elapsed();
        assert!(first >= 0.0);
        assert!(second >= first);
    }

    #[test]
    fn manual_clock_never_goes_backwards() {
        let clock = ManualClock::new();
        let shared = clock.clone();

        clock.set(2.0);
        assert_eq!(shared.elapsed(), 2.0);

        clock.set(1.0);
        assert_eq!(shared.elapsed(), 2.0);

        shared.advance(0.5);
        shared.advance(-3.0);
        assert_eq!(clock.elapsed(), 2.5);
    }
}
