//! Frame limiter
//!
//! Sleeps the calling thread so consecutive ticks are at least one tick
//! duration apart. Native only; `std::time::Instant` is unavailable on wasm32.

use std::time::{Duration, Instant};

/// Caps the loop at a fixed tick rate
#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_duration: Duration,
    last_tick: Option<Instant>,
}

impl FrameClock {
    /// `tick_rate` is in ticks per second and must be positive
    pub fn new(tick_rate: u32) -> Self {
        Self {
            tick_duration: Duration::from_secs(1) / tick_rate.max(1),
            last_tick: None,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        self.tick_duration
    }

    /// Sleep until a full tick has passed since the previous call.
    ///
    /// Returns the time since the previous call (zero on the first call).
    /// A tick that already overran its budget returns immediately.
    pub fn tick(&mut self) -> Duration {
        let Some(last) = self.last_tick else {
            self.last_tick = Some(Instant::now());
            return Duration::ZERO;
        };

        let elapsed = last.elapsed();
        if elapsed < self.tick_duration {
            std::thread::sleep(self.tick_duration - elapsed);
        }

        let now = Instant::now();
        self.last_tick = Some(now);
        now - last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        assert_eq!(FrameClock::new(160).tick_duration(), Duration::from_micros(6250));
        assert_eq!(FrameClock::new(0).tick_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_tick_waits_for_budget() {
        let mut clock = FrameClock::new(200);
        assert_eq!(clock.tick(), Duration::ZERO);
        let elapsed = clock.tick();
        assert!(elapsed >= Duration::from_millis(5));
    }
}
