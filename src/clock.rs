use std::{thread::sleep, time::{Duration, Instant}};

/// Paces the game loop.
pub trait Clock {
    /// Blocks until the next tick is due.
    fn wait_tick(&mut self);

    fn pause(&mut self, duration: Duration);
}

/// Ticks `rate` times per second, sleeping only for whatever is left of the
/// interval after the previous tick's work.
pub struct FixedRateClock {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl FixedRateClock {
    pub fn new(rate: u32) -> Self {
        FixedRateClock { interval: Duration::from_secs(1) / rate.max(1), last_tick: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Clock for FixedRateClock {
    fn wait_tick(&mut self) {
        if let Some(last) = self.last_tick {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                sleep(self.interval - elapsed);
            }
        }

        self.last_tick = Some(Instant::now());
    }

    fn pause(&mut self, duration: Duration) {
        sleep(duration);
        self.last_tick = Some(Instant::now());
    }
}
