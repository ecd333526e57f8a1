//! Frame-driven repeating timer.
//!
//! Timers do not run on their own: the owner advances them with the frame
//! delta and acts on what `tick` reports. Dropping or cancelling a timer is
//! the only teardown needed.

/// A repeating timer that fires every `period` seconds until cancelled.
#[derive(Debug, Clone)]
pub struct Interval {
    period: f32,
    elapsed: f32,
    cancelled: bool,
}

impl Interval {
    pub fn new(period: f32) -> Self {
        Self {
            period: period.max(f32::EPSILON),
            elapsed: 0.0,
            cancelled: false,
        }
    }

    /// Advances the timer and returns how many periods completed.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if self.cancelled {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }

    /// Starts the current period over.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.elapsed = 0.0;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_fires_once_per_period() {
        let mut interval = Interval::new(5.0);
        assert_eq!(interval.tick(4.9), 0);
        assert_eq!(interval.tick(0.2), 1);
        assert_eq!(interval.tick(10.0), 2);
    }

    #[test]
    fn restart_discards_partial_period() {
        let mut interval = Interval::new(1.0);
        interval.tick(0.9);
        interval.restart();
        assert_eq!(interval.tick(0.5), 0);
        assert_eq!(interval.tick(0.5), 1);
    }

    #[test]
    fn cancelled_interval_never_fires() {
        let mut interval = Interval::new(1.0);
        interval.cancel();
        assert!(interval.is_cancelled());
        assert_eq!(interval.tick(100.0), 0);
    }
}
