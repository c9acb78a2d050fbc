use std::time::{Duration, Instant};

/// Fixed-cadence trigger. Fires at most once per poll however late the poll
/// is, and keeps the phase of the original schedule.
pub struct Ticker {
    interval: Duration,
    then: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, start: Instant) -> Self {
        Ticker { interval, then: start }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True when more than one interval has passed since the last firing.
    pub fn poll(&mut self, now: Instant) -> bool {
        let delta = now.saturating_duration_since(self.then);
        if delta <= self.interval {
            return false;
        }

        let nanos = self.interval.as_nanos().max(1);
        let late = Duration::from_nanos((delta.as_nanos() % nanos) as u64);
        self.then = now.checked_sub(late).unwrap_or(now);
        true
    }

    /// How long until `poll` can next return true.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.interval.saturating_sub(now.saturating_duration_since(self.then))
    }

    /// Restarts the schedule, e.g. after a pause.
    pub fn reset(&mut self, now: Instant) {
        self.then = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn fires_after_the_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(100 * MS, start);
        assert!(!ticker.poll(start + 50 * MS));
        assert!(!ticker.poll(start + 100 * MS));
        assert!(ticker.poll(start + 101 * MS));
        assert!(!ticker.poll(start + 150 * MS));
    }

    #[test]
    fn late_poll_fires_once_and_keeps_phase() {
        let start = Instant::now();
        let mut ticker = Ticker::new(100 * MS, start);
        assert!(ticker.poll(start + 350 * MS));
        assert!(!ticker.poll(start + 360 * MS));
        // Phase anchored at 300ms, so the next firing is just after 400ms
        assert!(!ticker.poll(start + 400 * MS));
        assert!(ticker.poll(start + 401 * MS));
    }

    #[test]
    fn remaining_counts_down() {
        let start = Instant::now();
        let ticker = Ticker::new(100 * MS, start);
        assert_eq!(ticker.remaining(start + 30 * MS), 70 * MS);
        assert_eq!(ticker.remaining(start + 130 * MS), Duration::ZERO);
        assert_eq!(ticker.interval(), 100 * MS);
    }

    #[test]
    fn reset_restarts_the_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(100 * MS, start);
        ticker.reset(start + 500 * MS);
        assert!(!ticker.poll(start + 550 * MS));
        assert!(ticker.poll(start + 601 * MS));
    }
}
