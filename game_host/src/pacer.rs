use std::time::{Duration, Instant};

/// What the loop should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// Run one tick; carries the measured time since the previous tick
    Tick(Duration),
    /// Too early; sleep this long before polling again
    Idle(Duration),
}

/// Fixed-cadence frame pacing
///
/// At most one tick per poll. The reference clock jumps to the poll time on
/// each tick, so a late frame is not made up with extra ticks; it just
/// reports a longer elapsed time.
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Duration,
    last: Instant,
}

impl FramePacer {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self { period, last: now }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn poll(&mut self, now: Instant) -> Pace {
        let elapsed = now.saturating_duration_since(self.last);
        if elapsed >= self.period {
            self.last = now;
            Pace::Tick(elapsed)
        } else {
            Pace::Idle(self.period - elapsed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(16);

    #[test]
    fn test_idle_before_first_period() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(PERIOD, start);

        let pace = pacer.poll(start + Duration::from_millis(10));

        assert_eq!(pace, Pace::Idle(Duration::from_millis(6)));
    }

    #[test]
    fn test_tick_reports_measured_elapsed() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(PERIOD, start);

        let pace = pacer.poll(start + Duration::from_millis(40));

        assert_eq!(pace, Pace::Tick(Duration::from_millis(40)));
    }

    #[test]
    fn test_late_frame_is_not_made_up() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(PERIOD, start);

        assert!(matches!(
            pacer.poll(start + Duration::from_millis(50)),
            Pace::Tick(_)
        ));
        // Clock moved to the poll time, not by one period
        assert_eq!(
            pacer.poll(start + Duration::from_millis(51)),
            Pace::Idle(Duration::from_millis(15))
        );
    }

    #[test]
    fn test_exact_period_ticks() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(PERIOD, start);
        assert_eq!(pacer.poll(start + PERIOD), Pace::Tick(PERIOD));
    }

    #[test]
    fn test_clock_going_backwards_idles() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut pacer = FramePacer::new(PERIOD, start);
        assert_eq!(pacer.poll(start - Duration::from_millis(5)), Pace::Idle(PERIOD));
    }
}
