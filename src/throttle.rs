use std::time::Duration;

/// Time-window rate limiter.
///
/// An accepted call closes the gate for `window`; calls arriving while the
/// gate is closed are dropped, not deferred. Timestamps are monotonic
/// offsets from page start as reported by the host.
#[derive(Debug, Clone)]
pub struct Throttle {
    window: Duration,
    closed_until: Option<Duration>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            closed_until: None,
        }
    }

    /// Returns `true` when the call at `now` may run.
    pub fn try_acquire(&mut self, now: Duration) -> bool {
        if let Some(until) = self.closed_until {
            if now < until {
                return false;
            }
        }
        self.closed_until = Some(now + self.window);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::Throttle;
    use std::time::Duration;

    #[test]
    fn drops_calls_inside_window() {
        let mut throttle = Throttle::new(Duration::from_millis(100));
        assert!(throttle.try_acquire(Duration::from_millis(0)));
        assert!(!throttle.try_acquire(Duration::from_millis(60)));
        assert!(throttle.try_acquire(Duration::from_millis(150)));
    }

    #[test]
    fn window_boundary_reopens_gate() {
        let mut throttle = Throttle::new(Duration::from_millis(100));
        assert!(throttle.try_acquire(Duration::from_millis(20)));
        assert!(!throttle.try_acquire(Duration::from_millis(119)));
        assert!(throttle.try_acquire(Duration::from_millis(120)));
        assert!(!throttle.try_acquire(Duration::from_millis(200)));
    }

    #[test]
    fn dropped_calls_do_not_extend_window() {
        let mut throttle = Throttle::new(Duration::from_millis(100));
        assert!(throttle.try_acquire(Duration::ZERO));
        for ms in (10..100).step_by(10) {
            assert!(!throttle.try_acquire(Duration::from_millis(ms)));
        }
        assert!(throttle.try_acquire(Duration::from_millis(100)));
    }
}
