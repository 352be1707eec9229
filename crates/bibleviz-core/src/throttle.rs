// crates/bibleviz-core/src/throttle.rs
use std::time::Duration;

/// Interval the journeys maps publish camera updates at.
pub const DEFAULT_THROTTLE_INTERVAL: Duration = Duration::from_millis(25);

/// Fixed-interval gate: the first call of an interval passes, the rest of
/// that interval are dropped.
///
/// The caller supplies the clock as time elapsed since any fixed origin, which
/// keeps the gate usable where `Instant` is not (wasm32).
///
/// ```rust
/// use bibleviz_core::throttle::Throttle;
/// use std::time::Duration;
///
/// let mut t = Throttle::default();
/// assert!(t.ready(Duration::from_millis(0)));
/// assert!(!t.ready(Duration::from_millis(10)));
/// assert!(t.ready(Duration::from_millis(25)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    interval: Duration,
    opened: Option<Duration>,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_INTERVAL)
    }
}

impl Throttle {
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            opened: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a call at `now` passes. A passing call starts a new interval.
    pub fn ready(&mut self, now: Duration) -> bool {
        let open = match self.opened {
            None => true,
            // A clock that went backwards also reopens the gate.
            Some(start) => now < start || now - start >= self.interval,
        };
        if open {
            self.opened = Some(now);
        }
        open
    }

    /// [`Throttle::ready`] with a millisecond clock such as `Date.now()`.
    /// NaN and negative readings count as zero; readings past the range of
    /// `Duration` saturate.
    pub fn ready_at_millis(&mut self, now_ms: f64) -> bool {
        let secs = now_ms / 1000.0;
        let now = if secs.is_nan() || secs <= 0.0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
        };
        self.ready(now)
    }

    pub fn reset(&mut self) {
        self.opened = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn drops_calls_inside_the_interval() {
        let mut t = Throttle::default();
        let passed: Vec<u64> = [0, 5, 24, 25, 30, 49, 50, 51]
            .into_iter()
            .filter(|&at| t.ready(ms(at)))
            .collect();
        assert_eq!(passed, [0, 25, 50]);
    }

    #[test]
    fn reset_reopens() {
        let mut t = Throttle::new(ms(100));
        assert!(t.ready(ms(10)));
        assert!(!t.ready(ms(20)));
        t.reset();
        assert!(t.ready(ms(20)));
    }

    #[test]
    fn millisecond_clock() {
        let mut t = Throttle::default();
        assert!(t.ready_at_millis(1_700_000_000_000.0));
        assert!(!t.ready_at_millis(1_700_000_000_010.0));
        assert!(t.ready_at_millis(1_700_000_000_030.0));
    }

    #[test]
    fn out_of_range_millis_saturate() {
        let mut t = Throttle::default();
        assert!(t.ready_at_millis(f64::INFINITY));
        assert!(!t.ready_at_millis(f64::INFINITY));
        assert!(!t.ready_at_millis(1e300));
        // Back to zero is a clock going backwards.
        assert!(t.ready_at_millis(f64::NAN));
        assert!(!t.ready_at_millis(-5.0));
        assert!(!t.ready_at_millis(f64::NEG_INFINITY));
    }
}
