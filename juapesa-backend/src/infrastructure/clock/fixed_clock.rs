use crate::domain::{Clock, Timestamp};
use chrono::{Duration, Utc};
use parking_lot::RwLock;
use std::sync::Arc;

/// Clock that only moves when told to
///
/// Used by tests that assert on timestamps embedded in identifiers.
#[derive(Debug, Clone)]
pub struct FixedClock {
    inner: Arc<RwLock<Timestamp>>,
}

impl FixedClock {
    /// Create a clock pinned at the current wall-clock time
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Create a clock pinned at a specific time
    pub fn at(time: Timestamp) -> Self {
        FixedClock {
            inner: Arc::new(RwLock::new(time)),
        }
    }

    pub fn advance(&self, duration: Duration) {
        let mut now = self.inner.write();
        *now += duration;
    }

    pub fn set(&self, time: Timestamp) {
        *self.inner.write() = time;
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.inner.read()
    }

    fn name(&self) -> &str {
        "FixedClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_does_not_drift() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let clock = FixedClock::at(at);

        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(clock.now(), at);
    }

    #[test]
    fn test_advance_and_set() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let clock = FixedClock::at(at);

        clock.advance(Duration::milliseconds(250));
        assert_eq!(clock.now_millis(), at.timestamp_millis() + 250);

        clock.set(at);
        assert_eq!(clock.now(), at);
    }
}
