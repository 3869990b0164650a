use crate::domain::value_objects::Timestamp;

/// Basic clock trait - provides current time
///
/// Identifier generation reads time through this trait so tests can pin it.
pub trait Clock: Send + Sync {
    /// Get current time from this clock's perspective
    fn now(&self) -> Timestamp;

    /// Get current time as milliseconds since Unix epoch
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }

    /// Name of this clock (for debugging)
    fn name(&self) -> &str {
        "Clock"
    }
}
