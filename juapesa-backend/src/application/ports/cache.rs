use crate::domain::DomainError;
use async_trait::async_trait;
use std::time::Duration;

/// String key/value cache
///
/// No atomicity is promised across keys. Single-key operations are atomic
/// in the in-process backend.
#[async_trait]
pub trait Cache: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;

    /// Store a value, optionally expiring after `ttl`
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>);

    /// Increment an integer counter, treating a missing key as 0
    async fn incr(&self, key: &str) -> Result<i64, DomainError>;

    /// Reset the expiry of an existing key. Returns false when the key is absent.
    async fn expire(&self, key: &str, ttl: Duration) -> bool;
}
