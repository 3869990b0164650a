use crate::domain::services::Clock;
use rand::Rng;
use std::sync::Arc;

/// Generates `"{prefix}-{unix_millis}-{NNNN}"` transaction identifiers
///
/// Uniqueness is probabilistic. Two ids minted in the same millisecond
/// collide with probability 1/9000.
pub struct IdGenerator<C: Clock> {
    clock: Arc<C>,
}

impl<C: Clock> IdGenerator<C> {
    pub fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }

    pub fn new_transaction_id(&self, prefix: &str) -> String {
        let suffix: u16 = rand::rng().random_range(1000..=9999);
        format!("{}-{}-{}", prefix, self.clock.now_millis(), suffix)
    }
}

impl<C: Clock> Clone for IdGenerator<C> {
    fn clone(&self) -> Self {
        Self {
            clock: Arc::clone(&self.clock),
        }
    }
}
