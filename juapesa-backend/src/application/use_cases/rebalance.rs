use super::ensure_positive;
use crate::domain::{Clock, DomainError, IdGenerator};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Move liquidity between two named pools
#[derive(Debug, Clone)]
pub struct RebalanceCommand {
    pub source_pool: String,
    pub dest_pool: String,
    pub amount: Decimal,
    pub reason: Option<String>,
    /// Forecast window that motivated the move, recorded as given
    pub predicted_demand_window: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebalanceResult {
    pub order_id: String,
    pub status: &'static str,
}

pub struct RebalanceUseCase<C: Clock> {
    ids: IdGenerator<C>,
}

impl<C: Clock> RebalanceUseCase<C> {
    pub const STATUS_PLACED: &'static str = "placed";

    pub fn new(clock: Arc<C>) -> Self {
        Self {
            ids: IdGenerator::new(clock),
        }
    }

    pub fn execute(&self, command: RebalanceCommand) -> Result<RebalanceResult, DomainError> {
        ensure_positive(command.amount)?;

        let order_id = self.ids.new_transaction_id("rb");

        tracing::info!(
            order_id = %order_id,
            source_pool = %command.source_pool,
            dest_pool = %command.dest_pool,
            amount = %command.amount,
            reason = command.reason.as_deref().unwrap_or("-"),
            window = command.predicted_demand_window.as_deref().unwrap_or("-"),
            "Rebalance order placed"
        );

        Ok(RebalanceResult {
            order_id,
            status: Self::STATUS_PLACED,
        })
    }
}
