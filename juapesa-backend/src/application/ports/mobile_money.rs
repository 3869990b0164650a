use crate::domain::{DebitReceipt, DomainError};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Port for the mobile-money (Daraja) gateway
#[async_trait]
pub trait MobileMoneyGateway: Send + Sync {
    /// Short label used in logs ("daraja-stub", "daraja-live")
    fn name(&self) -> &'static str;

    /// Request a debit from the subscriber's mobile-money account
    async fn simulate_debit(&self, phone: &str, amount: Decimal)
    -> Result<DebitReceipt, DomainError>;
}
