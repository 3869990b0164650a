use crate::domain::{DomainError, TokenReceipt};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Port for token supply operations (Hedera token service)
#[async_trait]
pub trait TokenService: Send + Sync {
    fn name(&self) -> &'static str;

    async fn mint(&self, token: &str, amount: Decimal) -> Result<TokenReceipt, DomainError>;

    async fn burn(&self, token: &str, amount: Decimal) -> Result<TokenReceipt, DomainError>;
}
