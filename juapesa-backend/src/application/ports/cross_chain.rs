//! Cross-chain transfer port.
//!
//! A transfer is three steps: burn on the source chain, wait for an
//! attestation of the burn, then mint on the destination chain.

use crate::domain::{AttestationReceipt, BurnReceipt, DomainError, MintReceipt};
use async_trait::async_trait;
use rust_decimal::Decimal;

#[async_trait]
pub trait CrossChainBridge: Send + Sync {
    fn name(&self) -> &'static str;

    async fn initiate_burn(&self, chain: &str, amount: Decimal)
    -> Result<BurnReceipt, DomainError>;

    async fn fetch_attestation(&self, burn_tx: &str) -> Result<AttestationReceipt, DomainError>;

    async fn mint_on_destination(
        &self,
        chain: &str,
        attestation: &str,
    ) -> Result<MintReceipt, DomainError>;
}
