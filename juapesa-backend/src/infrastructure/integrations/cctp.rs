//! Circle CCTP cross-chain clients

use crate::application::ports::CrossChainBridge;
use crate::application::use_cases::ensure_positive;
use crate::domain::{AttestationReceipt, BurnReceipt, DomainError, MintReceipt};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// CCTP stub: burn, attestation and mint all succeed immediately
#[derive(Debug, Clone)]
pub struct CctpStub {
    pub network: String,
}

impl Default for CctpStub {
    fn default() -> Self {
        Self {
            network: "testnet".to_string(),
        }
    }
}

#[async_trait]
impl CrossChainBridge for CctpStub {
    fn name(&self) -> &'static str {
        "cctp-stub"
    }

    async fn initiate_burn(
        &self,
        chain: &str,
        amount: Decimal,
    ) -> Result<BurnReceipt, DomainError> {
        ensure_positive(amount)?;
        Ok(BurnReceipt {
            status: "burn_initiated".to_string(),
            chain: chain.to_string(),
            amount,
            tx: format!("burn-{}-{}", chain, amount),
        })
    }

    async fn fetch_attestation(&self, burn_tx: &str) -> Result<AttestationReceipt, DomainError> {
        if burn_tx.is_empty() {
            return Err(DomainError::invalid_input("burn_tx required"));
        }
        Ok(AttestationReceipt {
            status: "attested".to_string(),
            burn_tx: burn_tx.to_string(),
            attestation: format!("att-{}", burn_tx),
        })
    }

    async fn mint_on_destination(
        &self,
        chain: &str,
        attestation: &str,
    ) -> Result<MintReceipt, DomainError> {
        if attestation.is_empty() {
            return Err(DomainError::invalid_input("attestation required"));
        }
        Ok(MintReceipt {
            status: "minted".to_string(),
            chain: chain.to_string(),
            attestation: attestation.to_string(),
        })
    }
}

/// Live CCTP client placeholder
#[cfg(feature = "live-integrations")]
#[derive(Debug, Clone)]
pub struct CctpLive {
    pub network: String,
}

#[cfg(feature = "live-integrations")]
impl Default for CctpLive {
    fn default() -> Self {
        Self {
            network: "mainnet".to_string(),
        }
    }
}

#[cfg(feature = "live-integrations")]
const CCTP_LIVE_MISSING: &str = "CCTP live client not implemented";

#[cfg(feature = "live-integrations")]
#[async_trait]
impl CrossChainBridge for CctpLive {
    fn name(&self) -> &'static str {
        "cctp-live"
    }

    async fn initiate_burn(
        &self,
        _chain: &str,
        _amount: Decimal,
    ) -> Result<BurnReceipt, DomainError> {
        Err(DomainError::not_implemented(CCTP_LIVE_MISSING))
    }

    async fn fetch_attestation(&self, _burn_tx: &str) -> Result<AttestationReceipt, DomainError> {
        Err(DomainError::not_implemented(CCTP_LIVE_MISSING))
    }

    async fn mint_on_destination(
        &self,
        _chain: &str,
        _attestation: &str,
    ) -> Result<MintReceipt, DomainError> {
        Err(DomainError::not_implemented(CCTP_LIVE_MISSING))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_stub_full_transfer() {
        let bridge = CctpStub::default();

        let burn = bridge.initiate_burn("ethereum", dec!(1.0)).await.unwrap();
        let att = bridge.fetch_attestation(&burn.tx).await.unwrap();
        let mint = bridge
            .mint_on_destination("hedera", &att.attestation)
            .await
            .unwrap();

        assert_eq!(burn.status, "burn_initiated");
        assert_eq!(burn.tx, "burn-ethereum-1.0");
        assert_eq!(att.status, "attested");
        assert_eq!(att.attestation, "att-burn-ethereum-1.0");
        assert_eq!(mint.status, "minted");
        assert_eq!(mint.chain, "hedera");
    }

    #[tokio::test]
    async fn test_stub_error_branches() {
        let bridge = CctpStub::default();

        assert!(bridge.initiate_burn("ethereum", dec!(0)).await.is_err());
        assert_eq!(
            bridge.fetch_attestation("").await.unwrap_err(),
            DomainError::invalid_input("burn_tx required")
        );
        assert_eq!(
            bridge.mint_on_destination("hedera", "").await.unwrap_err(),
            DomainError::invalid_input("attestation required")
        );
    }

    #[cfg(feature = "live-integrations")]
    #[tokio::test]
    async fn test_live_not_implemented() {
        let bridge = CctpLive::default();
        assert!(matches!(
            bridge.initiate_burn("ethereum", dec!(1)).await,
            Err(DomainError::NotImplemented(_))
        ));
        assert!(matches!(
            bridge.fetch_attestation("tx123").await,
            Err(DomainError::NotImplemented(_))
        ));
        assert!(matches!(
            bridge.mint_on_destination("hedera", "att").await,
            Err(DomainError::NotImplemented(_))
        ));
    }
}
