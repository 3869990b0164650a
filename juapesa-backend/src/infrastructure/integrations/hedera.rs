//! Hedera token service clients

use crate::application::ports::TokenService;
use crate::application::use_cases::ensure_positive;
use crate::domain::{DomainError, TokenReceipt};
use async_trait::async_trait;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct HederaStub {
    pub network: String,
}

impl Default for HederaStub {
    fn default() -> Self {
        Self {
            network: "testnet".to_string(),
        }
    }
}

#[async_trait]
impl TokenService for HederaStub {
    fn name(&self) -> &'static str {
        "hedera-stub"
    }

    async fn mint(&self, token: &str, amount: Decimal) -> Result<TokenReceipt, DomainError> {
        ensure_positive(amount)?;
        Ok(TokenReceipt {
            status: "minted".to_string(),
            token: token.to_string(),
            amount,
        })
    }

    async fn burn(&self, token: &str, amount: Decimal) -> Result<TokenReceipt, DomainError> {
        ensure_positive(amount)?;
        Ok(TokenReceipt {
            status: "burned".to_string(),
            token: token.to_string(),
            amount,
        })
    }
}

/// Live Hedera client placeholder. Mint/burn need receipt checks once wired.
#[cfg(feature = "live-integrations")]
#[derive(Debug, Clone)]
pub struct HederaLive {
    pub network: String,
}

#[cfg(feature = "live-integrations")]
impl Default for HederaLive {
    fn default() -> Self {
        Self {
            network: "mainnet".to_string(),
        }
    }
}

#[cfg(feature = "live-integrations")]
#[async_trait]
impl TokenService for HederaLive {
    fn name(&self) -> &'static str {
        "hedera-live"
    }

    async fn mint(&self, _token: &str, _amount: Decimal) -> Result<TokenReceipt, DomainError> {
        Err(DomainError::not_implemented(
            "Hedera live client not implemented",
        ))
    }

    async fn burn(&self, _token: &str, _amount: Decimal) -> Result<TokenReceipt, DomainError> {
        Err(DomainError::not_implemented(
            "Hedera live client not implemented",
        ))
    }
}
