//! Stub/live client selection, resolved once at startup

use super::{CctpStub, DarajaStub, HederaStub};
use crate::application::ports::{CrossChainBridge, MobileMoneyGateway, TokenService};
use crate::infrastructure::config::IntegrationsConfig;
use std::sync::Arc;

/// Resolved integration clients shared by request handlers
#[derive(Clone)]
pub struct IntegrationRegistry {
    pub mobile_money: Arc<dyn MobileMoneyGateway>,
    pub cross_chain: Arc<dyn CrossChainBridge>,
    pub tokens: Arc<dyn TokenService>,
}

impl IntegrationRegistry {
    /// Stub unless the flag asks for live and the live client is compiled in
    pub fn from_config(config: &IntegrationsConfig) -> Self {
        let mobile_money: Arc<dyn MobileMoneyGateway> = if config.use_stub_daraja {
            Arc::new(DarajaStub::default())
        } else {
            live::mobile_money().unwrap_or_else(|| {
                tracing::warn!("Daraja live client unavailable, falling back to stub");
                Arc::new(DarajaStub::default())
            })
        };

        let cross_chain: Arc<dyn CrossChainBridge> = if config.use_stub_cctp {
            Arc::new(CctpStub::default())
        } else {
            live::cross_chain().unwrap_or_else(|| {
                tracing::warn!("CCTP live client unavailable, falling back to stub");
                Arc::new(CctpStub::default())
            })
        };

        let tokens: Arc<dyn TokenService> = if config.use_stub_hedera {
            Arc::new(HederaStub::default())
        } else {
            live::tokens().unwrap_or_else(|| {
                tracing::warn!("Hedera live client unavailable, falling back to stub");
                Arc::new(HederaStub::default())
            })
        };

        tracing::info!(
            mobile_money = mobile_money.name(),
            cross_chain = cross_chain.name(),
            tokens = tokens.name(),
            "Integrations resolved"
        );

        Self {
            mobile_money,
            cross_chain,
            tokens,
        }
    }

    /// All stubs, regardless of configuration
    pub fn stubs() -> Self {
        Self::from_config(&IntegrationsConfig::default())
    }

    /// Names of the selected clients, in registry order
    pub fn selection(&self) -> [&'static str; 3] {
        [
            self.mobile_money.name(),
            self.cross_chain.name(),
            self.tokens.name(),
        ]
    }
}

#[cfg(feature = "live-integrations")]
mod live {
    use crate::application::ports::{CrossChainBridge, MobileMoneyGateway, TokenService};
    use crate::infrastructure::integrations::{CctpLive, DarajaLive, HederaLive};
    use std::sync::Arc;

    pub fn mobile_money() -> Option<Arc<dyn MobileMoneyGateway>> {
        Some(Arc::new(DarajaLive::default()))
    }

    pub fn cross_chain() -> Option<Arc<dyn CrossChainBridge>> {
        Some(Arc::new(CctpLive::default()))
    }

    pub fn tokens() -> Option<Arc<dyn TokenService>> {
        Some(Arc::new(HederaLive::default()))
    }
}

#[cfg(not(feature = "live-integrations"))]
mod live {
    use crate::application::ports::{CrossChainBridge, MobileMoneyGateway, TokenService};
    use std::sync::Arc;

    pub fn mobile_money() -> Option<Arc<dyn MobileMoneyGateway>> {
        None
    }

    pub fn cross_chain() -> Option<Arc<dyn CrossChainBridge>> {
        None
    }

    pub fn tokens() -> Option<Arc<dyn TokenService>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_resolve_to_stubs() {
        let registry = IntegrationRegistry::from_config(&IntegrationsConfig::default());
        assert_eq!(
            registry.selection(),
            ["daraja-stub", "cctp-stub", "hedera-stub"]
        );
    }

    #[test]
    fn test_mixed_flags() {
        let registry = IntegrationRegistry::from_config(&IntegrationsConfig {
            use_stub_daraja: true,
            use_stub_cctp: false,
            use_stub_hedera: true,
        });
        assert_eq!(registry.mobile_money.name(), "daraja-stub");
        assert_eq!(registry.tokens.name(), "hedera-stub");
    }

    #[cfg(feature = "live-integrations")]
    #[tokio::test]
    async fn test_live_flags_select_live_clients() {
        let registry = IntegrationRegistry::from_config(&IntegrationsConfig::all_live());
        assert_eq!(
            registry.selection(),
            ["daraja-live", "cctp-live", "hedera-live"]
        );

        let err = registry
            .mobile_money
            .simulate_debit("+254700000000", dec!(1))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotImplemented(_)));
    }

    #[cfg(not(feature = "live-integrations"))]
    #[tokio::test]
    async fn test_live_flags_fall_back_without_live_clients() {
        let registry = IntegrationRegistry::from_config(&IntegrationsConfig::all_live());
        assert_eq!(
            registry.selection(),
            ["daraja-stub", "cctp-stub", "hedera-stub"]
        );

        let receipt = registry
            .mobile_money
            .simulate_debit("+254700000000", dec!(1))
            .await;
        assert!(!matches!(receipt, Err(DomainError::NotImplemented(_))));
    }
}
