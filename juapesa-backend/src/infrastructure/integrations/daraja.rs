//! M-Pesa Daraja gateway clients

use crate::application::ports::MobileMoneyGateway;
use crate::application::use_cases::ensure_positive;
use crate::domain::{DebitReceipt, DomainError};
use async_trait::async_trait;
use rust_decimal::Decimal;

pub const DARAJA_SANDBOX_URL: &str = "https://sandbox.safaricom.co.ke";
#[cfg(feature = "live-integrations")]
pub const DARAJA_LIVE_URL: &str = "https://api.safaricom.co.ke";

/// Daraja stub: queues every valid debit without contacting the gateway
#[derive(Debug, Clone)]
pub struct DarajaStub {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for DarajaStub {
    fn default() -> Self {
        Self {
            base_url: DARAJA_SANDBOX_URL.to_string(),
            api_key: None,
        }
    }
}

/// Reference of the form `daraja-{last 4 of phone}-{whole amount}`
fn debit_reference(phone: &str, amount: Decimal) -> String {
    let chars: Vec<char> = phone.chars().collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();

    format!("daraja-{}-{}", tail, amount.trunc().normalize())
}

#[async_trait]
impl MobileMoneyGateway for DarajaStub {
    fn name(&self) -> &'static str {
        "daraja-stub"
    }

    async fn simulate_debit(
        &self,
        phone: &str,
        amount: Decimal,
    ) -> Result<DebitReceipt, DomainError> {
        ensure_positive(amount)?;

        Ok(DebitReceipt {
            status: "queued".to_string(),
            reference: debit_reference(phone, amount),
        })
    }
}

/// Live Daraja client. OAuth token management, STK push and callback
/// validation are not wired yet.
#[cfg(feature = "live-integrations")]
#[derive(Debug, Clone)]
pub struct DarajaLive {
    pub base_url: String,
    pub api_key: Option<String>,
}

#[cfg(feature = "live-integrations")]
impl Default for DarajaLive {
    fn default() -> Self {
        Self {
            base_url: DARAJA_LIVE_URL.to_string(),
            api_key: None,
        }
    }
}

#[cfg(feature = "live-integrations")]
#[async_trait]
impl MobileMoneyGateway for DarajaLive {
    fn name(&self) -> &'static str {
        "daraja-live"
    }

    async fn simulate_debit(
        &self,
        _phone: &str,
        _amount: Decimal,
    ) -> Result<DebitReceipt, DomainError> {
        Err(DomainError::not_implemented(
            "Daraja live client not implemented",
        ))
    }
}
