use crate::application::UssdAction;
use crate::domain::{ConversionMode, ForecastWindow, KycStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// USSD
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UssdRequest {
    pub session_id: String,
    pub phone: String,
    pub input: String,
    #[serde(default)]
    pub menu_state: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UssdResponse {
    pub prompt: String,
    pub next_menu_state: String,
    pub actions: Vec<UssdAction>,
}

// ============================================================================
// Conversion
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    pub user_id: String,
    pub from: ConvertSource,
    pub to: ConvertTarget,
    #[serde(default)]
    pub mode: ConversionMode,
}

/// Rail the funds leave from, e.g. `mpesa` with operator `safaricom`
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertSource {
    pub rail: String,
    #[serde(default)]
    pub operator: Option<String>,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertTarget {
    pub token: String,
    #[serde(default)]
    pub chain: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub status: String,
    pub tx_id: String,
    pub estimated_completion: String,
    pub fees: f64,
}

// ============================================================================
// Liquidity
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceRequest {
    pub source_pool: String,
    pub dest_pool: String,
    pub amount: Decimal,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub predicted_demand_window: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceResponse {
    pub order_id: String,
    pub status: String,
}

// ============================================================================
// KYC and mobile money
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycRequest {
    pub phone: String,
    pub id_number: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct KycResponse {
    pub status: KycStatus,
    pub level: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DebitRequest {
    pub phone: String,
    pub amount: Decimal,
}

// ============================================================================
// Forecast
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastRequest {
    pub operator: String,
    #[serde(default)]
    pub window: ForecastWindow,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub operator: String,
    pub window: ForecastWindow,
    pub predicted_net_flow: f64,
}

/// Window stays a raw string so an unknown value maps to a 400
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryQuery {
    #[serde(default)]
    pub window: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub operator: String,
    pub summary: String,
}

// ============================================================================
// Operational
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestAllResponse {
    pub ok: bool,
    pub services: Vec<&'static str>,
    pub version: &'static str,
}

/// Error body returned for every handled failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, detail: impl Into<String>) -> Self {
        ErrorResponse {
            code: code.into(),
            detail: detail.into(),
        }
    }
}
