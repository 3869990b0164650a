//! Results returned by integration clients

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Mobile-money debit acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebitReceipt {
    pub status: String,
    #[serde(rename = "ref")]
    pub reference: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnReceipt {
    pub status: String,
    pub chain: String,
    pub amount: Decimal,
    pub tx: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationReceipt {
    pub status: String,
    pub burn_tx: String,
    pub attestation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintReceipt {
    pub status: String,
    pub chain: String,
    pub attestation: String,
}

/// Token service mint/burn acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenReceipt {
    pub status: String,
    pub token: String,
    pub amount: Decimal,
}
