use serde::{Deserialize, Serialize};

/// Signed movement against a wallet in a single asset (`LOCAL`, `USDC`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: i64,
    pub wallet_id: i64,
    pub amount: f64,
    pub asset: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLedgerEntry {
    pub wallet_id: i64,
    pub amount: f64,
    pub asset: String,
    #[serde(default)]
    pub note: String,
}

impl NewLedgerEntry {
    pub fn new(wallet_id: i64, amount: f64, asset: impl Into<String>) -> Self {
        Self {
            wallet_id,
            amount,
            asset: asset.into(),
            note: String::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}
