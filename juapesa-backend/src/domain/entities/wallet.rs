use serde::{Deserialize, Serialize};

/// Per-user balances in local currency and USDC
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: i64,
    pub user_id: i64,
    pub balance_local: f64,
    pub balance_usdc: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewWallet {
    pub user_id: i64,
    #[serde(default)]
    pub balance_local: f64,
    #[serde(default)]
    pub balance_usdc: f64,
}

impl NewWallet {
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }

    pub fn with_balances(mut self, local: f64, usdc: f64) -> Self {
        self.balance_local = local;
        self.balance_usdc = usdc;
        self
    }
}
