use serde::{Deserialize, Serialize};

/// Named liquidity pool balance (unique by name)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityPoolRecord {
    pub id: i64,
    pub name: String,
    pub balance: f64,
}
