use serde::{Deserialize, Serialize};

/// Registered mobile-money customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Unique, at most 32 characters
    pub phone: String,
    pub pin_hash: String,
    pub kyc_level: i64,
}

/// User fields supplied on insert; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub phone: String,
    pub pin_hash: String,
    #[serde(default)]
    pub kyc_level: i64,
}

impl NewUser {
    pub fn new(phone: impl Into<String>, pin_hash: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            pin_hash: pin_hash.into(),
            kyc_level: 0,
        }
    }

    pub fn with_kyc_level(mut self, level: i64) -> Self {
        self.kyc_level = level;
        self
    }
}
