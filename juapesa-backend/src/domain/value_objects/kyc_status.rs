use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KycStatus {
    Approved,
    Pending,
    Rejected,
}

impl KycStatus {
    pub fn is_approved(&self) -> bool {
        matches!(self, KycStatus::Approved)
    }
}

impl fmt::Display for KycStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KycStatus::Approved => write!(f, "approved"),
            KycStatus::Pending => write!(f, "pending"),
            KycStatus::Rejected => write!(f, "rejected"),
        }
    }
}
