use serde::{Deserialize, Serialize};
use std::fmt;

/// Settlement speed requested for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    #[default]
    Fast,
    Standard,
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionMode::Fast => write!(f, "fast"),
            ConversionMode::Standard => write!(f, "standard"),
        }
    }
}
