use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Horizon over which a net-flow forecast is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ForecastWindow {
    #[serde(rename = "1h")]
    OneHour,
    #[default]
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "24h")]
    OneDay,
}

impl ForecastWindow {
    pub const ALL: [ForecastWindow; 3] = [
        ForecastWindow::OneHour,
        ForecastWindow::FourHours,
        ForecastWindow::OneDay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastWindow::OneHour => "1h",
            ForecastWindow::FourHours => "4h",
            ForecastWindow::OneDay => "24h",
        }
    }
}

impl fmt::Display for ForecastWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ForecastWindow {
    type Error = DomainError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "1h" => Ok(ForecastWindow::OneHour),
            "4h" => Ok(ForecastWindow::FourHours),
            "24h" => Ok(ForecastWindow::OneDay),
            _ => Err(DomainError::invalid_input("invalid window")),
        }
    }
}

impl FromStr for ForecastWindow {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ForecastWindow::try_from(s)
    }
}
