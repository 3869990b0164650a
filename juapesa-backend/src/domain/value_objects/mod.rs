mod conversion_mode;
mod forecast_window;
mod kyc_status;

pub use conversion_mode::ConversionMode;
pub use forecast_window::ForecastWindow;
pub use kyc_status::KycStatus;

use chrono::{DateTime, Utc};

pub type Timestamp = DateTime<Utc>;
