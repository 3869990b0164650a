mod clock;
mod forecast_engine;
mod id_generator;
mod kyc_policy;

pub use clock::Clock;
pub use forecast_engine::{FORECAST_BUCKETS, FORECAST_OFFSET, FORECAST_SCALE, ForecastEngine};
pub use id_generator::IdGenerator;
pub use kyc_policy::{KYC_MIN_ID_LENGTH, KycDecision, KycPolicy};
