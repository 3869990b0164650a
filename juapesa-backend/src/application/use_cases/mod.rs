mod convert;
mod debit;
mod forecast;
mod kyc;
mod rebalance;
mod ussd;

pub use convert::{ConvertCommand, ConvertResult, ConvertUseCase};
pub use debit::{DebitCommand, DebitUseCase};
pub use forecast::{ForecastQuery, ForecastResult, ForecastUseCase};
pub use kyc::{KycCommand, KycUseCase};
pub use rebalance::{RebalanceCommand, RebalanceResult, RebalanceUseCase};
pub use ussd::{UssdAction, UssdCommand, UssdStep, UssdUseCase};

use crate::domain::DomainError;
use rust_decimal::Decimal;

/// Shared precondition for every money-moving command
pub(crate) fn ensure_positive(amount: Decimal) -> Result<(), DomainError> {
    if amount <= Decimal::ZERO {
        return Err(DomainError::invalid_input("amount must be positive"));
    }
    Ok(())
}
