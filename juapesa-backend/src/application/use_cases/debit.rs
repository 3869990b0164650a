use crate::application::ports::MobileMoneyGateway;
use crate::domain::{DebitReceipt, DomainError};
use rust_decimal::Decimal;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DebitCommand {
    pub phone: String,
    pub amount: Decimal,
}

/// Mobile-money debit through whichever gateway the registry resolved
pub struct DebitUseCase<G: MobileMoneyGateway + ?Sized> {
    gateway: Arc<G>,
}

impl<G: MobileMoneyGateway + ?Sized> DebitUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, command: DebitCommand) -> Result<DebitReceipt, DomainError> {
        let receipt = self
            .gateway
            .simulate_debit(&command.phone, command.amount)
            .await?;

        tracing::info!(
            gateway = self.gateway.name(),
            reference = %receipt.reference,
            status = %receipt.status,
            "Debit requested"
        );

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::integrations::DarajaStub;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_debit_via_stub() {
        let use_case = DebitUseCase::new(Arc::new(DarajaStub::default()));
        let receipt = use_case
            .execute(DebitCommand {
                phone: "+254700000001".to_string(),
                amount: dec!(10.5),
            })
            .await
            .unwrap();

        assert_eq!(receipt.status, "queued");
        assert_eq!(receipt.reference, "daraja-0001-10");
    }

    #[tokio::test]
    async fn test_debit_through_trait_object() {
        let gateway: Arc<dyn MobileMoneyGateway> = Arc::new(DarajaStub::default());
        let use_case = DebitUseCase::new(gateway);
        let err = use_case
            .execute(DebitCommand {
                phone: "+254700000001".to_string(),
                amount: dec!(0),
            })
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::invalid_input("amount must be positive"));
    }
}
