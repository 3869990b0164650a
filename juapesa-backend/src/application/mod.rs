pub mod ports;
pub mod use_cases;

pub use ports::{Cache, CrossChainBridge, MobileMoneyGateway, Summarizer, TokenService};
pub use use_cases::{
    ConvertCommand, ConvertResult, ConvertUseCase, DebitCommand, DebitUseCase, ForecastQuery,
    ForecastResult, ForecastUseCase, KycCommand, KycUseCase, RebalanceCommand, RebalanceResult,
    RebalanceUseCase, UssdAction, UssdCommand, UssdStep, UssdUseCase,
};
