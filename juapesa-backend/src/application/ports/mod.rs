mod cache;
mod cross_chain;
mod mobile_money;
mod summarizer;
mod token_service;

pub use cache::Cache;
pub use cross_chain::CrossChainBridge;
pub use mobile_money::MobileMoneyGateway;
pub use summarizer::Summarizer;
pub use token_service::TokenService;
