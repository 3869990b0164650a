//! External integration clients
//!
//! Every integration ships a stub that answers with canned receipts and,
//! behind the `live-integrations` feature, a live placeholder that fails
//! with `NotImplemented`. [`IntegrationRegistry`] picks one per integration
//! at startup.

mod cctp;
mod daraja;
mod hedera;
mod registry;

pub use cctp::CctpStub;
pub use daraja::DarajaStub;
pub use hedera::HederaStub;
pub use registry::IntegrationRegistry;

#[cfg(feature = "live-integrations")]
pub use cctp::CctpLive;
#[cfg(feature = "live-integrations")]
pub use daraja::DarajaLive;
#[cfg(feature = "live-integrations")]
pub use hedera::HederaLive;
