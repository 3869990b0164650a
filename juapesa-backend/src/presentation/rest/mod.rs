mod dto;
mod error;
mod handlers;
mod middleware;
mod ops_handlers;
mod router;

pub use dto::*;
pub use error::ApiError;
pub use middleware::REQUEST_ID_HEADER;
pub use router::{AppState, create_router};
