//! REST API over axum.
//!
//! | Method | Path       | Auth     |
//! |--------|------------|----------|
//! | GET    | /agents    | public   |
//! | GET    | /weapons   | public   |
//! | POST   | /loadouts  | required |
//! | GET    | /loadouts  | required |
//! | GET    | /health    | public   |
//! | GET    | /stats     | public   |

pub mod dto;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use extractors::AuthenticatedOwner;
pub use routes::create_router;
pub use server::{ApiServer, ApiServerConfig};
pub use state::AppState;
