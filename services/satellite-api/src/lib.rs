//! SmartAgroX Satellite API service library.
//!
//! Exposes configuration, state, handlers and the router so the binary and
//! the integration tests build the same application.

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
