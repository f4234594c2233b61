//! HTTP API for the cafe operations engine.
//!
//! Built on axum: a router over the shared [`AppState`], request types
//! with boundary validation, and a uniform error response shape.

mod handlers;
pub mod request;
pub mod response;
mod state;

pub use handlers::create_router;
pub use state::AppState;
