//! # Menu API
//! 
//! HTTP handlers, typed request DTOs, extractors, and middleware.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
