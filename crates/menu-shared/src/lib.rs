//! # Menu Shared
//! 
//! Shared configuration, telemetry, and id types for the menu management service.

pub mod constants;
pub mod types;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
