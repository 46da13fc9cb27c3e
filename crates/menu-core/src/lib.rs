//! # Menu Core
//! 
//! Domain entities, services, repository traits, and the tree builder for
//! hierarchical navigation menus.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod tree;
pub mod board;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::{DomainError, ErrorKind};
