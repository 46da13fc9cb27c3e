//! # Menu Infrastructure
//! 
//! Tree Store implementations (adapters): PostgreSQL and in-memory.

pub mod database;
pub mod memory;

pub use database::{create_pool, run_migrations, PgMenuItemRepository, PgMenuRepository};
pub use memory::MemoryStore;
