//! sqlx error translation shared by the PostgreSQL repositories

use menu_core::error::DomainError;
use tracing::error;

pub(crate) const MENU_FK: &str = "menu_items_menu_id_fkey";
pub(crate) const PARENT_FK: &str = "menu_items_parent_id_fkey";

/// Name of the foreign key `e` violated, if it is a foreign-key violation.
pub(crate) fn violated_foreign_key(e: &sqlx::Error) -> Option<String> {
    let db = e.as_database_error()?;
    if db.is_foreign_key_violation() {
        db.constraint().map(str::to_owned)
    } else {
        None
    }
}

pub(crate) fn database_error(action: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", action, e);
    DomainError::DatabaseError(e.to_string())
}
