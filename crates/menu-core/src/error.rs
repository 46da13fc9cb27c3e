//! Domain errors

use menu_shared::EntityId;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Menu not found: {0}")]
    MenuNotFound(EntityId),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(EntityId),

    #[error("Parent menu item not found: {0}")]
    ParentItemNotFound(EntityId),

    #[error("Cannot delete menu item with children: {0}")]
    MenuItemHasChildren(EntityId),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Caller-facing classification of a [`DomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Internal,
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::ValidationError(_) => ErrorKind::Validation,
            DomainError::MenuNotFound(_)
            | DomainError::MenuItemNotFound(_)
            | DomainError::ParentItemNotFound(_) => ErrorKind::NotFound,
            DomainError::MenuItemHasChildren(_) => ErrorKind::Conflict,
            DomainError::DatabaseError(_) | DomainError::InternalError(_) => ErrorKind::Internal,
        }
    }
}
