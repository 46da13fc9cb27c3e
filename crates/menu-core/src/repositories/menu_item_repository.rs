//! Menu item repository trait (port)
//!
//! Implementations are the authority for referential integrity: an insert
//! with an unknown menu or parent and a delete of an item that still has
//! children must both be rejected by the store itself.

use async_trait::async_trait;
use menu_shared::EntityId;

use crate::domain::{MenuItem, MenuItemDraft};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// All items of all menus in creation order.
    async fn list(&self) -> Result<Vec<MenuItem>, DomainError>;
    async fn list_by_menu(&self, menu_id: EntityId) -> Result<Vec<MenuItem>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<MenuItem>, DomainError>;
    async fn create(&self, draft: &MenuItemDraft) -> Result<MenuItem, DomainError>;
    /// Persists `title`, `menu_id`, `depth` and `updated_at` of an existing item.
    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError>;
    async fn count_children(&self, id: EntityId) -> Result<i64, DomainError>;
    /// Returns `false` when no row with `id` existed.
    async fn delete(&self, id: EntityId) -> Result<bool, DomainError>;
}
