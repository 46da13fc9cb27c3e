//! Menu repository trait (port)

use async_trait::async_trait;
use menu_shared::EntityId;

use crate::domain::{Menu, NewMenu};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// All menus in creation order.
    async fn list(&self) -> Result<Vec<Menu>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Menu>, DomainError>;
    async fn create(&self, menu: &NewMenu) -> Result<Menu, DomainError>;
}
