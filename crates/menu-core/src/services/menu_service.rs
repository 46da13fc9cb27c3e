// ============================================================================
// Menu Core - Menu Service
// File: crates/menu-core/src/services/menu_service.rs
// ============================================================================
//! CRUD over menus. Menus carry a name only; hierarchy lives on items.

use std::sync::Arc;

use menu_shared::EntityId;
use tracing::{info, warn};

use crate::domain::{Menu, NewMenu};
use crate::error::DomainError;
use crate::repositories::MenuRepository;

pub struct MenuService {
    menu_repo: Arc<dyn MenuRepository>,
}

impl MenuService {
    pub fn new(menu_repo: Arc<dyn MenuRepository>) -> Self {
        Self { menu_repo }
    }

    /// Create a menu with an empty item set
    pub async fn create(&self, name: &str) -> Result<Menu, DomainError> {
        let new_menu = NewMenu::new(name)?;
        let menu = self.menu_repo.create(&new_menu).await?;

        info!("Menu created: id={} name={}", menu.id, menu.name);
        Ok(menu)
    }

    pub async fn list(&self) -> Result<Vec<Menu>, DomainError> {
        self.menu_repo.list().await
    }

    pub async fn get(&self, id: EntityId) -> Result<Menu, DomainError> {
        self.menu_repo.find_by_id(id).await?.ok_or_else(|| {
            warn!("Menu not found: {}", id);
            DomainError::MenuNotFound(id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu_item::fixtures::menu;
    use crate::repositories::MockMenuRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_create_persists_trimmed_name() {
        let mut repo = MockMenuRepository::new();
        repo.expect_create()
            .withf(|m: &NewMenu| m.name == "Main")
            .times(1)
            .returning(|m| Ok(menu(1, &m.name)));

        let service = MenuService::new(Arc::new(repo));
        let created = service.create("  Main ").await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Main");
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_name_without_store_call() {
        let mut repo = MockMenuRepository::new();
        repo.expect_create().never();

        let service = MenuService::new(Arc::new(repo));
        let err = service.create("").await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));

        let err = service.create(&"m".repeat(256)).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_get_unknown_menu() {
        let mut repo = MockMenuRepository::new();
        repo.expect_find_by_id().with(eq(42)).returning(|_| Ok(None));

        let service = MenuService::new(Arc::new(repo));
        let err = service.get(42).await.unwrap_err();
        assert!(matches!(err, DomainError::MenuNotFound(42)));
    }

    #[tokio::test]
    async fn test_list_passes_store_order_through() {
        let mut repo = MockMenuRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![menu(1, "Main"), menu(2, "Footer")]));

        let service = MenuService::new(Arc::new(repo));
        let names: Vec<String> = service.list().await.unwrap().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Main", "Footer"]);
    }
}
