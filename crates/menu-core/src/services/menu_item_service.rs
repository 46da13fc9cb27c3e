// ============================================================================
// Menu Core - Menu Item Service
// File: crates/menu-core/src/services/menu_item_service.rs
// ============================================================================
//! CRUD over menu items: parent validation, depth derivation, and the
//! leaf-only delete guard.

use std::collections::HashMap;
use std::sync::Arc;

use menu_shared::EntityId;
use tracing::{debug, info, warn};

use crate::domain::{
    Menu, MenuItem, MenuItemChanges, MenuItemDraft, MenuItemWithMenu, NewMenuItem,
};
use crate::error::DomainError;
use crate::repositories::{MenuItemRepository, MenuRepository};
use crate::tree::{build_hierarchy, TreeNode};

pub struct MenuItemService {
    item_repo: Arc<dyn MenuItemRepository>,
    menu_repo: Arc<dyn MenuRepository>,
}

impl MenuItemService {
    pub fn new(item_repo: Arc<dyn MenuItemRepository>, menu_repo: Arc<dyn MenuRepository>) -> Self {
        Self {
            item_repo,
            menu_repo,
        }
    }

    /// Create a menu item under `parent_id` (or as a root)
    ///
    /// Depth is always derived from the parent; nothing is persisted when
    /// the menu or the parent cannot be resolved.
    pub async fn create(
        &self,
        title: &str,
        menu_id: EntityId,
        parent_id: Option<EntityId>,
    ) -> Result<MenuItem, DomainError> {
        let new_item = NewMenuItem::new(title, menu_id, parent_id)?;

        // 1. Owning menu must exist
        self.require_menu(menu_id).await?;

        // 2. Parent must exist
        let parent = match parent_id {
            Some(pid) => Some(self.item_repo.find_by_id(pid).await?.ok_or_else(|| {
                warn!("Create rejected: parent menu item not found: {}", pid);
                DomainError::ParentItemNotFound(pid)
            })?),
            None => None,
        };

        // 3. Derive depth and persist
        let draft = MenuItemDraft::new(new_item, parent.as_ref())?;
        let created = self.item_repo.create(&draft).await?;

        info!(
            "Menu item created: id={} menu_id={} parent_id={:?} depth={}",
            created.id, created.menu_id, created.parent_id, created.depth
        );
        Ok(created)
    }

    /// Every item of every menu, each with its menu resolved
    pub async fn list(&self) -> Result<Vec<MenuItemWithMenu>, DomainError> {
        let menus: HashMap<EntityId, Menu> = self
            .menu_repo
            .list()
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        self.item_repo
            .list()
            .await?
            .into_iter()
            .map(|item| {
                let menu = menus.get(&item.menu_id).cloned().ok_or_else(|| {
                    DomainError::InternalError(format!(
                        "menu {} of item {} is missing",
                        item.menu_id, item.id
                    ))
                })?;
                Ok(MenuItemWithMenu { item, menu })
            })
            .collect()
    }

    pub async fn get(&self, id: EntityId) -> Result<MenuItemWithMenu, DomainError> {
        let item = self.find_item(id).await?;
        let menu = self.menu_repo.find_by_id(item.menu_id).await?.ok_or_else(|| {
            DomainError::InternalError(format!("menu {} of item {} is missing", item.menu_id, id))
        })?;
        Ok(MenuItemWithMenu { item, menu })
    }

    /// Partial update of `title`, `menu_id` and `depth`
    ///
    /// `depth` is stored as supplied and is not recomputed from the parent.
    /// A value that disagrees with the parent chain is logged, not rejected.
    pub async fn update(
        &self,
        id: EntityId,
        changes: MenuItemChanges,
    ) -> Result<MenuItem, DomainError> {
        let changes = changes.normalized()?;
        let mut item = self.find_item(id).await?;

        if let Some(menu_id) = changes.menu_id {
            self.require_menu(menu_id).await?;
        }

        if !changes.apply_to(&mut item) {
            debug!("Menu item {} unchanged, skipping write", id);
            return Ok(item);
        }
        item.updated_at = menu_shared::now();

        if changes.depth.is_some() {
            self.warn_on_depth_drift(&item).await?;
        }

        let updated = self.item_repo.update(&item).await?;
        info!("Menu item updated: id={}", updated.id);
        Ok(updated)
    }

    /// Delete a leaf item; items that still have children are rejected
    pub async fn delete(&self, id: EntityId) -> Result<(), DomainError> {
        let item = self.find_item(id).await?;

        let children = self.item_repo.count_children(item.id).await?;
        if children > 0 {
            warn!("Delete rejected: menu item {} has {} children", id, children);
            return Err(DomainError::MenuItemHasChildren(id));
        }

        if !self.item_repo.delete(id).await? {
            return Err(DomainError::MenuItemNotFound(id));
        }

        info!("Menu item deleted: id={}", id);
        Ok(())
    }

    /// The forest of one menu, as the tree builder reconstructs it
    pub async fn tree(&self, menu_id: EntityId) -> Result<Vec<TreeNode<MenuItem>>, DomainError> {
        self.require_menu(menu_id).await?;
        let items = self.item_repo.list_by_menu(menu_id).await?;
        Ok(build_hierarchy(items))
    }

    async fn find_item(&self, id: EntityId) -> Result<MenuItem, DomainError> {
        self.item_repo.find_by_id(id).await?.ok_or_else(|| {
            warn!("Menu item not found: {}", id);
            DomainError::MenuItemNotFound(id)
        })
    }

    async fn require_menu(&self, menu_id: EntityId) -> Result<Menu, DomainError> {
        self.menu_repo.find_by_id(menu_id).await?.ok_or_else(|| {
            warn!("Menu not found: {}", menu_id);
            DomainError::MenuNotFound(menu_id)
        })
    }

    async fn warn_on_depth_drift(&self, item: &MenuItem) -> Result<(), DomainError> {
        let parent = match item.parent_id {
            Some(pid) => match self.item_repo.find_by_id(pid).await? {
                Some(parent) => Some(parent),
                None => return Ok(()),
            },
            None => None,
        };

        let Some(expected) = MenuItem::depth_under(parent.as_ref()) else {
            return Ok(());
        };
        if item.depth != expected {
            warn!(
                "Menu item {} stored with depth {} but its parent chain implies {}",
                item.id, item.depth, expected
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu_item::fixtures::{item, menu};
    use crate::repositories::{MockMenuItemRepository, MockMenuRepository};
    use mockall::predicate::eq;

    fn menus_with(ids: &'static [EntityId]) -> MockMenuRepository {
        let mut repo = MockMenuRepository::new();
        repo.expect_find_by_id()
            .returning(move |id| Ok(ids.contains(&id).then(|| menu(id, "Main"))));
        repo
    }

    fn stored(draft: &MenuItemDraft, id: EntityId) -> MenuItem {
        MenuItem {
            title: draft.title.clone(),
            ..item(id, draft.menu_id, draft.parent_id, draft.depth)
        }
    }

    fn service(items: MockMenuItemRepository, menus: MockMenuRepository) -> MenuItemService {
        MenuItemService::new(Arc::new(items), Arc::new(menus))
    }

    #[tokio::test]
    async fn test_create_root_item_has_depth_zero() {
        let mut items = MockMenuItemRepository::new();
        items
            .expect_create()
            .withf(|d: &MenuItemDraft| d.depth == 0 && d.parent_id.is_none() && d.title == "Home")
            .times(1)
            .returning(|d| Ok(stored(d, 1)));

        let created = service(items, menus_with(&[1])).create("Home", 1, None).await.unwrap();
        assert_eq!(created.depth, 0);
        assert_eq!(created.parent_id, None);
    }

    #[tokio::test]
    async fn test_create_child_is_one_deeper_than_parent() {
        let mut items = MockMenuItemRepository::new();
        items
            .expect_find_by_id()
            .with(eq(7))
            .returning(|_| Ok(Some(item(7, 1, Some(3), 2))));
        items
            .expect_create()
            .withf(|d: &MenuItemDraft| d.depth == 3 && d.parent_id == Some(7))
            .times(1)
            .returning(|d| Ok(stored(d, 8)));

        let created = service(items, menus_with(&[1])).create("Team", 1, Some(7)).await.unwrap();
        assert_eq!(created.depth, 3);
    }

    #[tokio::test]
    async fn test_create_with_unknown_menu_persists_nothing() {
        let mut items = MockMenuItemRepository::new();
        items.expect_create().never();

        let err = service(items, menus_with(&[1])).create("Home", 5, None).await.unwrap_err();
        assert!(matches!(err, DomainError::MenuNotFound(5)));
    }

    #[tokio::test]
    async fn test_create_with_unknown_parent_persists_nothing() {
        let mut items = MockMenuItemRepository::new();
        items.expect_find_by_id().with(eq(99)).returning(|_| Ok(None));
        items.expect_create().never();

        let err = service(items, menus_with(&[1])).create("About", 1, Some(99)).await.unwrap_err();
        assert!(matches!(err, DomainError::ParentItemNotFound(99)));
    }

    #[tokio::test]
    async fn test_create_under_deepest_parent_is_rejected() {
        let mut items = MockMenuItemRepository::new();
        items
            .expect_find_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(item(1, 1, None, i32::MAX))));
        items.expect_create().never();

        let err = service(items, menus_with(&[1])).create("Child", 1, Some(1)).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_create_validates_before_any_lookup() {
        // No expectations: any store call would panic.
        let err = service(MockMenuItemRepository::new(), MockMenuRepository::new())
            .create(" ", 1, None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_delete_with_children_never_reaches_store_delete() {
        let mut items = MockMenuItemRepository::new();
        items.expect_find_by_id().with(eq(1)).returning(|_| Ok(Some(item(1, 1, None, 0))));
        items.expect_count_children().with(eq(1)).returning(|_| Ok(1));
        items.expect_delete().never();

        let err = service(items, MockMenuRepository::new()).delete(1).await.unwrap_err();
        assert!(matches!(err, DomainError::MenuItemHasChildren(1)));
    }

    #[tokio::test]
    async fn test_delete_leaf() {
        let mut items = MockMenuItemRepository::new();
        items.expect_find_by_id().with(eq(2)).returning(|_| Ok(Some(item(2, 1, Some(1), 1))));
        items.expect_count_children().with(eq(2)).returning(|_| Ok(0));
        items.expect_delete().with(eq(2)).times(1).returning(|_| Ok(true));

        service(items, MockMenuRepository::new()).delete(2).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_unknown_item() {
        let mut items = MockMenuItemRepository::new();
        items.expect_find_by_id().returning(|_| Ok(None));
        items.expect_count_children().never();

        let err = service(items, MockMenuRepository::new()).delete(3).await.unwrap_err();
        assert!(matches!(err, DomainError::MenuItemNotFound(3)));
    }

    #[tokio::test]
    async fn test_update_stores_depth_verbatim() {
        let mut items = MockMenuItemRepository::new();
        items.expect_find_by_id().with(eq(2)).returning(|_| Ok(Some(item(2, 1, Some(1), 1))));
        items.expect_find_by_id().with(eq(1)).returning(|_| Ok(Some(item(1, 1, None, 0))));
        items
            .expect_update()
            .withf(|i: &MenuItem| i.depth == 5 && i.parent_id == Some(1))
            .times(1)
            .returning(|i| Ok(i.clone()));

        let updated = service(items, MockMenuRepository::new())
            .update(2, MenuItemChanges::default().with_depth(5))
            .await
            .unwrap();
        assert_eq!(updated.depth, 5);
    }

    #[tokio::test]
    async fn test_update_checks_new_menu() {
        let mut items = MockMenuItemRepository::new();
        items.expect_find_by_id().with(eq(2)).returning(|_| Ok(Some(item(2, 1, Some(1), 1))));
        items.expect_update().never();

        let err = service(items, menus_with(&[1]))
            .update(2, MenuItemChanges::default().with_menu(4))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::MenuNotFound(4)));
    }

    #[tokio::test]
    async fn test_update_without_differences_skips_write() {
        let mut items = MockMenuItemRepository::new();
        items.expect_find_by_id().with(eq(2)).returning(|_| Ok(Some(item(2, 1, Some(1), 1))));
        items.expect_update().never();

        let unchanged = service(items, MockMenuRepository::new())
            .update(2, MenuItemChanges::default().with_title("Item 2"))
            .await
            .unwrap();
        assert_eq!(unchanged.title, "Item 2");
    }

    #[tokio::test]
    async fn test_list_resolves_menus() {
        let mut menus = MockMenuRepository::new();
        menus
            .expect_list()
            .returning(|| Ok(vec![menu(1, "Main"), menu(2, "Footer")]));
        let mut items = MockMenuItemRepository::new();
        items
            .expect_list()
            .returning(|| Ok(vec![item(1, 2, None, 0), item(2, 1, None, 0)]));

        let listed = service(items, menus).list().await.unwrap();
        assert_eq!(listed[0].menu.name, "Footer");
        assert_eq!(listed[1].menu.id, 1);
    }

    #[tokio::test]
    async fn test_tree_of_unknown_menu() {
        let mut items = MockMenuItemRepository::new();
        items.expect_list_by_menu().never();

        let err = service(items, menus_with(&[1])).tree(2).await.unwrap_err();
        assert!(matches!(err, DomainError::MenuNotFound(2)));
    }

    #[tokio::test]
    async fn test_tree_nests_children() {
        let mut items = MockMenuItemRepository::new();
        items.expect_list_by_menu().with(eq(1)).returning(|_| {
            Ok(vec![item(1, 1, None, 0), item(2, 1, Some(1), 1), item(3, 1, None, 0)])
        });

        let forest = service(items, menus_with(&[1])).tree(1).await.unwrap();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].children[0].item.id, 2);
        assert!(forest[1].children.is_empty());
    }
}
