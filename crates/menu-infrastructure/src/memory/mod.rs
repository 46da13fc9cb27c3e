//! In-memory Tree Store
//!
//! An arena of menus and items keyed by id. It enforces the same rules as
//! the SQL schema: inserts need an existing menu and parent, and an item
//! that still has children cannot be removed.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, info, warn};

use menu_core::domain::{Menu, MenuItem, MenuItemDraft, NewMenu};
use menu_core::error::DomainError;
use menu_core::repositories::{MenuItemRepository, MenuRepository};
use menu_shared::EntityId;

#[derive(Debug, Default)]
struct StoreState {
    menus: BTreeMap<EntityId, Menu>,
    items: BTreeMap<EntityId, MenuItem>,
    last_menu_id: EntityId,
    last_item_id: EntityId,
}

/// Thread-safe in-memory store implementing both repository ports.
/// Ids are sequential from 1, so id order is creation order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        info!("Initializing in-memory menu store");
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn item_count(&self) -> usize {
        self.state.read().items.len()
    }
}

#[async_trait]
impl MenuRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Menu>, DomainError> {
        Ok(self.state.read().menus.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Menu>, DomainError> {
        Ok(self.state.read().menus.get(&id).cloned())
    }

    async fn create(&self, menu: &NewMenu) -> Result<Menu, DomainError> {
        let mut state = self.state.write();
        state.last_menu_id += 1;

        let now = menu_shared::now();
        let created = Menu {
            id: state.last_menu_id,
            name: menu.name.clone(),
            created_at: now,
            updated_at: now,
        };
        state.menus.insert(created.id, created.clone());

        debug!("Stored menu {}", created.id);
        Ok(created)
    }
}

#[async_trait]
impl MenuItemRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<MenuItem>, DomainError> {
        Ok(self.state.read().items.values().cloned().collect())
    }

    async fn list_by_menu(&self, menu_id: EntityId) -> Result<Vec<MenuItem>, DomainError> {
        Ok(self
            .state
            .read()
            .items
            .values()
            .filter(|item| item.menu_id == menu_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<MenuItem>, DomainError> {
        Ok(self.state.read().items.get(&id).cloned())
    }

    async fn create(&self, draft: &MenuItemDraft) -> Result<MenuItem, DomainError> {
        let mut state = self.state.write();
        if !state.menus.contains_key(&draft.menu_id) {
            return Err(DomainError::MenuNotFound(draft.menu_id));
        }
        if let Some(parent_id) = draft.parent_id {
            if !state.items.contains_key(&parent_id) {
                return Err(DomainError::ParentItemNotFound(parent_id));
            }
        }

        state.last_item_id += 1;
        let now = menu_shared::now();
        let created = MenuItem {
            id: state.last_item_id,
            title: draft.title.clone(),
            menu_id: draft.menu_id,
            parent_id: draft.parent_id,
            depth: draft.depth,
            created_at: now,
            updated_at: now,
        };
        state.items.insert(created.id, created.clone());

        debug!("Stored menu item {}", created.id);
        Ok(created)
    }

    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let mut state = self.state.write();
        if !state.menus.contains_key(&item.menu_id) {
            return Err(DomainError::MenuNotFound(item.menu_id));
        }

        let stored = state
            .items
            .get_mut(&item.id)
            .ok_or(DomainError::MenuItemNotFound(item.id))?;
        stored.title = item.title.clone();
        stored.menu_id = item.menu_id;
        stored.depth = item.depth;
        stored.updated_at = item.updated_at;
        Ok(stored.clone())
    }

    async fn count_children(&self, id: EntityId) -> Result<i64, DomainError> {
        let count = self
            .state
            .read()
            .items
            .values()
            .filter(|item| item.parent_id == Some(id))
            .count();
        Ok(count as i64)
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        let mut state = self.state.write();
        if state.items.values().any(|item| item.parent_id == Some(id)) {
            warn!("Store refused delete of menu item {}: children exist", id);
            return Err(DomainError::MenuItemHasChildren(id));
        }
        Ok(state.items.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(menu_id: EntityId, parent_id: Option<EntityId>, depth: i32) -> MenuItemDraft {
        MenuItemDraft {
            title: "Home".to_string(),
            menu_id,
            parent_id,
            depth,
        }
    }

    async fn store_with_menu() -> MemoryStore {
        let store = MemoryStore::new();
        MenuRepository::create(&store, &NewMenu::new("Main").unwrap())
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_sequential_ids_in_creation_order() {
        let store = store_with_menu().await;
        let second = MenuRepository::create(&store, &NewMenu::new("Footer").unwrap())
            .await
            .unwrap();
        assert_eq!(second.id, 2);

        let names: Vec<String> = MenuRepository::list(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Main", "Footer"]);
    }

    #[tokio::test]
    async fn test_insert_requires_menu_and_parent() {
        let store = store_with_menu().await;

        let err = MenuItemRepository::create(&store, &draft(9, None, 0)).await.unwrap_err();
        assert!(matches!(err, DomainError::MenuNotFound(9)));

        let err = MenuItemRepository::create(&store, &draft(1, Some(4), 1)).await.unwrap_err();
        assert!(matches!(err, DomainError::ParentItemNotFound(4)));
        assert_eq!(store.item_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_restricts_parents() {
        let store = store_with_menu().await;
        let root = MenuItemRepository::create(&store, &draft(1, None, 0)).await.unwrap();
        let child = MenuItemRepository::create(&store, &draft(1, Some(root.id), 1)).await.unwrap();
        assert_eq!(store.count_children(root.id).await.unwrap(), 1);

        let err = MenuItemRepository::delete(&store, root.id).await.unwrap_err();
        assert!(matches!(err, DomainError::MenuItemHasChildren(1)));
        assert_eq!(store.item_count(), 2);

        assert!(MenuItemRepository::delete(&store, child.id).await.unwrap());
        assert!(MenuItemRepository::delete(&store, root.id).await.unwrap());
        assert!(!MenuItemRepository::delete(&store, root.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_keeps_parent_link() {
        let store = store_with_menu().await;
        let root = MenuItemRepository::create(&store, &draft(1, None, 0)).await.unwrap();
        let mut child = MenuItemRepository::create(&store, &draft(1, Some(root.id), 1)).await.unwrap();

        child.title = "About".to_string();
        child.depth = 4;
        child.parent_id = None;
        let updated = MenuItemRepository::update(&store, &child).await.unwrap();
        assert_eq!(updated.title, "About");
        assert_eq!(updated.depth, 4);
        assert_eq!(updated.parent_id, Some(root.id));

        child.menu_id = 7;
        let err = MenuItemRepository::update(&store, &child).await.unwrap_err();
        assert!(matches!(err, DomainError::MenuNotFound(7)));
    }

    #[tokio::test]
    async fn test_list_by_menu_filters() {
        let store = store_with_menu().await;
        MenuRepository::create(&store, &NewMenu::new("Footer").unwrap()).await.unwrap();
        MenuItemRepository::create(&store, &draft(1, None, 0)).await.unwrap();
        MenuItemRepository::create(&store, &draft(2, None, 0)).await.unwrap();

        let footer = store.list_by_menu(2).await.unwrap();
        assert_eq!(footer.len(), 1);
        assert_eq!(footer[0].id, 2);
        assert_eq!(MenuItemRepository::list(&store).await.unwrap().len(), 2);
    }
}
