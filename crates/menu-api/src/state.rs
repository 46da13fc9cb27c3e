use std::sync::Arc;

use axum::extract::FromRef;
use menu_core::repositories::{MenuItemRepository, MenuRepository};
use menu_core::services::{MenuItemService, MenuService};
use menu_shared::config::StoreBackend;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub menu_service: Arc<MenuService>,
    pub menu_item_service: Arc<MenuItemService>,
    pub store_backend: StoreBackend,
}

impl AppState {
    pub fn new(
        menu_repo: Arc<dyn MenuRepository>,
        item_repo: Arc<dyn MenuItemRepository>,
        store_backend: StoreBackend,
    ) -> Self {
        Self {
            menu_service: Arc::new(MenuService::new(menu_repo.clone())),
            menu_item_service: Arc::new(MenuItemService::new(item_repo, menu_repo)),
            store_backend,
        }
    }
}

impl FromRef<AppState> for Arc<MenuService> {
    fn from_ref(state: &AppState) -> Self {
        state.menu_service.clone()
    }
}

impl FromRef<AppState> for Arc<MenuItemService> {
    fn from_ref(state: &AppState) -> Self {
        state.menu_item_service.clone()
    }
}
