// ============================================================================
// Menu API - Routes
// File: crates/menu-api/src/routes.rs
// ============================================================================

use axum::{routing::get, Router};

use crate::handlers::{health, menu_items, menus, route_not_found};
use crate::state::AppState;

/// Builds the full router: health probes at the root, REST under `/api`.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Menus
        .route("/menus", get(menus::list_menus).post(menus::create_menu))
        .route("/menus/{id}", get(menus::get_menu))
        .route("/menus/{id}/tree", get(menus::get_menu_tree))
        // Menu items
        .route(
            "/menu-items",
            get(menu_items::list_menu_items).post(menu_items::create_menu_item),
        )
        .route(
            "/menu-items/{id}",
            get(menu_items::get_menu_item)
                .put(menu_items::update_menu_item)
                .delete(menu_items::delete_menu_item),
        )
        // Older clients read the flat list from here
        .route("/submenus", get(menu_items::list_menu_items));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .nest("/api", api)
        .fallback(route_not_found)
        .with_state(state)
}
