// ============================================================================
// Menu API - Menu Item Handlers
// File: crates/menu-api/src/handlers/menu_items.rs
// ============================================================================

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use menu_core::domain::{MenuItem, MenuItemWithMenu};
use menu_core::services::MenuItemService;
use tracing::info;

use super::parse_id;
use crate::dto::{CreateMenuItemRequest, UpdateMenuItemRequest};
use crate::error::ApiError;
use crate::extract::ValidatedJson;

/// List items of all menus - GET /api/menu-items (alias: GET /api/submenus)
pub async fn list_menu_items(
    State(items): State<Arc<MenuItemService>>,
) -> Result<Json<Vec<MenuItemWithMenu>>, ApiError> {
    Ok(Json(items.list().await?))
}

/// Create menu item - POST /api/menu-items
pub async fn create_menu_item(
    State(items): State<Arc<MenuItemService>>,
    ValidatedJson(payload): ValidatedJson<CreateMenuItemRequest>,
) -> Result<(StatusCode, Json<MenuItem>), ApiError> {
    // `required` on both fields has already been enforced by ValidatedJson.
    let title = payload.title.unwrap_or_default();
    let menu_id = payload.menu_id.unwrap_or_default();
    info!("Create menu item request: menu_id={} parent_id={:?}", menu_id, payload.parent_id);

    let item = items.create(&title, menu_id, payload.parent_id).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get menu item - GET /api/menu-items/{id}
pub async fn get_menu_item(
    State(items): State<Arc<MenuItemService>>,
    Path(id): Path<String>,
) -> Result<Json<MenuItemWithMenu>, ApiError> {
    let id = parse_id(&id, "Menu item")?;
    Ok(Json(items.get(id).await?))
}

/// Update menu item - PUT /api/menu-items/{id}
pub async fn update_menu_item(
    State(items): State<Arc<MenuItemService>>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateMenuItemRequest>,
) -> Result<Json<MenuItem>, ApiError> {
    let id = parse_id(&id, "Menu item")?;
    Ok(Json(items.update(id, payload.into()).await?))
}

/// Delete menu item - DELETE /api/menu-items/{id}
pub async fn delete_menu_item(
    State(items): State<Arc<MenuItemService>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id, "Menu item")?;
    items.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
