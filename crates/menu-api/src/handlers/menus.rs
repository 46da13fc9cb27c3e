// ============================================================================
// Menu API - Menu Handlers
// File: crates/menu-api/src/handlers/menus.rs
// ============================================================================

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use menu_core::domain::{Menu, MenuItem};
use menu_core::services::{MenuItemService, MenuService};
use menu_core::tree::TreeNode;
use tracing::info;

use super::parse_id;
use crate::dto::CreateMenuRequest;
use crate::error::ApiError;
use crate::extract::ValidatedJson;

/// List menus - GET /api/menus
pub async fn list_menus(
    State(menus): State<Arc<MenuService>>,
) -> Result<Json<Vec<Menu>>, ApiError> {
    Ok(Json(menus.list().await?))
}

/// Create menu - POST /api/menus
pub async fn create_menu(
    State(menus): State<Arc<MenuService>>,
    ValidatedJson(payload): ValidatedJson<CreateMenuRequest>,
) -> Result<(StatusCode, Json<Menu>), ApiError> {
    let name = payload.name.unwrap_or_default();
    info!("Create menu request: {}", name);

    let menu = menus.create(&name).await?;
    Ok((StatusCode::CREATED, Json(menu)))
}

/// Get menu - GET /api/menus/{id}
pub async fn get_menu(
    State(menus): State<Arc<MenuService>>,
    Path(id): Path<String>,
) -> Result<Json<Menu>, ApiError> {
    let id = parse_id(&id, "Menu")?;
    Ok(Json(menus.get(id).await?))
}

/// Menu forest - GET /api/menus/{id}/tree
pub async fn get_menu_tree(
    State(items): State<Arc<MenuItemService>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<TreeNode<MenuItem>>>, ApiError> {
    let id = parse_id(&id, "Menu")?;
    Ok(Json(items.tree(id).await?))
}
