// ============================================================================
// Menu Infrastructure - PostgreSQL Menu Item Repository
// File: crates/menu-infrastructure/src/database/postgres/menu_item_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{info, warn};

use menu_core::domain::{MenuItem, MenuItemDraft};
use menu_core::error::DomainError;
use menu_core::repositories::MenuItemRepository;
use menu_shared::EntityId;

use super::errors::{database_error, violated_foreign_key, MENU_FK, PARENT_FK};

pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn list(&self) -> Result<Vec<MenuItem>, DomainError> {
        let rows: Vec<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT id, menu_id, parent_id, title, depth, created_at, updated_at
            FROM menu_items
            ORDER BY id
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("listing menu items", e))?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    async fn list_by_menu(&self, menu_id: EntityId) -> Result<Vec<MenuItem>, DomainError> {
        let rows: Vec<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT id, menu_id, parent_id, title, depth, created_at, updated_at
            FROM menu_items
            WHERE menu_id = $1
            ORDER BY id
            "#
        )
        .bind(menu_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("listing menu items by menu", e))?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<MenuItem>, DomainError> {
        let row: Option<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT id, menu_id, parent_id, title, depth, created_at, updated_at
            FROM menu_items
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("finding menu item by id", e))?;

        Ok(row.map(MenuItem::from))
    }

    async fn create(&self, draft: &MenuItemDraft) -> Result<MenuItem, DomainError> {
        let row: MenuItemRow = sqlx::query_as(
            r#"
            INSERT INTO menu_items (menu_id, parent_id, title, depth)
            VALUES ($1, $2, $3, $4)
            RETURNING id, menu_id, parent_id, title, depth, created_at, updated_at
            "#
        )
        .bind(draft.menu_id)
        .bind(draft.parent_id)
        .bind(&draft.title)
        .bind(draft.depth)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match (violated_foreign_key(&e).as_deref(), draft.parent_id) {
            (Some(MENU_FK), _) => DomainError::MenuNotFound(draft.menu_id),
            (Some(PARENT_FK), Some(parent_id)) => DomainError::ParentItemNotFound(parent_id),
            _ => database_error("creating menu item", e),
        })?;

        info!("Menu item row inserted: {}", row.id);
        Ok(row.into())
    }

    async fn update(&self, item: &MenuItem) -> Result<MenuItem, DomainError> {
        let row: Option<MenuItemRow> = sqlx::query_as(
            r#"
            UPDATE menu_items
            SET title = $2, menu_id = $3, depth = $4, updated_at = $5
            WHERE id = $1
            RETURNING id, menu_id, parent_id, title, depth, created_at, updated_at
            "#
        )
        .bind(item.id)
        .bind(&item.title)
        .bind(item.menu_id)
        .bind(item.depth)
        .bind(item.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match violated_foreign_key(&e).as_deref() {
            Some(MENU_FK) => DomainError::MenuNotFound(item.menu_id),
            _ => database_error("updating menu item", e),
        })?;

        row.map(MenuItem::from)
            .ok_or(DomainError::MenuItemNotFound(item.id))
    }

    async fn count_children(&self, id: EntityId) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM menu_items WHERE parent_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error("counting menu item children", e))
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match violated_foreign_key(&e).as_deref() {
                Some(PARENT_FK) => {
                    warn!("Store refused delete of menu item {}: children exist", id);
                    DomainError::MenuItemHasChildren(id)
                }
                _ => database_error("deleting menu item", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: i64,
    pub menu_id: i64,
    pub parent_id: Option<i64>,
    pub title: String,
    pub depth: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            title: row.title,
            menu_id: row.menu_id,
            parent_id: row.parent_id,
            depth: row.depth,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
