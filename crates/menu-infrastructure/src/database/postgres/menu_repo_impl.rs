// ============================================================================
// Menu Infrastructure - PostgreSQL Menu Repository
// File: crates/menu-infrastructure/src/database/postgres/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;

use menu_core::domain::{Menu, NewMenu};
use menu_core::error::DomainError;
use menu_core::repositories::MenuRepository;
use menu_shared::EntityId;

use super::errors::database_error;

pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn list(&self) -> Result<Vec<Menu>, DomainError> {
        let rows: Vec<MenuRow> = sqlx::query_as(
            r#"
            SELECT id, name, created_at, updated_at
            FROM menus
            ORDER BY id
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("listing menus", e))?;

        Ok(rows.into_iter().map(Menu::from).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Menu>, DomainError> {
        let row: Option<MenuRow> = sqlx::query_as(
            r#"
            SELECT id, name, created_at, updated_at
            FROM menus
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("finding menu by id", e))?;

        Ok(row.map(Menu::from))
    }

    async fn create(&self, menu: &NewMenu) -> Result<Menu, DomainError> {
        let row: MenuRow = sqlx::query_as(
            r#"
            INSERT INTO menus (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#
        )
        .bind(&menu.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| database_error("creating menu", e))?;

        info!("Menu row inserted: {}", row.id);
        Ok(row.into())
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuRow {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MenuRow> for Menu {
    fn from(row: MenuRow) -> Self {
        Menu {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
