// ============================================================================
// Menu Core - Menu Entity
// File: crates/menu-core/src/domain/menu.rs
// Description: Top-level named container of a navigation tree
// ============================================================================

use menu_shared::constants::MAX_NAME_LENGTH;
use menu_shared::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Menu entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub id: EntityId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated input for a menu that has not been stored yet
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewMenu {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "The name must be between 1 and 255 characters."))]
    pub name: String,
}

impl NewMenu {
    pub fn new(name: &str) -> Result<Self, validator::ValidationErrors> {
        let menu = Self {
            name: name.trim().to_string(),
        };

        menu.validate()?;
        Ok(menu)
    }
}
