// ============================================================================
// Menu Core - Menu Item Entity
// File: crates/menu-core/src/domain/menu_item.rs
// Description: Node of a menu hierarchy, linked to its parent by id
// ============================================================================

use std::borrow::Cow;

use menu_shared::constants::{MAX_TITLE_LENGTH, ROOT_DEPTH};
use menu_shared::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use super::Menu;

/// Menu item entity
///
/// Items form a forest per menu. The tree shape is never stored; it is
/// rebuilt from `parent_id` links by [`crate::tree::build_hierarchy`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: EntityId,
    pub title: String,
    pub menu_id: EntityId,
    pub parent_id: Option<EntityId>,
    pub depth: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MenuItem {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Depth a child of `parent` receives: roots sit at 0. `None` when the
    /// parent already sits at the deepest representable level.
    pub fn depth_under(parent: Option<&MenuItem>) -> Option<i32> {
        match parent {
            Some(p) => p.depth.checked_add(1),
            None => Some(ROOT_DEPTH),
        }
    }
}

/// Validated input for a menu item that has not been stored yet
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewMenuItem {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "The title must be between 1 and 255 characters."))]
    pub title: String,
    pub menu_id: EntityId,
    pub parent_id: Option<EntityId>,
}

impl NewMenuItem {
    pub fn new(
        title: &str,
        menu_id: EntityId,
        parent_id: Option<EntityId>,
    ) -> Result<Self, validator::ValidationErrors> {
        let item = Self {
            title: title.trim().to_string(),
            menu_id,
            parent_id,
        };

        item.validate()?;
        Ok(item)
    }
}

/// Row handed to the store: a [`NewMenuItem`] plus its derived depth
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemDraft {
    pub title: String,
    pub menu_id: EntityId,
    pub parent_id: Option<EntityId>,
    pub depth: i32,
}

impl MenuItemDraft {
    pub fn new(item: NewMenuItem, parent: Option<&MenuItem>) -> Result<Self, ValidationErrors> {
        let Some(depth) = MenuItem::depth_under(parent) else {
            let mut errors = ValidationErrors::new();
            errors.add(
                "parent_id",
                ValidationError::new("depth")
                    .with_message(Cow::Borrowed("The parent item is too deep to take children.")),
            );
            return Err(errors);
        };

        Ok(Self {
            title: item.title,
            menu_id: item.menu_id,
            parent_id: item.parent_id,
            depth,
        })
    }
}

/// Partial update of a menu item. Absent fields stay unchanged.
///
/// `parent_id` is deliberately not part of this type: an item keeps the
/// parent it was created under.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct MenuItemChanges {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH, message = "The title must be between 1 and 255 characters."))]
    pub title: Option<String>,
    pub menu_id: Option<EntityId>,
    #[validate(range(min = 0, message = "The depth must be a non-negative integer."))]
    pub depth: Option<i32>,
}

impl MenuItemChanges {
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_menu(mut self, menu_id: EntityId) -> Self {
        self.menu_id = Some(menu_id);
        self
    }

    pub fn with_depth(mut self, depth: i32) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.menu_id.is_none() && self.depth.is_none()
    }

    /// Trims the title and runs the field rules.
    pub fn normalized(mut self) -> Result<Self, validator::ValidationErrors> {
        self.title = self.title.map(|t| t.trim().to_string());
        self.validate()?;
        Ok(self)
    }

    /// Copies every supplied field onto `item`; returns whether anything differed.
    pub fn apply_to(&self, item: &mut MenuItem) -> bool {
        let mut changed = false;
        if let Some(title) = &self.title {
            changed |= item.title != *title;
            item.title = title.clone();
        }
        if let Some(menu_id) = self.menu_id {
            changed |= item.menu_id != menu_id;
            item.menu_id = menu_id;
        }
        if let Some(depth) = self.depth {
            changed |= item.depth != depth;
            item.depth = depth;
        }
        changed
    }
}

/// Menu item with its owning menu resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemWithMenu {
    #[serde(flatten)]
    pub item: MenuItem,
    pub menu: Menu,
}
