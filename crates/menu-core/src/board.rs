// ============================================================================
// Menu Core - Menu Board
// File: crates/menu-core/src/board.rs
// Description: Presentation state for the menu editor
// ============================================================================
//! State owned by the component that renders menus: the flat collections
//! as last confirmed by the server, expand/collapse flags, and inline edit
//! buffers. Mutating calls are sent to the services first; the board is only
//! updated from their successful responses.

use std::collections::HashMap;

use menu_shared::EntityId;

use crate::domain::{Menu, MenuItem, MenuItemChanges};
use crate::tree::{build_hierarchy, TreeNode};

/// One menu with its rebuilt forest
#[derive(Debug, Clone, PartialEq)]
pub struct MenuForest<'a> {
    pub menu: &'a Menu,
    pub roots: Vec<TreeNode<MenuItem>>,
}

#[derive(Debug, Clone, Default)]
pub struct MenuBoard {
    menus: Vec<Menu>,
    items: Vec<MenuItem>,
    open: HashMap<EntityId, bool>,
    edits: HashMap<EntityId, String>,
}

impl MenuBoard {
    pub fn new(menus: Vec<Menu>, items: Vec<MenuItem>) -> Self {
        Self {
            menus,
            items,
            ..Self::default()
        }
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    // --- expand / collapse -------------------------------------------------

    pub fn is_open(&self, id: EntityId) -> bool {
        self.open.get(&id).copied().unwrap_or(false)
    }

    pub fn toggle_open(&mut self, id: EntityId) {
        let entry = self.open.entry(id).or_insert(false);
        *entry = !*entry;
    }

    pub fn expand_all(&mut self) {
        self.set_all_open(true);
    }

    pub fn collapse_all(&mut self) {
        self.set_all_open(false);
    }

    fn set_all_open(&mut self, open: bool) {
        self.open = self.items.iter().map(|item| (item.id, open)).collect();
    }

    // --- inline editing ----------------------------------------------------

    /// Opens an edit buffer seeded with the item's current title.
    pub fn begin_edit(&mut self, id: EntityId) -> bool {
        match self.items.iter().find(|item| item.id == id) {
            Some(item) => {
                self.edits.insert(id, item.title.clone());
                true
            }
            None => false,
        }
    }

    pub fn is_editing(&self, id: EntityId) -> bool {
        self.edits.contains_key(&id)
    }

    pub fn edit_text(&self, id: EntityId) -> Option<&str> {
        self.edits.get(&id).map(String::as_str)
    }

    pub fn set_edit_text(&mut self, id: EntityId, text: &str) {
        if let Some(buffer) = self.edits.get_mut(&id) {
            *buffer = text.to_string();
        }
    }

    pub fn cancel_edit(&mut self, id: EntityId) {
        self.edits.remove(&id);
    }

    /// Closes the buffer and returns the update to send. The item itself is
    /// left untouched until [`MenuBoard::apply_item_updated`] runs.
    pub fn finish_edit(&mut self, id: EntityId) -> Option<(EntityId, MenuItemChanges)> {
        let title = self.edits.remove(&id)?;
        Some((id, MenuItemChanges::default().with_title(&title)))
    }

    // --- confirmed server responses ----------------------------------------

    pub fn apply_menu_created(&mut self, menu: Menu) {
        self.menus.push(menu);
    }

    pub fn apply_item_created(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub fn apply_item_updated(&mut self, item: MenuItem) {
        if let Some(slot) = self.items.iter_mut().find(|existing| existing.id == item.id) {
            *slot = item;
        }
    }

    pub fn apply_item_deleted(&mut self, id: EntityId) {
        self.items.retain(|item| item.id != id);
        self.open.remove(&id);
        self.edits.remove(&id);
    }

    // --- derived views -----------------------------------------------------

    /// One forest per menu, in menu order.
    pub fn forests(&self) -> Vec<MenuForest<'_>> {
        self.menus
            .iter()
            .map(|menu| MenuForest {
                menu,
                roots: build_hierarchy(
                    self.items.iter().filter(|item| item.menu_id == menu.id).cloned(),
                ),
            })
            .collect()
    }

    /// Root items of `menu_id`, the parents offered when adding an item.
    pub fn parent_candidates(&self, menu_id: EntityId) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| item.menu_id == menu_id && item.is_root())
            .collect()
    }

    /// Depth the server will assign to a new item under `parent_id`;
    /// `None` when that parent cannot take children.
    pub fn draft_depth(&self, parent_id: Option<EntityId>) -> Option<i32> {
        let parent = parent_id.and_then(|pid| self.items.iter().find(|item| item.id == pid));
        MenuItem::depth_under(parent)
    }
}
