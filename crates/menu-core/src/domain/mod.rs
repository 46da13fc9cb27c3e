//! # Menu Core - Domain Module
//! 
//! Domain entities for menu management.

pub mod menu;
pub mod menu_item;

// Re-export all entities and inputs
pub use menu::{Menu, NewMenu};
pub use menu_item::{MenuItem, MenuItemChanges, MenuItemDraft, MenuItemWithMenu, NewMenuItem};
