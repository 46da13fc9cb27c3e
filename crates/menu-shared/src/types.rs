//! Common types

use chrono::{DateTime, Utc};

/// Store-assigned identifier shared by menus and menu items.
pub type EntityId = i64;

pub type Timestamp = DateTime<Utc>;

pub fn now() -> Timestamp {
    Utc::now()
}
