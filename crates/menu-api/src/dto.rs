// ============================================================================
// Menu API - Request DTOs
// File: crates/menu-api/src/dto.rs
// ============================================================================
//! Typed request schemas, one per mutating operation.

use menu_core::domain::MenuItemChanges;
use menu_shared::EntityId;
use serde::Deserialize;
use validator::Validate;

/// Create menu payload - POST /api/menus
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMenuRequest {
    /// Length is checked on the trimmed name by [`menu_core::domain::NewMenu`].
    #[validate(required(message = "The name field is required."))]
    pub name: Option<String>,
}

/// Create menu item payload - POST /api/menu-items
///
/// Unknown fields (the web client also posts a `depth`) are ignored; depth
/// is always derived from the parent.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMenuItemRequest {
    #[validate(required(message = "The title field is required."))]
    pub title: Option<String>,

    #[validate(required(message = "The menu id field is required."))]
    #[serde(default, deserialize_with = "id::optional")]
    pub menu_id: Option<EntityId>,

    #[serde(default, deserialize_with = "id::optional")]
    pub parent_id: Option<EntityId>,
}

/// Update menu item payload - PUT /api/menu-items/{id}
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateMenuItemRequest {
    /// Trimmed and length-checked by [`MenuItemChanges::normalized`].
    pub title: Option<String>,

    #[serde(default, deserialize_with = "id::optional")]
    pub menu_id: Option<EntityId>,

    #[validate(range(min = 0, message = "The depth must be a non-negative integer."))]
    pub depth: Option<i32>,
}

impl From<UpdateMenuItemRequest> for MenuItemChanges {
    fn from(req: UpdateMenuItemRequest) -> Self {
        MenuItemChanges {
            title: req.title,
            menu_id: req.menu_id,
            depth: req.depth,
        }
    }
}

/// Ids arrive as JSON numbers or as numeric strings (form `<select>` values).
/// `null` and the empty string both mean "absent".
mod id {
    use menu_shared::EntityId;
    use serde::{de::Error, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(EntityId),
        Text(String),
    }

    pub fn optional<'de, D>(deserializer: D) -> Result<Option<EntityId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawId>::deserialize(deserializer)? {
            None => Ok(None),
            Some(RawId::Number(id)) => Ok(Some(id)),
            Some(RawId::Text(text)) if text.trim().is_empty() => Ok(None),
            Some(RawId::Text(text)) => text
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid id `{}`", text))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_item(value: serde_json::Value) -> CreateMenuItemRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_ids_accept_numbers_and_strings() {
        let req = create_item(json!({"title": "About", "menu_id": "1", "parent_id": 3}));
        assert_eq!(req.menu_id, Some(1));
        assert_eq!(req.parent_id, Some(3));

        let req = create_item(json!({"title": "Home", "menu_id": 1, "parent_id": ""}));
        assert_eq!(req.parent_id, None);

        let req = create_item(json!({"title": "Home", "menu_id": 1, "parent_id": null, "depth": 7}));
        assert_eq!(req.parent_id, None);
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        let parsed: Result<CreateMenuItemRequest, _> =
            serde_json::from_value(json!({"title": "Home", "menu_id": "abc"}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_required_fields() {
        let req = create_item(json!({"menu_id": ""}));
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("menu_id"));
    }

    #[test]
    fn test_update_ignores_parent_id() {
        let req: UpdateMenuItemRequest =
            serde_json::from_value(json!({"title": "Docs", "parent_id": 9})).unwrap();
        assert!(req.validate().is_ok());

        let changes = MenuItemChanges::from(req);
        assert_eq!(changes.title.as_deref(), Some("Docs"));
        assert!(changes.menu_id.is_none() && changes.depth.is_none());
    }

    #[test]
    fn test_update_rejects_negative_depth() {
        let req: UpdateMenuItemRequest = serde_json::from_value(json!({"depth": -2})).unwrap();
        assert!(req.validate().is_err());
    }
}
