//! HTTP handlers

pub mod health;
pub mod menus;
pub mod menu_items;

use menu_shared::EntityId;

use crate::error::ApiError;

/// Path ids that are not integers cannot name an entity.
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<EntityId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(format!("{} not found: {}", entity, raw)))
}

/// Fallback for unknown routes
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12", "Menu").unwrap(), 12);
        assert!(matches!(parse_id("twelve", "Menu"), Err(ApiError::NotFound(_))));
    }
}
