//! HTTP error mapping

use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use menu_core::{DomainError, ErrorKind};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed: {message}")]
    Validation { message: String, fields: FieldErrors },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<FieldErrors>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            // Structural rule violations surface as 403, as the web client expects.
            ApiError::Conflict(_) => StatusCode::FORBIDDEN,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("The {} field is invalid.", field),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation {
            message: "The given data was invalid.".to_string(),
            fields: field_errors(&errors),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match (err.kind(), err) {
            (_, DomainError::ValidationError(errors)) => errors.into(),
            (ErrorKind::NotFound, err) => ApiError::NotFound(err.to_string()),
            (ErrorKind::Conflict, err) => ApiError::Conflict(err.to_string()),
            (_, err) => ApiError::InternalError(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ApiError::Validation {
                message: e.body_text(),
                fields: FieldErrors::new(),
            },
            JsonRejection::MissingJsonContentType(e) => ApiError::UnsupportedMediaType(e.body_text()),
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_type, message, fields) = match self {
            ApiError::Validation { message, fields } => {
                tracing::warn!("Validation failed: {}", message);
                ("ValidationError", message, (!fields.is_empty()).then_some(fields))
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                ("NotFound", msg, None)
            }
            ApiError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                ("Conflict", msg, None)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                ("BadRequest", msg, None)
            }
            ApiError::UnsupportedMediaType(msg) => {
                tracing::warn!("Unsupported media type: {}", msg);
                ("UnsupportedMediaType", msg, None)
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                // Store details stay in the log.
                ("InternalError", "Internal server error".to_string(), None)
            }
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
            fields,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_core::domain::NewMenu;

    #[test]
    fn test_domain_errors_map_to_status() {
        assert_eq!(ApiError::from(DomainError::MenuNotFound(1)).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(DomainError::MenuItemHasChildren(1)).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::from(DomainError::DatabaseError("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_errors_keep_field_messages() {
        let errors = NewMenu::new("").unwrap_err();
        match ApiError::from(DomainError::from(errors)) {
            ApiError::Validation { fields, .. } => {
                assert_eq!(
                    fields["name"],
                    vec!["The name must be between 1 and 255 characters.".to_string()]
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
