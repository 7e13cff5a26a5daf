use axum::http::StatusCode;
use axum::Json;
use contracts::usecases::common::UseCaseError;
use serde_json::{json, Value};
use thiserror::Error;

/// Ошибка создания одного товара (не прерывает пакет)
#[derive(Debug, Error)]
pub enum ItemCreationError {
    #[error("Item {0} already exists")]
    AlreadyExists(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Ответ об ошибке для handlers: `{"error": "..."}`
pub type ApiError = (StatusCode, Json<Value>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

/// Код HTTP по коду ошибки UseCase
pub fn usecase_error_response(err: &UseCaseError) -> ApiError {
    let status = if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    api_error(status, err.message.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usecase_error_status() {
        let (status, Json(body)) =
            usecase_error_response(&UseCaseError::validation("At least one size is required"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "At least one size is required");

        let (status, _) = usecase_error_response(&UseCaseError::not_found("Item X not found"));
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = usecase_error_response(&UseCaseError::internal("boom"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_item_creation_error_messages() {
        assert_eq!(
            ItemCreationError::AlreadyExists("D100-RED-M".into()).to_string(),
            "Item D100-RED-M already exists"
        );
        let err: ItemCreationError = anyhow::anyhow!("disk full").into();
        assert_eq!(err.to_string(), "Storage error: disk full");
    }
}
