use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a026_fashion_item::{FashionItem, FashionItemDto};

use crate::domain::a026_fashion_item::{repository::REPOSITORY, service};
use crate::domain::a027_item_attribute::repository::REPOSITORY as ATTRIBUTES;
use crate::shared::config;
use crate::shared::error::{api_error, ApiError, ItemCreationError};

/// GET /api/fashion_item
pub async fn list_all() -> Result<Json<Vec<FashionItem>>, StatusCode> {
    match service::list_all(&REPOSITORY).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list items: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/fashion_item/:code
pub async fn get_by_code(Path(code): Path<String>) -> Result<Json<FashionItem>, StatusCode> {
    match service::get_by_code(&REPOSITORY, &code).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/fashion_item
pub async fn create(Json(dto): Json<FashionItemDto>) -> Result<Json<FashionItem>, ApiError> {
    let catalog = &config::get().catalog;
    match service::create(&REPOSITORY, &ATTRIBUTES, catalog, dto).await {
        Ok(item) => Ok(Json(item)),
        Err(e @ ItemCreationError::AlreadyExists(_)) => {
            Err(api_error(StatusCode::CONFLICT, e.to_string()))
        }
        Err(e @ ItemCreationError::Validation(_)) => {
            Err(api_error(StatusCode::BAD_REQUEST, e.to_string()))
        }
        Err(e) => {
            tracing::error!("Failed to create item: {}", e);
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
