use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a025_size_preset::{SizePreset, SizePresetDto};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u509_size_presets::{PresetCatalogRequest, PresetCatalogResponse, SizePresets};
use serde_json::json;

use crate::domain::a025_size_preset::{repository::REPOSITORY, service};
use crate::shared::error::{api_error, ApiError};

/// GET /api/size_presets?brand=
pub async fn catalog(
    Query(request): Query<PresetCatalogRequest>,
) -> Result<Json<PresetCatalogResponse>, ApiError> {
    match service::catalog_for_brand(&REPOSITORY, request.brand()).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("{} failed: {}", SizePresets::full_name(), e);
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

/// GET /api/size_preset
pub async fn list_all() -> Result<Json<Vec<SizePreset>>, StatusCode> {
    match service::list_all(&REPOSITORY).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list size presets: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/size_preset/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<SizePreset>, StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match service::get_by_id(&REPOSITORY, uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/size_preset
pub async fn upsert(
    Json(dto): Json<SizePresetDto>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match service::upsert(&REPOSITORY, dto).await {
        Ok(id) => Ok(Json(json!({"id": id.to_string()}))),
        Err(e) => {
            tracing::warn!("Failed to save size preset: {}", e);
            Err(api_error(StatusCode::BAD_REQUEST, e.to_string()))
        }
    }
}

/// DELETE /api/size_preset/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match service::delete(&REPOSITORY, uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
