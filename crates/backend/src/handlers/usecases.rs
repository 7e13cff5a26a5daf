use axum::Json;
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::domain::{a026_fashion_item, a027_item_attribute};
use crate::shared::config;
use crate::shared::error::{usecase_error_response, ApiError};
use crate::usecases;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u508_create_fashion_items::CreateFashionItems;
use contracts::usecases::u510_size_grid::SizeGrid;

// ============================================================================
// UseCase u508: Create fashion items
// ============================================================================

static CREATE_ITEMS_EXECUTOR: Lazy<Arc<usecases::u508_create_fashion_items::CreateItemsExecutor>> =
    Lazy::new(|| {
        Arc::new(usecases::u508_create_fashion_items::CreateItemsExecutor::new(
            a026_fashion_item::repository::REPOSITORY.clone(),
            a027_item_attribute::repository::REPOSITORY.clone(),
            config::get().catalog.clone(),
        ))
    });

/// POST /api/u508/create_fashion_items
pub async fn u508_create_items(
    Json(request): Json<contracts::usecases::u508_create_fashion_items::CreateItemsRequest>,
) -> Result<Json<contracts::usecases::u508_create_fashion_items::CreateItemsResponse>, ApiError> {
    match CREATE_ITEMS_EXECUTOR.execute(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("{} failed: {}", CreateFashionItems::full_name(), e);
            Err(usecase_error_response(&e))
        }
    }
}

// ============================================================================
// UseCase u510: Size grid
// ============================================================================

static SIZE_GRID_EXECUTOR: Lazy<Arc<usecases::u510_size_grid::SizeGridExecutor>> =
    Lazy::new(|| {
        Arc::new(usecases::u510_size_grid::SizeGridExecutor::new(
            a026_fashion_item::repository::REPOSITORY.clone(),
            a027_item_attribute::repository::REPOSITORY.clone(),
            config::get().catalog.clone(),
        ))
    });

/// POST /api/u510/create_variants_from_grid
pub async fn u510_create_variants(
    Json(request): Json<contracts::usecases::u510_size_grid::CreateVariantsRequest>,
) -> Result<Json<contracts::usecases::u510_size_grid::CreateVariantsResponse>, ApiError> {
    match SIZE_GRID_EXECUTOR.execute(request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("{} failed: {}", SizeGrid::full_name(), e);
            Err(usecase_error_response(&e))
        }
    }
}
