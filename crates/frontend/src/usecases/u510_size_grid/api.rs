use crate::shared::api_utils::{api_url, read_json};
use contracts::domain::a026_fashion_item::FashionItem;
use contracts::usecases::u510_size_grid::{CreateVariantsRequest, CreateVariantsResponse};
use gloo_net::http::Request;

/// Шаблоны: товары с включенным has_variants
pub async fn list_templates() -> Result<Vec<FashionItem>, String> {
    let response = Request::get(&api_url("/api/fashion_item"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let items: Vec<FashionItem> = read_json(response).await?;
    Ok(items.into_iter().filter(|i| i.has_variants).collect())
}

pub async fn create_variants(request: &CreateVariantsRequest) -> Result<CreateVariantsResponse, String> {
    let response = Request::post(&api_url("/api/u510/create_variants_from_grid"))
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}
