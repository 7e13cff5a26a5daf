use crate::shared::api_utils::{api_url, read_json};
use contracts::domain::a025_size_preset::SizePresetDto;
use gloo_net::http::Request;

#[derive(serde::Deserialize)]
struct SavedId {
    id: String,
}

/// Сохранить пресет; возвращает id записи
pub async fn save_preset(dto: &SizePresetDto) -> Result<String, String> {
    let response = Request::post(&api_url("/api/size_preset"))
        .json(dto)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let saved: SavedId = read_json(response).await?;
    Ok(saved.id)
}
