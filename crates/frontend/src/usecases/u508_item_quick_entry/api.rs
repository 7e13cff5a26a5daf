use crate::shared::api_utils::{api_url, read_json};
use contracts::shared::sizes::PresetCatalog;
use contracts::shared::quick_entry_settings::QuickEntrySettings;
use contracts::usecases::u508_create_fashion_items::{CreateItemsRequest, CreateItemsResponse};
use contracts::usecases::u509_size_presets::PresetCatalogResponse;
use gloo_net::http::Request;

/// Удаленные сервисы диалога быстрого ввода
#[allow(async_fn_in_trait)]
pub trait FashionItemsGateway {
    /// Каталог пресетов для бренда (пустой бренд = все пресеты)
    async fn fetch_presets(&self, brand: &str) -> Result<PresetCatalog, String>;

    async fn create_items(&self, request: &CreateItemsRequest) -> Result<CreateItemsResponse, String>;
}

/// Gateway поверх HTTP API бэкенда
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpGateway;

impl FashionItemsGateway for HttpGateway {
    async fn fetch_presets(&self, brand: &str) -> Result<PresetCatalog, String> {
        let url = api_url(&format!(
            "/api/size_presets?brand={}",
            urlencoding::encode(brand.trim())
        ));
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let data: PresetCatalogResponse = read_json(response).await?;
        Ok(data.into_catalog())
    }

    async fn create_items(&self, request: &CreateItemsRequest) -> Result<CreateItemsResponse, String> {
        let response = Request::post(&api_url("/api/u508/create_fashion_items"))
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(response).await
    }
}

/// Настройки диалога; при ошибке используются значения по умолчанию
pub async fn fetch_settings() -> QuickEntrySettings {
    let result = async {
        let response = Request::get(&api_url("/api/settings/quick_entry"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json::<QuickEntrySettings>(response).await
    }
    .await;

    match result {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load quick entry settings: {}", e);
            QuickEntrySettings::default()
        }
    }
}
