use serde::{Deserialize, Serialize};

/// Запрос каталога пресетов (query string)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetCatalogRequest {
    /// Бренд; пусто = без фильтра по бренду
    #[serde(default)]
    pub brand: Option<String>,
}

impl PresetCatalogRequest {
    pub fn for_brand(brand: &str) -> Self {
        Self {
            brand: Some(brand.to_string()),
        }
    }

    /// Бренд после trim, пустая строка если не задан
    pub fn brand(&self) -> &str {
        self.brand.as_deref().unwrap_or_default().trim()
    }
}
