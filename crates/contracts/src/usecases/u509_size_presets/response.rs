use serde::{Deserialize, Serialize};

use crate::shared::sizes::{Preset, PresetCatalog};

/// Пресет в ответе сервиса
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetEntry {
    pub name: String,
    /// Размеры через запятую
    #[serde(default)]
    pub sizes: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub is_default_for_brand: bool,
}

/// Каталог пресетов с необязательным пресетом по умолчанию
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PresetCatalogResponse {
    #[serde(default)]
    pub presets: Vec<PresetEntry>,
    #[serde(default)]
    pub default: Option<String>,
}

impl PresetCatalogResponse {
    pub fn into_catalog(self) -> PresetCatalog {
        PresetCatalog {
            presets: self
                .presets
                .into_iter()
                .filter(|p| !p.name.is_empty())
                .map(|p| Preset::new(p.name, &p.sizes))
                .collect(),
            default: self.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_catalog_parses_sizes() {
        let response: PresetCatalogResponse = serde_json::from_str(
            r#"{
                "presets": [
                    {"name": "Acme kids", "sizes": "98, 104, 104, 110", "brand": "Acme", "is_default_for_brand": true},
                    {"name": "", "sizes": "S"},
                    {"name": "Standard (S-XL)", "sizes": "S, M, L, XL"}
                ],
                "default": "Acme kids"
            }"#,
        )
        .unwrap();

        let catalog = response.into_catalog();
        assert_eq!(catalog.presets.len(), 2);
        assert_eq!(
            catalog.default_preset().map(|p| p.sizes.join()),
            Some("98, 104, 110".to_string())
        );
    }
}
