use serde::{Deserialize, Serialize};

use super::SizeList;

/// Именованный набор размеров ("Standard (S-XL)" -> S, M, L, XL)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub sizes: SizeList,
}

impl Preset {
    pub fn new(name: impl Into<String>, sizes: &str) -> Self {
        Self {
            name: name.into(),
            sizes: SizeList::parse(sizes),
        }
    }
}

/// Каталог пресетов, полученный для бренда (или без фильтра по бренду)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PresetCatalog {
    pub presets: Vec<Preset>,
    /// Имя пресета по умолчанию для бренда
    pub default: Option<String>,
}

impl PresetCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn find(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Пресет по умолчанию, только если он действительно есть в каталоге
    pub fn default_preset(&self) -> Option<&Preset> {
        self.default.as_deref().and_then(|name| self.find(name))
    }

    pub fn names(&self) -> Vec<String> {
        self.presets
            .iter()
            .filter(|p| !p.name.is_empty())
            .map(|p| p.name.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
