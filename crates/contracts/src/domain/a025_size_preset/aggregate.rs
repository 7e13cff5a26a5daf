use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use crate::shared::sizes::{Preset, SizeList};
use crate::usecases::u509_size_presets::PresetEntry;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizePresetId(pub Uuid);

impl SizePresetId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for SizePresetId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SizePresetId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Пресет размеров.
///
/// `base.code` — уникальное имя пресета (по нему выбирают в диалоге),
/// `base.description` — отображаемое имя (preset_name).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizePreset {
    #[serde(flatten)]
    pub base: BaseAggregate<SizePresetId>,

    /// Бренд; None = общий пресет
    pub brand: Option<String>,

    #[serde(rename = "isDefaultForBrand", default)]
    pub is_default_for_brand: bool,

    #[serde(default)]
    pub disabled: bool,

    /// Размеры через запятую в каноническом виде
    pub sizes: String,
}

impl SizePreset {
    pub fn new_for_insert(dto: &SizePresetDto) -> Self {
        let base = BaseAggregate::new(
            SizePresetId::new_v4(),
            dto.name.trim().to_string(),
            dto.preset_name.clone().unwrap_or_default(),
        );
        let mut aggregate = Self {
            base,
            brand: None,
            is_default_for_brand: false,
            disabled: false,
            sizes: String::new(),
        };
        aggregate.apply(dto);
        aggregate
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn name(&self) -> &str {
        &self.base.code
    }

    pub fn update(&mut self, dto: &SizePresetDto) {
        self.base.code = dto.name.trim().to_string();
        self.base.description = dto.preset_name.clone().unwrap_or_default();
        self.apply(dto);
    }

    fn apply(&mut self, dto: &SizePresetDto) {
        self.brand = dto
            .brand
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string);
        self.is_default_for_brand = dto.is_default_for_brand;
        self.disabled = dto.disabled;
        self.sizes = dto.sizes.clone();
    }

    pub fn size_list(&self) -> SizeList {
        SizeList::parse(&self.sizes)
    }

    pub fn is_global(&self) -> bool {
        self.brand.is_none()
    }

    pub fn belongs_to(&self, brand: &str) -> bool {
        self.brand.as_deref() == Some(brand)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Preset Name is required".into());
        }
        if self.size_list().is_empty() {
            return Err("Please add at least one size.".into());
        }
        Ok(())
    }

    /// Нормализация перед записью: пустой preset_name = имя,
    /// размеры в каноническом виде, default только для пресета с брендом
    pub fn before_write(&mut self) {
        if self.base.description.trim().is_empty() {
            self.base.description = self.base.code.clone();
        }
        self.sizes = self.size_list().join();
        if self.brand.is_none() {
            self.is_default_for_brand = false;
        }
        self.base.touch();
    }

    pub fn to_preset(&self) -> Preset {
        Preset {
            name: self.base.code.clone(),
            sizes: self.size_list(),
        }
    }

    pub fn to_entry(&self) -> PresetEntry {
        PresetEntry {
            name: self.base.code.clone(),
            sizes: self.sizes.clone(),
            brand: self.brand.clone().unwrap_or_default(),
            is_default_for_brand: self.is_default_for_brand,
        }
    }
}

impl AggregateRoot for SizePreset {
    type Id = SizePresetId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a025"
    }

    fn collection_name() -> &'static str {
        "size_preset"
    }

    fn element_name() -> &'static str {
        "Fashion Size Preset"
    }

    fn list_name() -> &'static str {
        "Fashion Size Presets"
    }

    fn origin() -> Origin {
        Origin::Manual
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SizePresetDto {
    pub id: Option<String>,
    /// Имя пресета (`__newname` в диалоге)
    pub name: String,
    pub preset_name: Option<String>,
    pub brand: Option<String>,
    #[serde(default)]
    pub is_default_for_brand: bool,
    #[serde(default)]
    pub disabled: bool,
    pub sizes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, brand: Option<&str>, sizes: &str) -> SizePresetDto {
        SizePresetDto {
            name: name.to_string(),
            brand: brand.map(str::to_string),
            sizes: sizes.to_string(),
            is_default_for_brand: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_before_write_normalizes() {
        let mut preset = SizePreset::new_for_insert(&dto(" Acme kids ", Some("  "), "98,104 ,,98"));
        preset.before_write();

        assert_eq!(preset.name(), "Acme kids");
        assert_eq!(preset.base.description, "Acme kids");
        assert_eq!(preset.sizes, "98, 104");
        assert!(preset.is_global());
        assert!(!preset.is_default_for_brand);
    }

    #[test]
    fn test_validate_requires_sizes() {
        let preset = SizePreset::new_for_insert(&dto("Empty", None, " , "));
        assert_eq!(
            preset.validate(),
            Err("Please add at least one size.".to_string())
        );

        let preset = SizePreset::new_for_insert(&dto("", None, "S"));
        assert!(preset.validate().is_err());
    }

    #[test]
    fn test_to_entry_keeps_brand_and_default() {
        let mut preset = SizePreset::new_for_insert(&dto("Acme", Some("Acme"), "S, M"));
        preset.before_write();
        let entry = preset.to_entry();
        assert_eq!(entry.brand, "Acme");
        assert!(entry.is_default_for_brand);
        assert!(preset.belongs_to("Acme"));
        assert_eq!(preset.to_preset().sizes.len(), 2);
    }
}
