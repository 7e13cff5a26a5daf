//! Быстрый ввод пресета размеров с редактором "чипов"
//!
//! Enter добавляет размер из поля ввода, × удаляет по индексу,
//! Backspace в пустом поле удаляет последний размер.

use std::collections::HashMap;

use crate::shared::form::{checkbox_value, is_checked};
use contracts::domain::a025_size_preset::SizePresetDto;
use contracts::shared::form::{fields, size_preset_quick_entry_fields, FieldSpec};
use contracts::shared::sizes::SizeList;

#[derive(Debug, Clone, Default)]
pub struct SizePresetQuickEntryState {
    values: HashMap<String, String>,
    sizes: SizeList,
    input: String,
    pub error: Option<String>,
    pub saving: bool,
}

impl SizePresetQuickEntryState {
    /// Новый пресет; бренд подставляется из открывшего диалог товара
    pub fn new(brand: Option<&str>) -> Self {
        let mut state = Self::default();
        if let Some(brand) = brand.map(str::trim).filter(|b| !b.is_empty()) {
            state
                .values
                .insert(fields::BRAND.to_string(), brand.to_string());
        }
        state
    }

    pub fn value(&self, field: &str) -> String {
        self.values.get(field).cloned().unwrap_or_default()
    }

    pub fn set_value(&mut self, field: &str, value: String) {
        self.values.insert(field.to_string(), value);
    }

    pub fn sizes(&self) -> &SizeList {
        &self.sizes
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, raw: String) {
        self.input = raw;
    }

    /// Enter: добавить размеры из поля ввода (допускается "S, M").
    ///
    /// Поле очищается; возвращает число добавленных размеров.
    pub fn commit_input(&mut self) -> usize {
        let added = SizeList::parse(&self.input)
            .iter()
            .filter(|token| self.sizes.push(token))
            .count();
        self.input.clear();
        added
    }

    pub fn remove_at(&mut self, idx: usize) -> Option<String> {
        self.sizes.remove_at(idx)
    }

    /// Backspace: удаляет последний размер только при пустом поле ввода
    pub fn backspace(&mut self) -> Option<String> {
        if self.input.is_empty() {
            self.sizes.pop()
        } else {
            None
        }
    }

    /// DTO для сохранения; несохраненный текст поля ввода тоже учитывается
    pub fn to_dto(&self) -> Result<SizePresetDto, String> {
        let missing = FieldSpec::validate_required(&size_preset_quick_entry_fields(), &self.values);
        if !missing.is_empty() {
            return Err(format!("Please fill in: {}", missing.join(", ")));
        }

        let mut sizes = self.sizes.clone();
        for token in SizeList::parse(&self.input).iter() {
            sizes.push(token);
        }
        if sizes.is_empty() {
            return Err("Please add at least one size".to_string());
        }

        let brand = self.value(fields::BRAND).trim().to_string();
        Ok(SizePresetDto {
            id: None,
            name: self.value(fields::PRESET_NAME).trim().to_string(),
            preset_name: None,
            brand: (!brand.is_empty()).then_some(brand),
            is_default_for_brand: is_checked(&self.value(fields::IS_DEFAULT_FOR_BRAND)),
            disabled: is_checked(&self.value(fields::DISABLED)),
            sizes: sizes.join(),
        })
    }

    pub fn set_checkbox(&mut self, field: &str, checked: bool) {
        self.set_value(field, checkbox_value(checked));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_editing() {
        let mut state = SizePresetQuickEntryState::new(None);
        state.set_input("S".to_string());
        assert_eq!(state.commit_input(), 1);
        assert_eq!(state.input(), "");

        state.set_input(" M, L ,S ".to_string());
        assert_eq!(state.commit_input(), 2);
        assert_eq!(state.sizes().join(), "S, M, L");

        assert_eq!(state.remove_at(1), Some("M".to_string()));
        assert_eq!(state.remove_at(5), None);

        state.set_input("X".to_string());
        assert_eq!(state.backspace(), None);
        state.set_input(String::new());
        assert_eq!(state.backspace(), Some("L".to_string()));
        assert_eq!(state.sizes().join(), "S");
    }

    #[test]
    fn test_to_dto_requires_name_and_size() {
        let mut state = SizePresetQuickEntryState::new(Some(" Acme "));
        assert_eq!(state.to_dto().unwrap_err(), "Please fill in: Preset Name");

        state.set_value(fields::PRESET_NAME, "Acme kids".to_string());
        assert_eq!(state.to_dto().unwrap_err(), "Please add at least one size");

        state.set_input("98".to_string());
        state.set_checkbox(fields::IS_DEFAULT_FOR_BRAND, true);
        let dto = state.to_dto().unwrap();
        assert_eq!(dto.name, "Acme kids");
        assert_eq!(dto.brand.as_deref(), Some("Acme"));
        assert_eq!(dto.sizes, "98");
        assert!(dto.is_default_for_brand);
        assert!(!dto.disabled);
    }
}
