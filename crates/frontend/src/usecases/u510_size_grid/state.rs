use std::collections::HashMap;

use crate::shared::request_sequence::{PresetTicket, RequestSequence};
use contracts::shared::form::{fields, size_grid_fields, validate_values, FieldSpec};
use contracts::shared::sizes::{PresetCatalog, SizeList};
use contracts::usecases::u510_size_grid::{CreateVariantsRequest, CreateVariantsResponse};

/// Состояние диалога "Create Size Grid"
#[derive(Debug, Clone, Default)]
pub struct SizeGridState {
    template_item: String,
    brand: String,
    values: HashMap<String, String>,
    catalog: PresetCatalog,
    seq: RequestSequence,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub response: Option<CreateVariantsResponse>,
    pub submitting: bool,
}

impl SizeGridState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn template_item(&self) -> &str {
        &self.template_item
    }

    /// Выбрать шаблон. Возвращает true, если сменился бренд (нужно
    /// перезагрузить пресеты).
    pub fn set_template(&mut self, item_code: &str, brand: Option<&str>) -> bool {
        self.template_item = item_code.trim().to_string();
        let brand = brand.unwrap_or_default().trim().to_string();
        let changed = brand != self.brand;
        self.brand = brand;
        changed
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn fields(&self) -> Vec<FieldSpec> {
        size_grid_fields(self.catalog.names())
    }

    pub fn value(&self, field: &str) -> String {
        self.values.get(field).cloned().unwrap_or_default()
    }

    pub fn set_value(&mut self, field: &str, value: String) {
        if field == fields::SIZE_PRESET {
            self.select_preset(&value);
        } else {
            self.values.insert(field.to_string(), value);
        }
    }

    /// Пресет заполняет поле размеров; неизвестное имя ничего не меняет
    pub fn select_preset(&mut self, name: &str) -> bool {
        let Some(preset) = self.catalog.find(name) else {
            if name.is_empty() {
                self.values.remove(fields::SIZE_PRESET);
            }
            return false;
        };
        let sizes = preset.sizes.join();
        self.values
            .insert(fields::SIZE_PRESET.to_string(), name.to_string());
        self.values.insert(fields::GRID_SIZES.to_string(), sizes);
        true
    }

    pub fn begin_preset_load(&mut self) -> PresetTicket {
        self.seq.next()
    }

    /// Принять каталог; устаревший ответ игнорируется (false)
    pub fn finish_preset_load(
        &mut self,
        ticket: PresetTicket,
        result: Result<PresetCatalog, String>,
    ) -> bool {
        if !self.seq.is_latest(ticket) {
            return false;
        }
        match result {
            Ok(catalog) => {
                self.catalog = catalog;
                self.warning = None;
                if let Some(name) = self.catalog.default_preset().map(|p| p.name.clone()) {
                    if self.value(fields::GRID_SIZES).trim().is_empty() {
                        self.select_preset(&name);
                    }
                }
            }
            Err(e) => {
                log::warn!("Failed to load size presets: {}", e);
                self.catalog = PresetCatalog::empty();
                self.warning = Some(format!("Could not load size presets: {}", e));
            }
        }
        true
    }

    pub fn prepare(&self) -> Result<CreateVariantsRequest, String> {
        if self.template_item.is_empty() {
            return Err("Please choose a template item".to_string());
        }
        let errors = validate_values(&self.fields(), &self.values);
        if !errors.is_empty() {
            return Err(errors.join("; "));
        }
        let sizes = SizeList::parse(&self.value(fields::GRID_SIZES));
        if sizes.is_empty() {
            return Err("At least one size is required".to_string());
        }
        Ok(CreateVariantsRequest {
            template_item: self.template_item.clone(),
            color: self.value(fields::GRID_COLOR).trim().to_string(),
            sizes: sizes.join(),
        })
    }

    pub fn finish_submission(&mut self, result: Result<CreateVariantsResponse, String>) {
        self.submitting = false;
        match result {
            Ok(response) => {
                self.error = None;
                self.response = Some(response);
            }
            Err(e) => self.error = Some(e),
        }
    }
}
