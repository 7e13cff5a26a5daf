//! Состояние диалога быстрого ввода товара
//!
//! Вся логика диалога живет здесь, view только вызывает методы
//! и перерисовывается после каждого изменения.

use std::collections::HashMap;
use std::fmt;

use super::api::FashionItemsGateway;
use crate::shared::request_sequence::{PresetTicket, RequestSequence};
use contracts::shared::form::{fields, item_quick_entry_fields, FieldSpec};
use contracts::shared::naming::ItemTemplate;
use contracts::shared::quick_entry_settings::QuickEntrySettings;
use contracts::shared::sizes::{PresetCatalog, SelectionMode, SizeSelectionModel};
use contracts::usecases::u508_create_fashion_items::{
    CreateItemsRequest, CreatedItem, SubmissionOutcome,
};

/// Результат завершения загрузки пресетов
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetLoadOutcome {
    /// Каталог принят; `default` = примененный пресет по умолчанию
    Applied { default: Option<String> },
    /// Ответ устарел: после него был начат новый запрос
    Stale,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickEntryError {
    /// Метки незаполненных обязательных полей
    MissingFields(Vec<&'static str>),
    MissingSizes,
    Remote(String),
}

impl fmt::Display for QuickEntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields(labels) => {
                write!(f, "Please fill in: {}", labels.join(", "))
            }
            Self::MissingSizes => write!(f, "Please select at least one size"),
            Self::Remote(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for QuickEntryError {}

#[derive(Debug, Clone)]
pub struct QuickEntryState {
    values: HashMap<String, String>,
    model: SizeSelectionModel,
    catalog: PresetCatalog,
    selected_preset: String,
    seq: RequestSequence,
    preview_limit: usize,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub outcome: Option<SubmissionOutcome>,
    pub submitting: bool,
}

impl QuickEntryState {
    pub fn new(settings: &QuickEntrySettings) -> Self {
        Self {
            values: HashMap::new(),
            model: SizeSelectionModel::new(SelectionMode::Quantity, settings.selection_policy()),
            catalog: PresetCatalog::empty(),
            selected_preset: String::new(),
            seq: RequestSequence::new(),
            preview_limit: settings.preview_limit,
            warning: None,
            error: None,
            outcome: None,
            submitting: false,
        }
    }

    pub fn model(&self) -> &SizeSelectionModel {
        &self.model
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    pub fn selected_preset(&self) -> &str {
        &self.selected_preset
    }

    /// Значение поля для отображения в форме
    pub fn value(&self, field: &str) -> String {
        match field {
            fields::GENERATED_NAME => self.generated_name(),
            fields::SIZE_PRESET => self.selected_preset.clone(),
            _ => self.values.get(field).cloned().unwrap_or_default(),
        }
    }

    /// Изменить поле формы. Возвращает true, если изменился бренд
    /// (вызывающий код должен перезагрузить пресеты).
    pub fn set_value(&mut self, field: &str, value: String) -> bool {
        match field {
            fields::SIZE_PRESET => {
                self.select_preset(&value);
                false
            }
            fields::CUSTOM_SIZES => {
                self.set_sizes_text(&value);
                false
            }
            fields::GENERATED_NAME => false,
            _ => {
                let previous = self.values.insert(field.to_string(), value.clone());
                field == fields::BRAND
                    && previous.as_deref().unwrap_or_default().trim() != value.trim()
            }
        }
    }

    /// Размеры, введенные вручную; выбранный пресет сбрасывается
    pub fn set_sizes_text(&mut self, raw: &str) {
        let sizes = self.model.set_sizes_from_text(raw);
        self.values
            .insert(fields::CUSTOM_SIZES.to_string(), sizes.join());
        self.selected_preset.clear();
    }

    /// Выбрать пресет по имени. Неизвестное имя ничего не меняет.
    pub fn select_preset(&mut self, name: &str) -> bool {
        if name.is_empty() {
            self.selected_preset.clear();
            return false;
        }
        let Some(preset) = self.catalog.find(name).cloned() else {
            return false;
        };
        let sizes = self.model.apply_preset(&preset);
        self.values
            .insert(fields::CUSTOM_SIZES.to_string(), sizes.join());
        self.selected_preset = preset.name;
        true
    }

    pub fn set_quantity_text(&mut self, size: &str, raw: &str) -> u32 {
        self.model.set_quantity_text(size, raw)
    }

    pub fn select_all(&mut self) {
        self.model.select_all();
    }

    pub fn clear_all(&mut self) {
        self.model.clear_all();
    }

    pub fn brand(&self) -> String {
        self.value(fields::BRAND).trim().to_string()
    }

    /// Начать загрузку каталога; более ранние запросы становятся устаревшими
    pub fn begin_preset_load(&mut self) -> PresetTicket {
        self.seq.next()
    }

    /// Применить результат загрузки каталога.
    ///
    /// При ошибке каталог очищается, размеры и выбор не меняются.
    pub fn finish_preset_load(
        &mut self,
        ticket: PresetTicket,
        result: Result<PresetCatalog, String>,
    ) -> PresetLoadOutcome {
        if !self.seq.is_latest(ticket) {
            return PresetLoadOutcome::Stale;
        }

        match result {
            Err(e) => {
                log::warn!("Failed to load size presets: {}", e);
                self.catalog = PresetCatalog::empty();
                self.selected_preset.clear();
                self.warning = Some(format!("Could not load size presets: {}", e));
                PresetLoadOutcome::Failed(e)
            }
            Ok(catalog) => {
                self.warning = None;
                self.catalog = catalog;
                if self.catalog.find(&self.selected_preset).is_none() {
                    self.selected_preset.clear();
                }
                let default = self.catalog.default_preset().map(|p| p.name.clone());
                if let Some(name) = &default {
                    self.select_preset(name);
                }
                PresetLoadOutcome::Applied { default }
            }
        }
    }

    pub fn template(&self) -> ItemTemplate {
        ItemTemplate::new(
            self.value(fields::ITEM_GROUP),
            self.value(fields::BRAND),
            self.value(fields::ITEM_CODE),
            self.value(fields::COLOR),
        )
    }

    /// Наименование для первого активного размера (пусто, если выбора нет)
    pub fn generated_name(&self) -> String {
        match self.model.active_sizes().first() {
            Some(size) => self.model.generated_name(&self.template().with_size(size.as_str())),
            None => String::new(),
        }
    }

    /// Первые наименования и число оставшихся активных размеров
    pub fn preview(&self) -> (Vec<String>, usize) {
        let names = self.model.preview_names(&self.template(), self.preview_limit);
        let remaining = self.model.active_sizes().len().saturating_sub(names.len());
        (names, remaining)
    }

    pub fn prepare_submission(&self) -> Result<CreateItemsRequest, QuickEntryError> {
        let missing = FieldSpec::validate_required(&item_quick_entry_fields(), &self.values);
        if !missing.is_empty() {
            return Err(QuickEntryError::MissingFields(missing));
        }
        if !self.model.has_active() {
            return Err(QuickEntryError::MissingSizes);
        }
        Ok(CreateItemsRequest::from_model(&self.template(), &self.model))
    }

    /// Проверить форму и отправить запрос; при ошибке проверки gateway не вызывается
    pub async fn submit<G: FashionItemsGateway>(
        &self,
        gateway: &G,
    ) -> Result<SubmissionOutcome, QuickEntryError> {
        let request = self.prepare_submission()?;
        submit_request(gateway, request).await
    }

    /// Применить результат отправки.
    ///
    /// Возвращает созданные товары для передачи вызывающей форме;
    /// количество не меньше 1.
    pub fn finish_submission(
        &mut self,
        result: Result<SubmissionOutcome, QuickEntryError>,
    ) -> Option<Vec<CreatedItem>> {
        self.submitting = false;
        match result {
            Ok(outcome) => {
                self.error = None;
                let created = match &outcome {
                    SubmissionOutcome::Created { items, .. } => Some(
                        items
                            .iter()
                            .cloned()
                            .map(|mut item| {
                                item.qty = item.qty.max(1);
                                item
                            })
                            .collect(),
                    ),
                    SubmissionOutcome::NothingCreated { .. } => None,
                };
                self.outcome = Some(outcome);
                created
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

pub async fn submit_request<G: FashionItemsGateway>(
    gateway: &G,
    request: CreateItemsRequest,
) -> Result<SubmissionOutcome, QuickEntryError> {
    let requested = request.size_list().len();
    let response = gateway
        .create_items(&request)
        .await
        .map_err(QuickEntryError::Remote)?;
    Ok(response.into_outcome(requested))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::sizes::Preset;
    use contracts::usecases::u508_create_fashion_items::CreateItemsResponse;
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Gateway, который запоминает запросы и отвечает заготовками
    struct RecordingGateway {
        presets: Result<PresetCatalog, String>,
        response: Result<CreateItemsResponse, String>,
        brands: RefCell<Vec<String>>,
        requests: RefCell<Vec<CreateItemsRequest>>,
    }

    impl RecordingGateway {
        fn new(presets: Result<PresetCatalog, String>) -> Self {
            Self {
                presets,
                response: Ok(CreateItemsResponse::default()),
                brands: RefCell::new(Vec::new()),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl FashionItemsGateway for RecordingGateway {
        async fn fetch_presets(&self, brand: &str) -> Result<PresetCatalog, String> {
            self.brands.borrow_mut().push(brand.to_string());
            self.presets.clone()
        }

        async fn create_items(
            &self,
            request: &CreateItemsRequest,
        ) -> Result<CreateItemsResponse, String> {
            self.requests.borrow_mut().push(request.clone());
            self.response.clone()
        }
    }

    fn acme_catalog() -> PresetCatalog {
        PresetCatalog {
            presets: vec![
                Preset::new("Acme kids", "98, 104, 110"),
                Preset::new("Standard (S-XL)", "S, M, L, XL"),
            ],
            default: Some("Acme kids".to_string()),
        }
    }

    fn filled_state() -> QuickEntryState {
        let mut state = QuickEntryState::new(&QuickEntrySettings::default());
        state.set_value(fields::ITEM_CODE, "D100".to_string());
        state.set_value(fields::ITEM_GROUP, "Dresses".to_string());
        state.set_value(fields::COLOR, "Red".to_string());
        state
    }

    fn created(code: &str) -> CreatedItem {
        CreatedItem {
            name: code.to_string(),
            item_code: code.to_string(),
            item_name: code.to_string(),
            stock_uom: "Nos".to_string(),
            barcode: Some("2000000000015".to_string()),
            size: String::new(),
            qty: 1,
        }
    }

    #[test]
    fn test_brand_change_is_reported() {
        let mut state = filled_state();
        assert!(state.set_value(fields::BRAND, "Acme".to_string()));
        assert!(!state.set_value(fields::BRAND, " Acme ".to_string()));
        assert!(!state.set_value(fields::COLOR, "Blue".to_string()));
    }

    #[test]
    fn test_default_preset_is_applied_and_activated() {
        let mut state = filled_state();
        let gateway = RecordingGateway::new(Ok(acme_catalog()));

        let ticket = state.begin_preset_load();
        let result = block_on(gateway.fetch_presets("Acme"));
        let outcome = state.finish_preset_load(ticket, result);

        assert_eq!(
            outcome,
            PresetLoadOutcome::Applied {
                default: Some("Acme kids".to_string())
            }
        );
        assert_eq!(state.selected_preset(), "Acme kids");
        assert_eq!(state.value(fields::CUSTOM_SIZES), "98, 104, 110");
        assert_eq!(state.model().active_sizes(), vec!["98", "104", "110"]);
        assert_eq!(gateway.brands.borrow().as_slice(), ["Acme"]);
    }

    #[test]
    fn test_failed_load_keeps_sizes_and_warns() {
        let mut state = filled_state();
        state.set_sizes_text("S, M");
        state.set_quantity_text("M", "0");
        let before = state.model().clone();

        let ticket = state.begin_preset_load();
        let outcome = state.finish_preset_load(ticket, Err("HTTP error: 500".to_string()));

        assert_eq!(outcome, PresetLoadOutcome::Failed("HTTP error: 500".to_string()));
        assert!(state.catalog().is_empty());
        assert_eq!(state.model(), &before);
        assert_eq!(state.model().active_sizes(), vec!["S"]);
        assert_eq!(
            state.warning.as_deref(),
            Some("Could not load size presets: HTTP error: 500")
        );
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut state = filled_state();
        let first = state.begin_preset_load();
        let second = state.begin_preset_load();

        assert_eq!(
            state.finish_preset_load(first, Ok(acme_catalog())),
            PresetLoadOutcome::Stale
        );
        assert!(state.catalog().is_empty());
        assert!(state.model().sizes().is_empty());

        let outcome = state.finish_preset_load(second, Ok(PresetCatalog::empty()));
        assert_eq!(outcome, PresetLoadOutcome::Applied { default: None });
    }

    #[test]
    fn test_unknown_preset_is_noop() {
        let mut state = filled_state();
        let ticket = state.begin_preset_load();
        state.finish_preset_load(ticket, Ok(acme_catalog()));

        assert!(!state.select_preset("Missing"));
        assert_eq!(state.selected_preset(), "Acme kids");
        assert!(state.select_preset("Standard (S-XL)"));
        assert_eq!(state.model().sizes().join(), "S, M, L, XL");
    }

    #[test]
    fn test_generated_name_and_preview() {
        let mut state = QuickEntryState::new(&QuickEntrySettings {
            preview_limit: 2,
            auto_activate_sizes: true,
        });
        state.set_value(fields::ITEM_CODE, "D100".to_string());
        state.set_value(fields::ITEM_GROUP, "Dresses".to_string());
        state.set_value(fields::BRAND, "Acme".to_string());
        state.set_value(fields::COLOR, "Red".to_string());
        assert_eq!(state.value(fields::GENERATED_NAME), "");

        state.set_sizes_text("S, M, L");
        state.set_quantity_text("S", "0");
        assert_eq!(state.generated_name(), "Dresses Acme, D100, Red, M");

        let (names, remaining) = state.preview();
        assert_eq!(names, vec!["Dresses Acme, D100, Red, M", "Dresses Acme, D100, Red, L"]);
        assert_eq!(remaining, 0);

        state.set_quantity_text("S", "2");
        assert_eq!(state.preview().1, 1);
    }

    #[test]
    fn test_submit_without_active_sizes_makes_no_call() {
        let mut state = filled_state();
        state.set_sizes_text("S, M");
        state.clear_all();
        let gateway = RecordingGateway::new(Ok(PresetCatalog::empty()));

        let err = block_on(state.submit(&gateway)).unwrap_err();
        assert_eq!(err, QuickEntryError::MissingSizes);
        assert!(gateway.requests.borrow().is_empty());
    }

    #[test]
    fn test_submit_with_missing_fields_makes_no_call() {
        let mut state = QuickEntryState::new(&QuickEntrySettings::default());
        state.set_value(fields::ITEM_CODE, "D100".to_string());
        state.set_sizes_text("S");
        let gateway = RecordingGateway::new(Ok(PresetCatalog::empty()));

        let err = block_on(state.submit(&gateway)).unwrap_err();
        assert_eq!(
            err,
            QuickEntryError::MissingFields(vec!["Item Group (Категорія)", "Color (Колір)"])
        );
        assert!(err.to_string().starts_with("Please fill in: Item Group"));
        assert!(gateway.requests.borrow().is_empty());
    }

    #[test]
    fn test_submit_sends_quantities_and_reports_partial() {
        let mut state = filled_state();
        state.set_sizes_text("S, M, L");
        state.set_quantity_text("M", "3.7");
        state.set_quantity_text("L", "-1");

        let mut gateway = RecordingGateway::new(Ok(PresetCatalog::empty()));
        gateway.response = Ok(CreateItemsResponse {
            items: vec![created("D100-RED-S")],
            count: 1,
            errors: vec!["D100-RED-M: Storage error: write rejected".to_string()],
        });

        let outcome = block_on(state.submit(&gateway)).unwrap();
        assert!(outcome.is_partial());

        let requests = gateway.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].sizes, "S, M");
        assert_eq!(requests[0].quantity_for("M"), 3);

        state.finish_submission(Ok(outcome));
        assert!(state.error.is_none());
        assert!(matches!(
            state.outcome,
            Some(SubmissionOutcome::Created { missing: 1, .. })
        ));
    }

    #[test]
    fn test_remote_error_is_surfaced() {
        let state = {
            let mut s = filled_state();
            s.set_sizes_text("S");
            s
        };
        let mut gateway = RecordingGateway::new(Ok(PresetCatalog::empty()));
        gateway.response = Err("At least one size is required".to_string());

        let mut state = state;
        let result = block_on(state.submit(&gateway));
        assert!(state.finish_submission(result).is_none());
        assert_eq!(state.error.as_deref(), Some("At least one size is required"));
        assert!(state.outcome.is_none());
    }

    #[test]
    fn test_created_items_are_handed_over_with_quantities() {
        let mut state = filled_state();
        state.set_sizes_text("S, M");
        state.set_quantity_text("S", "4");

        let mut small = created("D100-RED-S");
        small.size = "S".to_string();
        small.qty = 4;
        let mut medium = created("D100-RED-M");
        medium.size = "M".to_string();
        medium.qty = 0;

        let mut gateway = RecordingGateway::new(Ok(PresetCatalog::empty()));
        gateway.response = Ok(CreateItemsResponse {
            items: vec![small, medium],
            count: 2,
            errors: Vec::new(),
        });

        let result = block_on(state.submit(&gateway));
        let items = state.finish_submission(result).unwrap();

        let handed: Vec<_> = items
            .iter()
            .map(|i| (i.item_code.as_str(), i.size.as_str(), i.qty))
            .collect();
        assert_eq!(handed, [("D100-RED-S", "S", 4), ("D100-RED-M", "M", 1)]);
        assert!(matches!(
            state.outcome,
            Some(SubmissionOutcome::Created { missing: 0, .. })
        ));
    }

    #[test]
    fn test_nothing_created_is_not_handed_over() {
        let mut state = filled_state();
        state.set_sizes_text("S");
        let mut gateway = RecordingGateway::new(Ok(PresetCatalog::empty()));
        gateway.response = Ok(CreateItemsResponse {
            items: Vec::new(),
            count: 0,
            errors: vec!["D100-RED-S: Storage error: write rejected".to_string()],
        });

        let result = block_on(state.submit(&gateway));
        assert!(state.finish_submission(result).is_none());
        assert!(matches!(
            state.outcome,
            Some(SubmissionOutcome::NothingCreated { .. })
        ));
    }
}
