use super::selection::clamp_quantity;
use super::{parse_quantity, Preset, SelectionMode, SelectionPolicy, SelectionState, SizeList};
use crate::shared::naming::{generated_name, ItemTemplate, VariantNameInputs};

/// Модель выбора размеров диалога быстрого ввода.
///
/// Хранит текущий список размеров и состояние выбора. Все операции
/// не возвращают ошибок: некорректный ввод просто отбрасывается.
/// Создается при открытии диалога и выбрасывается при его закрытии.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSelectionModel {
    sizes: SizeList,
    selection: SelectionState,
    policy: SelectionPolicy,
}

impl SizeSelectionModel {
    pub fn new(mode: SelectionMode, policy: SelectionPolicy) -> Self {
        Self {
            sizes: SizeList::new(),
            selection: SelectionState::empty(mode),
            policy,
        }
    }

    /// Таблица размеров с количеством (политика по умолчанию: автовыбор)
    pub fn quantity_mode() -> Self {
        Self::new(
            SelectionMode::Quantity,
            SelectionPolicy::default_for(SelectionMode::Quantity),
        )
    }

    /// Пилюли размеров (политика по умолчанию: без автовыбора)
    pub fn toggle_mode() -> Self {
        Self::new(
            SelectionMode::Toggle,
            SelectionPolicy::default_for(SelectionMode::Toggle),
        )
    }

    pub fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn sizes(&self) -> &SizeList {
        &self.sizes
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Заменить список размеров текстом через запятую.
    ///
    /// Порядок согласования: замена списка, затем пересечение состояния
    /// с новым списком, затем (если включено) автовыбор всех размеров.
    pub fn set_sizes_from_text(&mut self, raw: &str) -> SizeList {
        self.replace_sizes(SizeList::parse(raw));
        self.sizes.clone()
    }

    /// То же, что `set_sizes_from_text`, но для списка из пресета
    pub fn apply_preset(&mut self, preset: &Preset) -> SizeList {
        self.replace_sizes(preset.sizes.clone());
        self.sizes.clone()
    }

    fn replace_sizes(&mut self, next: SizeList) {
        let changed = next != self.sizes;
        self.sizes = next;
        self.selection.retain_in(&self.sizes);

        if self.policy.auto_activate_when_empty
            && changed
            && !self.sizes.is_empty()
            && !self.selection.has_active()
        {
            self.select_all();
        }
    }

    /// Переключить размер. Возвращает новое состояние (активен или нет).
    ///
    /// Размер, которого нет в списке, игнорируется.
    pub fn toggle_size(&mut self, size: &str) -> bool {
        if !self.sizes.contains(size) {
            return false;
        }
        let next = if self.selection.is_active(size) { 0 } else { 1 };
        self.selection.set(size, next);
        next > 0
    }

    /// Установить количество; отрицательное значение дает 0
    pub fn set_quantity(&mut self, size: &str, qty: i64) -> u32 {
        if !self.sizes.contains(size) {
            return 0;
        }
        let qty = clamp_quantity(qty);
        self.selection.set(size, qty);
        self.selection.quantity(size)
    }

    /// Установить количество из введенного текста (см. `parse_quantity`)
    pub fn set_quantity_text(&mut self, size: &str, raw: &str) -> u32 {
        self.set_quantity(size, i64::from(parse_quantity(raw)))
    }

    pub fn select_all(&mut self) {
        for size in self.sizes.iter() {
            self.selection.set(size, 1);
        }
    }

    pub fn clear_all(&mut self) {
        self.selection.clear();
    }

    pub fn is_active(&self, size: &str) -> bool {
        self.selection.is_active(size)
    }

    pub fn quantity(&self, size: &str) -> u32 {
        self.selection.quantity(size)
    }

    pub fn has_active(&self) -> bool {
        self.selection.has_active()
    }

    /// Активные размеры в порядке списка (не в порядке активации)
    pub fn active_sizes(&self) -> Vec<String> {
        self.sizes
            .iter()
            .filter(|s| self.selection.is_active(s))
            .map(str::to_string)
            .collect()
    }

    /// Пары (размер, количество) для активных размеров в порядке списка
    pub fn quantities(&self) -> Vec<(String, u32)> {
        self.sizes
            .iter()
            .filter(|s| self.selection.is_active(s))
            .map(|s| (s.to_string(), self.selection.quantity(s)))
            .collect()
    }

    pub fn generated_name(&self, inputs: &VariantNameInputs) -> String {
        generated_name(inputs)
    }

    /// Наименования для активных размеров, не более `limit` штук.
    ///
    /// Строку "и еще N" формирует вызывающий код.
    pub fn preview_names(&self, template: &ItemTemplate, limit: usize) -> Vec<String> {
        self.sizes
            .iter()
            .filter(|s| self.selection.is_active(s))
            .take(limit)
            .map(|s| generated_name(&template.with_size(s)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_auto(mode: SelectionMode) -> SizeSelectionModel {
        SizeSelectionModel::new(
            mode,
            SelectionPolicy {
                auto_activate_when_empty: false,
            },
        )
    }

    #[test]
    fn test_set_sizes_from_text_returns_canonical_list() {
        let mut model = SizeSelectionModel::toggle_mode();
        let list = model.set_sizes_from_text("S, S, , M,S");
        assert_eq!(list.as_slice(), ["S", "M"]);
        assert_eq!(model.sizes(), &list);
    }

    #[test]
    fn test_quantity_mode_auto_activates_new_list() {
        let mut model = SizeSelectionModel::quantity_mode();
        model.set_sizes_from_text("S, M, L");
        assert_eq!(model.active_sizes(), vec!["S", "M", "L"]);
        assert_eq!(model.quantity("M"), 1);
    }

    #[test]
    fn test_toggle_mode_does_not_auto_activate() {
        let mut model = SizeSelectionModel::toggle_mode();
        model.set_sizes_from_text("S, M, L");
        assert!(model.active_sizes().is_empty());
    }

    #[test]
    fn test_reconciliation_drops_missing_sizes() {
        let mut model = SizeSelectionModel::quantity_mode();
        model.set_sizes_from_text("S, M, L");
        model.clear_all();
        model.set_quantity("M", 3);

        model.set_sizes_from_text("M, L, XL");
        assert_eq!(model.active_sizes(), vec!["M"]);
        assert_eq!(model.quantity("M"), 3);
        assert_eq!(model.quantity("XL"), 0);
    }

    #[test]
    fn test_reconciliation_in_toggle_mode() {
        let mut model = SizeSelectionModel::toggle_mode();
        model.set_sizes_from_text("S, M, L");
        model.toggle_size("S");
        model.toggle_size("L");

        model.set_sizes_from_text("L, XL");
        assert_eq!(model.active_sizes(), vec!["L"]);
    }

    #[test]
    fn test_auto_activation_when_intersection_is_empty() {
        let mut model = SizeSelectionModel::quantity_mode();
        model.set_sizes_from_text("S, M");
        model.set_sizes_from_text("36, 38");
        assert_eq!(model.active_sizes(), vec!["36", "38"]);

        let mut model = no_auto(SelectionMode::Quantity);
        model.set_sizes_from_text("S, M");
        assert!(model.active_sizes().is_empty());
    }

    #[test]
    fn test_same_text_is_idempotent() {
        let mut model = SizeSelectionModel::quantity_mode();
        model.set_sizes_from_text("S, M, L");
        model.clear_all();
        let before = model.clone();

        let list = model.set_sizes_from_text("S, M, L");
        assert_eq!(&list, before.sizes());
        assert_eq!(model, before);
    }

    #[test]
    fn test_active_sizes_follow_list_order() {
        let mut model = SizeSelectionModel::toggle_mode();
        model.set_sizes_from_text("XS, S, M, L");
        model.toggle_size("L");
        model.toggle_size("XS");
        model.toggle_size("M");
        assert_eq!(model.active_sizes(), vec!["XS", "M", "L"]);
    }

    #[test]
    fn test_toggle_unknown_size_is_ignored() {
        let mut model = SizeSelectionModel::toggle_mode();
        model.set_sizes_from_text("S");
        assert!(!model.toggle_size("XXL"));
        assert_eq!(model.set_quantity("XXL", 4), 0);
        assert!(model.active_sizes().is_empty());
    }

    #[test]
    fn test_toggle_twice_deactivates() {
        let mut model = SizeSelectionModel::toggle_mode();
        model.set_sizes_from_text("S, M");
        assert!(model.toggle_size("S"));
        assert!(!model.toggle_size("S"));
        assert!(!model.has_active());
    }

    #[test]
    fn test_set_quantity_clamps() {
        let mut model = SizeSelectionModel::quantity_mode();
        model.set_sizes_from_text("S, M");
        assert_eq!(model.set_quantity("S", -5), 0);
        assert_eq!(model.set_quantity_text("M", "2.7"), 2);
        assert_eq!(model.set_quantity_text("M", "abc"), 0);
        assert!(!model.has_active());
    }

    #[test]
    fn test_select_all_and_clear_all() {
        let mut model = no_auto(SelectionMode::Quantity);
        model.set_sizes_from_text("36, 38, 40");
        model.select_all();
        assert_eq!(
            model.quantities(),
            vec![
                ("36".to_string(), 1),
                ("38".to_string(), 1),
                ("40".to_string(), 1)
            ]
        );
        model.clear_all();
        assert!(model.active_sizes().is_empty());
    }

    #[test]
    fn test_apply_preset() {
        let mut model = SizeSelectionModel::quantity_mode();
        let preset = Preset::new("Jeans (28-36)", "28, 29, 30");
        let list = model.apply_preset(&preset);
        assert_eq!(list.as_slice(), ["28", "29", "30"]);
        assert_eq!(model.active_sizes().len(), 3);
    }

    #[test]
    fn test_preview_names_limit() {
        let mut model = SizeSelectionModel::quantity_mode();
        model.set_sizes_from_text("S, M, L, XL");
        model.set_quantity("M", 0);

        let template = ItemTemplate::new("Dresses", "Acme", "D100", "Red");
        let names = model.preview_names(&template, 2);
        assert_eq!(
            names,
            vec!["Dresses Acme, D100, Red, S", "Dresses Acme, D100, Red, L"]
        );
        assert_eq!(model.preview_names(&template, 10).len(), 3);
    }

    #[test]
    fn test_generated_name_delegates() {
        let model = SizeSelectionModel::toggle_mode();
        let inputs = ItemTemplate::new("Dresses", "", "D100", "Red").with_size("M");
        assert_eq!(model.generated_name(&inputs), "Dresses, D100, Red, M");
    }
}
