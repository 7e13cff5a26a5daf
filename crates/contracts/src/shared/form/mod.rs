//! Поля диалогов и их проверка
//!
//! - field_spec.rs: типизированное описание поля
//! - validation.rs: правила проверки значения
//! - dialogs.rs: наборы полей для диалогов создания

mod dialogs;
mod field_spec;
mod validation;

pub use dialogs::{
    fields, item_quick_entry_fields, size_grid_fields, size_preset_quick_entry_fields,
};
pub use field_spec::{select_options, validate_values, FieldBase, FieldSpec};
pub use validation::ValidationRules;
