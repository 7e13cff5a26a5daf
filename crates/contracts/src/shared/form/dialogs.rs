//! Field lists of the three creation dialogs

use super::field_spec::{select_options, FieldBase, FieldSpec};

/// Имена полей диалогов
pub mod fields {
    pub const ITEM_CODE: &str = "item_code";
    pub const ITEM_GROUP: &str = "item_group";
    pub const BRAND: &str = "brand";
    pub const COLOR: &str = "custom_color";
    pub const GENERATED_NAME: &str = "generated_name";
    pub const SIZE_PRESET: &str = "size_preset";
    pub const CUSTOM_SIZES: &str = "custom_sizes";
    pub const SIZES_GRID: &str = "sizes_grid";

    pub const PRESET_NAME: &str = "__newname";
    pub const IS_DEFAULT_FOR_BRAND: &str = "is_default_for_brand";
    pub const DISABLED: &str = "disabled";
    pub const SIZES_EDITOR: &str = "sizes_editor";

    pub const GRID_COLOR: &str = "color";
    pub const GRID_SIZES: &str = "sizes";
}

/// Быстрый ввод товара: артикул, категория, бренд, цвет и таблица размеров
pub fn item_quick_entry_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::TextInput(FieldBase::new(fields::ITEM_CODE, "Item Code (Артикул)").required()),
        FieldSpec::LinkInput {
            base: FieldBase::new(fields::ITEM_GROUP, "Item Group (Категорія)").required(),
            target: "Item Group",
        },
        FieldSpec::LinkInput {
            base: FieldBase::new(fields::BRAND, "Brand (Виробник)"),
            target: "Brand",
        },
        FieldSpec::ColumnBreak,
        FieldSpec::TextInput(FieldBase::new(fields::COLOR, "Color (Колір)").required()),
        FieldSpec::ReadOnlyDisplay(FieldBase::new(fields::GENERATED_NAME, "Name")),
        FieldSpec::SectionBreak {
            label: Some("Sizes"),
        },
        FieldSpec::Select {
            base: FieldBase::new(fields::SIZE_PRESET, "Size Preset"),
            options: select_options(Vec::<String>::new()),
        },
        FieldSpec::TextInput(FieldBase::new(fields::CUSTOM_SIZES, "Custom Sizes").hidden()),
        // Выбор размеров проверяется при отправке, а не как обязательное поле
        FieldSpec::Html {
            fieldname: fields::SIZES_GRID,
        },
    ]
}

/// Быстрый ввод пресета размеров с редактором "чипов"
pub fn size_preset_quick_entry_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::TextInput(FieldBase::new(fields::PRESET_NAME, "Preset Name").required()),
        FieldSpec::LinkInput {
            base: FieldBase::new(fields::BRAND, "Brand"),
            target: "Brand",
        },
        FieldSpec::Checkbox {
            base: FieldBase::new(fields::IS_DEFAULT_FOR_BRAND, "Default for this Brand"),
            default: false,
        },
        FieldSpec::ColumnBreak,
        FieldSpec::Checkbox {
            base: FieldBase::new(fields::DISABLED, "Disabled"),
            default: false,
        },
        FieldSpec::SectionBreak {
            label: Some("Sizes"),
        },
        FieldSpec::Html {
            fieldname: fields::SIZES_EDITOR,
        },
    ]
}

/// Диалог "Create Size Grid" для шаблона с вариантами
pub fn size_grid_fields<I, S>(preset_names: I) -> Vec<FieldSpec>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    vec![
        FieldSpec::TextInput(
            FieldBase::new(fields::GRID_COLOR, "Color")
                .required()
                .describe("Enter color name (e.g. Red, Blue, Black)"),
        ),
        FieldSpec::Select {
            base: FieldBase::new(fields::SIZE_PRESET, "Size Preset"),
            options: select_options(preset_names),
        },
        FieldSpec::TextInput(
            FieldBase::new(fields::GRID_SIZES, "Sizes (Comma separated)")
                .required()
                .describe("e.g. 36, 38, 40, 42"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::validate_values;
    use std::collections::HashMap;

    #[test]
    fn test_item_quick_entry_required_fields() {
        let required: Vec<_> = item_quick_entry_fields()
            .iter()
            .filter(|f| f.is_required())
            .filter_map(FieldSpec::fieldname)
            .collect();
        assert_eq!(
            required,
            vec![fields::ITEM_CODE, fields::ITEM_GROUP, fields::COLOR]
        );
    }

    #[test]
    fn test_size_grid_options_start_with_empty() {
        let f = size_grid_fields(["Standard (S-XL)"]);
        match &f[1] {
            FieldSpec::Select { options, .. } => {
                assert_eq!(options, &vec![String::new(), "Standard (S-XL)".to_string()])
            }
            other => panic!("unexpected field {:?}", other),
        }
    }

    #[test]
    fn test_size_grid_validation() {
        let values = HashMap::from([(fields::GRID_COLOR.to_string(), "Red".to_string())]);
        let errors = validate_values(&size_grid_fields(Vec::<String>::new()), &values);
        assert_eq!(errors, vec!["Sizes (Comma separated) is required".to_string()]);
    }
}
