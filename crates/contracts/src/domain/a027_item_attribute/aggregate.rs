use serde::{Deserialize, Serialize};

pub const COLOR_ATTRIBUTE: &str = "Color";
pub const SIZE_ATTRIBUTE: &str = "Size";

/// Значение атрибута с аббревиатурой для кодов вариантов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    pub attribute_value: String,
    pub abbr: String,
}

/// Атрибут товара (Color, Size) со списком допустимых значений
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemAttribute {
    pub name: String,
    #[serde(default)]
    pub values: Vec<AttributeValue>,
}

impl ItemAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.attribute_value == value)
    }

    /// Добавить значение, если его еще нет. Возвращает true, если добавлено.
    ///
    /// Аббревиатура: первые 3 символа в верхнем регистре (или все значение,
    /// если оно короче); при совпадении добавляется счетчик 1, 2, ...
    pub fn ensure_value(&mut self, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || self.has_value(value) {
            return false;
        }

        let base: String = value.chars().take(3).collect::<String>().to_uppercase();
        let mut abbr = base.clone();
        let mut counter = 1;
        while self.values.iter().any(|v| v.abbr == abbr) {
            abbr = format!("{}{}", base, counter);
            counter += 1;
        }

        self.values.push(AttributeValue {
            attribute_value: value.to_string(),
            abbr,
        });
        true
    }

    pub fn abbr_of(&self, value: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.attribute_value == value)
            .map(|v| v.abbr.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_value_generates_unique_abbr() {
        let mut attr = ItemAttribute::new(COLOR_ATTRIBUTE);
        assert!(attr.ensure_value("Black"));
        assert!(attr.ensure_value("Blaze"));
        assert!(attr.ensure_value("Blast"));
        assert!(!attr.ensure_value("Black"));

        assert_eq!(attr.abbr_of("Black"), Some("BLA"));
        assert_eq!(attr.abbr_of("Blaze"), Some("BLA1"));
        assert_eq!(attr.abbr_of("Blast"), Some("BLA2"));
    }

    #[test]
    fn test_short_and_unicode_values() {
        let mut attr = ItemAttribute::new(SIZE_ATTRIBUTE);
        assert!(attr.ensure_value("m"));
        assert!(attr.ensure_value("чорний"));
        assert_eq!(attr.abbr_of("m"), Some("M"));
        assert_eq!(attr.abbr_of("чорний"), Some("ЧОР"));
        assert!(!attr.ensure_value("  "));
    }
}
