//! Правила формирования наименований и кодов товаров-вариантов
//!
//! Наименование: "Категория[ Бренд], Артикул, Цвет, Размер".
//! Код варианта: "АРТИКУЛ-ЦВЕТ-РАЗМЕР" (пробелы и "/" заменяются на "-").

use serde::{Deserialize, Serialize};

/// Общие поля товара, из которых строятся варианты по размерам
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemTemplate {
    /// Группа товара (категория)
    pub category: String,
    /// Бренд (производитель), может быть пустым
    pub brand: String,
    /// Артикул
    pub article: String,
    pub color: String,
}

impl ItemTemplate {
    pub fn new(
        category: impl Into<String>,
        brand: impl Into<String>,
        article: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            brand: brand.into(),
            article: article.into(),
            color: color.into(),
        }
    }

    /// Поля из формы, где отсутствующее значение = пустая строка
    pub fn from_optional(
        category: Option<&str>,
        brand: Option<&str>,
        article: Option<&str>,
        color: Option<&str>,
    ) -> Self {
        Self::new(
            category.unwrap_or_default(),
            brand.unwrap_or_default(),
            article.unwrap_or_default(),
            color.unwrap_or_default(),
        )
    }

    pub fn with_size(&self, size: impl Into<String>) -> VariantNameInputs {
        VariantNameInputs {
            template: self.clone(),
            size: size.into(),
        }
    }
}

/// Входные данные для наименования одного варианта
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VariantNameInputs {
    pub template: ItemTemplate,
    pub size: String,
}

/// Наименование варианта.
///
/// Пустая строка, если не заполнены категория, артикул, цвет или размер.
pub fn generated_name(inputs: &VariantNameInputs) -> String {
    let t = &inputs.template;
    let category = t.category.trim();
    let brand = t.brand.trim();
    let article = t.article.trim();
    let color = t.color.trim();
    let size = inputs.size.trim();

    if category.is_empty() || article.is_empty() || color.is_empty() || size.is_empty() {
        return String::new();
    }

    let mut name = category.to_string();
    if !brand.is_empty() {
        name.push(' ');
        name.push_str(brand);
    }
    name.push_str(&format!(", {}, {}, {}", article, color, size));
    name
}

/// Код варианта для быстрого ввода: "D100-RED-M"
pub fn variant_item_code(article: &str, color: &str, size: &str) -> String {
    format!("{}-{}-{}", article.trim(), color.trim(), size.trim())
        .replace(' ', "-")
        .replace('/', "-")
        .to_uppercase()
}

/// Очистка сегмента кода: trim, пробелы и "/" -> "-", верхний регистр
pub fn clean_code_segment(value: &str) -> String {
    value
        .trim()
        .replace(' ', "-")
        .replace('/', "-")
        .to_uppercase()
}

/// Код и наименование шаблона по бренду и артикулу производителя (MPN)
pub fn template_code_and_name(item_group: &str, brand: &str, mpn: &str) -> (String, String) {
    let code = format!("{}-{}", clean_code_segment(brand), clean_code_segment(mpn));
    let name = format!("{} {}, {}", item_group.trim(), brand.trim(), mpn.trim());
    (code, name)
}

/// Код и наименование варианта шаблона с цветом и размером
pub fn template_variant_code_and_name(
    item_group: &str,
    brand: &str,
    mpn: &str,
    color: &str,
    size: &str,
) -> (String, String) {
    let code = format!(
        "{}-{}-{}-{}",
        clean_code_segment(brand),
        clean_code_segment(mpn),
        clean_code_segment(color),
        clean_code_segment(size)
    );
    let name = format!(
        "{} {}, {}, {}, {}",
        item_group.trim(),
        brand.trim(),
        mpn.trim(),
        color.trim(),
        size.trim()
    );
    (code, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dress(brand: &str) -> ItemTemplate {
        ItemTemplate::new("Dresses", brand, "D100", "Red")
    }

    #[test]
    fn test_generated_name_without_brand() {
        assert_eq!(generated_name(&dress("").with_size("M")), "Dresses, D100, Red, M");
    }

    #[test]
    fn test_generated_name_with_brand() {
        assert_eq!(
            generated_name(&dress("Acme").with_size("M")),
            "Dresses Acme, D100, Red, M"
        );
    }

    #[test]
    fn test_generated_name_requires_fields() {
        let mut t = dress("Acme");
        t.article = String::new();
        assert_eq!(generated_name(&t.with_size("M")), "");
        assert_eq!(generated_name(&dress("Acme").with_size("")), "");
        assert_eq!(generated_name(&dress("Acme").with_size("  ")), "");

        let t = ItemTemplate::from_optional(Some("Dresses"), None, Some("D100"), None);
        assert_eq!(generated_name(&t.with_size("M")), "");
    }

    #[test]
    fn test_generated_name_trims_fields() {
        let t = ItemTemplate::new(" Dresses ", "  ", " D100", "Red ");
        assert_eq!(generated_name(&t.with_size(" M ")), "Dresses, D100, Red, M");
    }

    #[test]
    fn test_variant_item_code() {
        assert_eq!(variant_item_code("d100", "Dark Blue", "S/M"), "D100-DARK-BLUE-S-M");
        assert_eq!(variant_item_code("A1", "Червоний", "40"), "A1-ЧЕРВОНИЙ-40");
    }

    #[test]
    fn test_template_naming() {
        let (code, name) = template_code_and_name("Jeans", "Levi's Co", "501/XX");
        assert_eq!(code, "LEVI'S-CO-501-XX");
        assert_eq!(name, "Jeans Levi's Co, 501/XX");

        let (code, name) = template_variant_code_and_name("Jeans", "Acme", "J1", "Blue", "32");
        assert_eq!(code, "ACME-J1-BLUE-32");
        assert_eq!(name, "Jeans Acme, J1, Blue, 32");
    }
}
