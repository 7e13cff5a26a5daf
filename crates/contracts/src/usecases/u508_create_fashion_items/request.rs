use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::naming::ItemTemplate;
use crate::shared::sizes::{SelectionMode, SizeList, SizeSelectionModel};

/// Запрос на создание товаров по размерам (один на отправку диалога)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItemsRequest {
    /// Артикул
    pub item_code: String,
    /// Категория
    pub item_group: String,
    #[serde(default)]
    pub brand: String,
    pub color: String,
    /// Активные размеры через запятую: "S, M, L"
    pub sizes: String,
    /// Количество по размеру (только для таблицы с количеством)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes_qty: Option<BTreeMap<String, u32>>,
}

impl CreateItemsRequest {
    /// Собрать запрос из полей формы и активных размеров модели
    pub fn from_model(template: &ItemTemplate, model: &SizeSelectionModel) -> Self {
        let sizes = SizeList::from(model.active_sizes()).join();
        let sizes_qty = match model.mode() {
            SelectionMode::Quantity => Some(model.quantities().into_iter().collect()),
            SelectionMode::Toggle => None,
        };
        Self {
            item_code: template.article.trim().to_string(),
            item_group: template.category.trim().to_string(),
            brand: template.brand.trim().to_string(),
            color: template.color.trim().to_string(),
            sizes,
            sizes_qty,
        }
    }

    pub fn size_list(&self) -> SizeList {
        SizeList::parse(&self.sizes)
    }

    pub fn template(&self) -> ItemTemplate {
        ItemTemplate::new(
            self.item_group.as_str(),
            self.brand.as_str(),
            self.item_code.as_str(),
            self.color.as_str(),
        )
    }

    /// Количество для строки документа: не меньше 1
    pub fn quantity_for(&self, size: &str) -> u32 {
        self.sizes_qty
            .as_ref()
            .and_then(|m| m.get(size).copied())
            .unwrap_or(1)
            .max(1)
    }
}
