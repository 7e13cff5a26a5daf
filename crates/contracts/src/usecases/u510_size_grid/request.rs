use serde::{Deserialize, Serialize};

use crate::shared::sizes::SizeList;

/// Запрос на создание вариантов шаблона
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVariantsRequest {
    /// Код шаблона (товар с has_variants)
    pub template_item: String,
    pub color: String,
    /// Размеры через запятую
    pub sizes: String,
}

impl CreateVariantsRequest {
    pub fn size_list(&self) -> SizeList {
        SizeList::parse(&self.sizes)
    }
}
