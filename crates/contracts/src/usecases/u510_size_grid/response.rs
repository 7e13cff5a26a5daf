use serde::{Deserialize, Serialize};

use crate::usecases::u508_create_fashion_items::CreatedItem;

/// Результат создания вариантов
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateVariantsResponse {
    /// Сообщение для пользователя: "Created N variants"
    pub message: String,
    #[serde(default)]
    pub items: Vec<CreatedItem>,
    #[serde(default)]
    pub errors: Vec<String>,
}
