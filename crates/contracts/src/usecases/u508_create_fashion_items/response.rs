use serde::{Deserialize, Serialize};

/// Созданный (или уже существовавший) товар
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedItem {
    pub name: String,
    pub item_code: String,
    pub item_name: String,
    #[serde(default)]
    pub stock_uom: String,
    pub barcode: Option<String>,
    /// Размер, для которого создан товар
    #[serde(default)]
    pub size: String,
    /// Начальное количество из таблицы размеров
    #[serde(default)]
    pub qty: u32,
}

/// Ответ сервиса создания товаров
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateItemsResponse {
    #[serde(default)]
    pub items: Vec<CreatedItem>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Итог отправки диалога для показа пользователю
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Создан хотя бы один товар. `missing` — сколько размеров не создано.
    Created {
        items: Vec<CreatedItem>,
        errors: Vec<String>,
        missing: usize,
    },
    /// Ничего не создано; ошибки сервера показываются как есть
    NothingCreated { errors: Vec<String> },
}

impl SubmissionOutcome {
    /// Частичный успех: созданы не все размеры или есть ошибки
    pub fn is_partial(&self) -> bool {
        match self {
            Self::Created {
                errors, missing, ..
            } => !errors.is_empty() || *missing > 0,
            Self::NothingCreated { .. } => false,
        }
    }
}

impl CreateItemsResponse {
    /// Классифицировать ответ относительно числа запрошенных размеров
    pub fn into_outcome(self, requested: usize) -> SubmissionOutcome {
        if self.items.is_empty() {
            return SubmissionOutcome::NothingCreated {
                errors: self.errors,
            };
        }
        let missing = requested.saturating_sub(self.items.len());
        SubmissionOutcome::Created {
            items: self.items,
            errors: self.errors,
            missing,
        }
    }
}
