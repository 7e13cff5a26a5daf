use serde::{Deserialize, Serialize};

/// Откуда появилась запись
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Диалог быстрого ввода товара
    QuickEntry,
    /// Диалог "Create Size Grid" шаблона
    SizeGrid,
    /// Ручное создание / справочник
    Manual,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::QuickEntry => "quick_entry",
            Origin::SizeGrid => "size_grid",
            Origin::Manual => "manual",
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
