use serde::{Deserialize, Serialize};

use super::sizes::SelectionPolicy;

/// Настройки диалога быстрого ввода, отдаются бэкендом из config.toml
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct QuickEntrySettings {
    /// Сколько наименований показывать в предпросмотре
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,

    /// Автовыбор всех размеров, если ни один не выбран
    #[serde(default = "default_true")]
    pub auto_activate_sizes: bool,
}

fn default_preview_limit() -> usize {
    5
}

fn default_true() -> bool {
    true
}

impl Default for QuickEntrySettings {
    fn default() -> Self {
        Self {
            preview_limit: default_preview_limit(),
            auto_activate_sizes: true,
        }
    }
}

impl QuickEntrySettings {
    pub fn selection_policy(&self) -> SelectionPolicy {
        SelectionPolicy {
            auto_activate_when_empty: self.auto_activate_sizes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: QuickEntrySettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, QuickEntrySettings::default());

        let settings: QuickEntrySettings =
            serde_json::from_str(r#"{"auto_activate_sizes": false}"#).unwrap();
        assert_eq!(settings.preview_limit, 5);
        assert!(!settings.selection_policy().auto_activate_when_empty);
    }
}
