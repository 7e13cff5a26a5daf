use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::SizeList;

/// Режим диалога: "пилюли" (вкл/выкл) или таблица с количеством
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Toggle,
    Quantity,
}

/// Политика автоматического выбора размеров.
///
/// Если после замены списка ни один размер не активен, а список изменился
/// и не пуст, при `auto_activate_when_empty` активируются все размеры
/// (количество 1 или отметка).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPolicy {
    pub auto_activate_when_empty: bool,
}

impl SelectionPolicy {
    pub fn default_for(mode: SelectionMode) -> Self {
        Self {
            auto_activate_when_empty: matches!(mode, SelectionMode::Quantity),
        }
    }
}

/// Состояние выбора размеров
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    /// Множество отмеченных размеров
    Toggle(HashSet<String>),
    /// Количество по размеру; хранятся только положительные значения
    Quantity(HashMap<String, u32>),
}

impl SelectionState {
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Toggle => Self::Toggle(HashSet::new()),
            SelectionMode::Quantity => Self::Quantity(HashMap::new()),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Toggle(_) => SelectionMode::Toggle,
            Self::Quantity(_) => SelectionMode::Quantity,
        }
    }

    pub fn is_active(&self, size: &str) -> bool {
        match self {
            Self::Toggle(set) => set.contains(size),
            Self::Quantity(map) => map.get(size).is_some_and(|qty| *qty > 0),
        }
    }

    /// Количество для размера; в режиме Toggle отмеченный размер = 1
    pub fn quantity(&self, size: &str) -> u32 {
        match self {
            Self::Toggle(set) => u32::from(set.contains(size)),
            Self::Quantity(map) => map.get(size).copied().unwrap_or(0),
        }
    }

    pub fn has_active(&self) -> bool {
        match self {
            Self::Toggle(set) => !set.is_empty(),
            Self::Quantity(map) => map.values().any(|qty| *qty > 0),
        }
    }

    pub(crate) fn set(&mut self, size: &str, qty: u32) {
        match self {
            Self::Toggle(set) => {
                if qty > 0 {
                    set.insert(size.to_string());
                } else {
                    set.remove(size);
                }
            }
            Self::Quantity(map) => {
                if qty > 0 {
                    map.insert(size.to_string(), qty);
                } else {
                    map.remove(size);
                }
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        match self {
            Self::Toggle(set) => set.clear(),
            Self::Quantity(map) => map.clear(),
        }
    }

    /// Оставить только размеры, присутствующие в списке
    pub(crate) fn retain_in(&mut self, sizes: &SizeList) {
        match self {
            Self::Toggle(set) => set.retain(|s| sizes.contains(s)),
            Self::Quantity(map) => map.retain(|s, _| sizes.contains(s)),
        }
    }
}

/// Разбор количества, введенного пользователем.
///
/// Пустое, нечисловое или отрицательное значение дает 0,
/// дробное округляется вниз.
pub fn parse_quantity(raw: &str) -> u32 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    match raw.parse::<f64>() {
        Ok(v) => clamp_quantity_f64(v),
        Err(_) => 0,
    }
}

pub(crate) fn clamp_quantity(qty: i64) -> u32 {
    if qty <= 0 {
        0
    } else {
        u32::try_from(qty).unwrap_or(u32::MAX)
    }
}

fn clamp_quantity_f64(v: f64) -> u32 {
    if !v.is_finite() || v <= 0.0 {
        return 0;
    }
    let floored = v.floor();
    if floored >= u32::MAX as f64 {
        u32::MAX
    } else {
        floored as u32
    }
}
