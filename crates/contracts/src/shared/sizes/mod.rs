//! Модель выбора размеров для диалогов создания товаров
//!
//! - size_list.rs: разбор и хранение списка размеров
//! - selection.rs: состояние выбора (отметки или количество) и политика автовыбора
//! - preset.rs: пресеты размеров и каталог пресетов
//! - model.rs: `SizeSelectionModel`, объединяющая все вместе

mod model;
mod preset;
mod selection;
mod size_list;

pub use model::SizeSelectionModel;
pub use preset::{Preset, PresetCatalog};
pub use selection::{parse_quantity, SelectionMode, SelectionPolicy, SelectionState};
pub use size_list::SizeList;
