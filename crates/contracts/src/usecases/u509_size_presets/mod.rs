pub mod request;
pub mod response;

pub use request::PresetCatalogRequest;
pub use response::{PresetCatalogResponse, PresetEntry};

use crate::usecases::common::UseCaseMetadata;

pub struct SizePresets;

impl UseCaseMetadata for SizePresets {
    fn usecase_index() -> &'static str {
        "u509"
    }

    fn usecase_name() -> &'static str {
        "size_presets"
    }

    fn display_name() -> &'static str {
        "Пресеты размеров"
    }

    fn description() -> &'static str {
        "Пресеты размеров для быстрого ввода: общие и по бренду, с пресетом по умолчанию"
    }
}
