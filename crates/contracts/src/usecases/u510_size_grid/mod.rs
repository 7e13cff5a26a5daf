pub mod request;
pub mod response;

pub use request::CreateVariantsRequest;
pub use response::CreateVariantsResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct SizeGrid;

impl UseCaseMetadata for SizeGrid {
    fn usecase_index() -> &'static str {
        "u510"
    }

    fn usecase_name() -> &'static str {
        "size_grid"
    }

    fn display_name() -> &'static str {
        "Сетка размеров"
    }

    fn description() -> &'static str {
        "Создание вариантов шаблона товара для одного цвета и списка размеров"
    }
}
