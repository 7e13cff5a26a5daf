pub mod request;
pub mod response;

pub use request::CreateItemsRequest;
pub use response::{CreateItemsResponse, CreatedItem, SubmissionOutcome};

use crate::usecases::common::UseCaseMetadata;

pub struct CreateFashionItems;

impl UseCaseMetadata for CreateFashionItems {
    fn usecase_index() -> &'static str {
        "u508"
    }

    fn usecase_name() -> &'static str {
        "create_fashion_items"
    }

    fn display_name() -> &'static str {
        "Создание товаров по размерам"
    }

    fn description() -> &'static str {
        "Создание товара для каждого выбранного размера: наименование, код варианта и штрихкод EAN-13"
    }
}
