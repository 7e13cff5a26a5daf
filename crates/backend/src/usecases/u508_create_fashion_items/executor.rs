use std::sync::Arc;

use crate::domain::a026_fashion_item::repository::FashionItemStore;
use crate::domain::a026_fashion_item::service as item_service;
use crate::domain::a027_item_attribute::repository::AttributeRegistry;
use crate::shared::config::CatalogConfig;
use contracts::domain::a026_fashion_item::FashionItem;
use contracts::domain::a027_item_attribute::{COLOR_ATTRIBUTE, SIZE_ATTRIBUTE};
use contracts::domain::common::Origin;
use contracts::shared::naming::{generated_name, variant_item_code};
use contracts::usecases::common::{UseCaseError, UseCaseResult};
use contracts::usecases::u508_create_fashion_items::{CreateItemsRequest, CreateItemsResponse};

/// Executor для UseCase создания товаров по размерам
#[derive(Clone)]
pub struct CreateItemsExecutor {
    store: Arc<dyn FashionItemStore>,
    attributes: Arc<AttributeRegistry>,
    catalog: CatalogConfig,
}

impl CreateItemsExecutor {
    pub fn new(
        store: Arc<dyn FashionItemStore>,
        attributes: Arc<AttributeRegistry>,
        catalog: CatalogConfig,
    ) -> Self {
        Self {
            store,
            attributes,
            catalog,
        }
    }

    /// Создать товар для каждого размера запроса.
    ///
    /// Уже существующий код возвращается как есть. Ошибка одного товара
    /// попадает в `errors` и не прерывает остальные (без отката).
    pub async fn execute(&self, request: CreateItemsRequest) -> UseCaseResult<CreateItemsResponse> {
        let sizes = request.size_list();
        if sizes.is_empty() {
            return Err(UseCaseError::validation("At least one size is required"));
        }

        let template = request.template();
        if template.article.trim().is_empty()
            || template.category.trim().is_empty()
            || template.color.trim().is_empty()
        {
            return Err(UseCaseError::validation(
                "Item Code, Item Group and Color are required",
            ));
        }

        tracing::info!(
            "Creating {} item(s) for {} / {}",
            sizes.len(),
            template.article,
            template.color
        );

        self.attributes
            .ensure_values(COLOR_ATTRIBUTE, [template.color.trim()])
            .await;
        self.attributes
            .ensure_values(SIZE_ATTRIBUTE, sizes.iter())
            .await;

        let stock_uom = self.catalog.stock_uom();
        let mut response = CreateItemsResponse::default();

        for size in sizes.iter() {
            let item_code = variant_item_code(&template.article, &template.color, size);

            match self.store.find_by_code(&item_code).await {
                Ok(Some(existing)) => {
                    tracing::debug!("Item {} already exists, returning as is", item_code);
                    response.items.push(existing.to_created_item());
                    continue;
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::error!("Failed to look up {}: {}", item_code, e);
                    response.errors.push(format!("{}: {}", item_code, e));
                    continue;
                }
            }

            let mut item = FashionItem::new_for_insert(
                item_code.clone(),
                generated_name(&template.with_size(size)),
                template.category.trim().to_string(),
                Some(template.brand.trim().to_string()),
                stock_uom.clone(),
                Origin::QuickEntry,
            );
            item.set_attribute(COLOR_ATTRIBUTE, template.color.trim());
            item.set_attribute(SIZE_ATTRIBUTE, size);
            item.size = size.to_string();
            item.opening_qty = request.quantity_for(size);

            match item_service::save_new(self.store.as_ref(), &self.catalog, item).await {
                Ok(saved) => response.items.push(saved.to_created_item()),
                Err(e) => {
                    tracing::warn!("Failed to create {}: {}", item_code, e);
                    response.errors.push(format!("{}: {}", item_code, e));
                }
            }
        }

        response.count = response.items.len();
        tracing::info!(
            "Created {} item(s), {} error(s)",
            response.count,
            response.errors.len()
        );
        Ok(response)
    }
}
