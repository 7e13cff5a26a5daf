use std::sync::Arc;

use crate::domain::a026_fashion_item::repository::FashionItemStore;
use crate::domain::a026_fashion_item::service as item_service;
use crate::domain::a027_item_attribute::repository::AttributeRegistry;
use crate::shared::config::CatalogConfig;
use contracts::domain::a026_fashion_item::FashionItem;
use contracts::domain::a027_item_attribute::{COLOR_ATTRIBUTE, SIZE_ATTRIBUTE};
use contracts::domain::common::Origin;
use contracts::shared::naming::variant_item_code;
use contracts::usecases::common::{UseCaseError, UseCaseResult};
use contracts::usecases::u510_size_grid::{CreateVariantsRequest, CreateVariantsResponse};

/// Executor для создания вариантов шаблона по сетке размеров
#[derive(Clone)]
pub struct SizeGridExecutor {
    store: Arc<dyn FashionItemStore>,
    attributes: Arc<AttributeRegistry>,
    catalog: CatalogConfig,
}

impl SizeGridExecutor {
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

    pub async fn execute(
        &self,
        request: CreateVariantsRequest,
    ) -> UseCaseResult<CreateVariantsResponse> {
        let color = request.color.trim();
        if color.is_empty() {
            return Err(UseCaseError::validation("Color is required"));
        }
        let sizes = request.size_list();
        if sizes.is_empty() {
            return Err(UseCaseError::validation("At least one size is required"));
        }

        let template = self
            .store
            .find_by_code(request.template_item.trim())
            .await?
            .ok_or_else(|| {
                UseCaseError::not_found(format!("Item {} not found", request.template_item))
            })?;
        if !template.has_variants {
            return Err(UseCaseError::validation(format!(
                "Item {} is not a template: Has Variants is off",
                template.item_code()
            )));
        }

        self.attributes.ensure_values(COLOR_ATTRIBUTE, [color]).await;
        self.attributes
            .ensure_values(SIZE_ATTRIBUTE, sizes.iter())
            .await;

        let mut response = CreateVariantsResponse::default();
        for size in sizes.iter() {
            let variant = variant_of(&template, color, size);
            let item_code = variant.item_code().to_string();

            match self.store.find_by_code(&item_code).await {
                Ok(Some(existing)) => {
                    response.items.push(existing.to_created_item());
                    continue;
                }
                Ok(None) => {}
                Err(e) => {
                    response.errors.push(format!("{}: {}", item_code, e));
                    continue;
                }
            }

            match item_service::save_new(self.store.as_ref(), &self.catalog, variant).await {
                Ok(saved) => response.items.push(saved.to_created_item()),
                Err(e) => {
                    tracing::warn!("Failed to create variant {}: {}", item_code, e);
                    response.errors.push(format!("{}: {}", item_code, e));
                }
            }
        }

        response.message = format!("Created {} variants", response.items.len());
        tracing::info!("{} of {}", response.message, template.item_code());
        Ok(response)
    }
}

/// Вариант шаблона для цвета и размера.
///
/// Имя по бренду и MPN шаблона; если их нет, код строится от кода шаблона.
fn variant_of(template: &FashionItem, color: &str, size: &str) -> FashionItem {
    let mut variant = FashionItem::new_for_insert(
        String::new(),
        String::new(),
        template.item_group.clone(),
        template.brand.clone(),
        template.stock_uom.clone(),
        Origin::SizeGrid,
    );
    variant.manufacturer_part_no = template.manufacturer_part_no.clone();
    variant.variant_of = Some(template.item_code().to_string());
    variant.set_attribute(COLOR_ATTRIBUTE, color);
    variant.set_attribute(SIZE_ATTRIBUTE, size);
    variant.size = size.to_string();

    if !variant.apply_autoname() {
        variant.base.code = variant_item_code(template.item_code(), color, size);
        variant.base.description = format!("{}, {}, {}", template.item_name(), color, size);
    }
    variant
}
