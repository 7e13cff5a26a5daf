use super::repository::{FashionItemRepository, FashionItemStore};
use crate::domain::a027_item_attribute::repository::AttributeRegistry;
use crate::shared::config::CatalogConfig;
use crate::shared::error::ItemCreationError;
use contracts::domain::a026_fashion_item::{FashionItem, FashionItemDto, ItemBarcode};
use contracts::domain::a027_item_attribute::{COLOR_ATTRIBUTE, SIZE_ATTRIBUTE};
use contracts::domain::common::Origin;

/// Проверка и вставка одного товара.
///
/// Штрихкод товару без штрихкодов назначает хранилище при вставке.
pub async fn save_new(
    store: &dyn FashionItemStore,
    catalog: &CatalogConfig,
    mut item: FashionItem,
) -> Result<FashionItem, ItemCreationError> {
    item.validate().map_err(ItemCreationError::Validation)?;

    if store.find_by_code(item.item_code()).await?.is_some() {
        return Err(ItemCreationError::AlreadyExists(item.item_code().to_string()));
    }

    item.before_write();
    let saved = store.insert_new(item, catalog).await?;
    Ok(saved)
}

/// Ручное создание товара (шаблона или варианта)
pub async fn create(
    repo: &FashionItemRepository,
    attributes: &AttributeRegistry,
    catalog: &CatalogConfig,
    dto: FashionItemDto,
) -> Result<FashionItem, ItemCreationError> {
    let stock_uom = dto
        .stock_uom
        .clone()
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| catalog.stock_uom());

    let mut item = FashionItem::new_for_insert(
        dto.item_code.clone().unwrap_or_default().trim().to_string(),
        dto.item_name.clone().unwrap_or_default().trim().to_string(),
        dto.item_group.trim().to_string(),
        dto.brand.clone(),
        stock_uom,
        Origin::Manual,
    );
    item.manufacturer_part_no = dto.manufacturer_part_no.clone().filter(|m| !m.trim().is_empty());
    item.has_variants = dto.has_variants;
    item.variant_of = dto.variant_of.clone().filter(|v| !v.trim().is_empty());

    if let Some(color) = dto.color.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        attributes.ensure_values(COLOR_ATTRIBUTE, [color]).await;
        item.set_attribute(COLOR_ATTRIBUTE, color);
    }
    if let Some(size) = dto.size.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        attributes.ensure_values(SIZE_ATTRIBUTE, [size]).await;
        item.set_attribute(SIZE_ATTRIBUTE, size);
        item.size = size.to_string();
    }

    item.barcodes = dto
        .barcodes
        .iter()
        .map(|b| b.trim())
        .filter(|b| !b.is_empty())
        .map(|b| ItemBarcode::ean(b.to_string()))
        .collect();

    item.apply_autoname();
    if item.item_name().trim().is_empty() {
        item.base.description = item.item_code().to_string();
    }

    let saved = save_new(repo, catalog, item).await?;
    tracing::info!("Created item {} ({})", saved.item_code(), saved.item_name());
    Ok(saved)
}

pub async fn get_by_code(
    repo: &FashionItemRepository,
    item_code: &str,
) -> anyhow::Result<Option<FashionItem>> {
    repo.find_by_code(item_code).await
}

pub async fn list_all(repo: &FashionItemRepository) -> anyhow::Result<Vec<FashionItem>> {
    repo.list_all().await
}
