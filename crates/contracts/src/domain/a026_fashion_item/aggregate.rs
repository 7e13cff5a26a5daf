use crate::domain::a027_item_attribute::{COLOR_ATTRIBUTE, SIZE_ATTRIBUTE};
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, Origin};
use crate::shared::naming::{template_code_and_name, template_variant_code_and_name};
use crate::usecases::u508_create_fashion_items::CreatedItem;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Префикс кода, который получает еще не названный товар
const UNNAMED_PREFIX: &str = "New Item";

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FashionItemId(pub Uuid);

impl FashionItemId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for FashionItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(FashionItemId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Значение атрибута варианта (Color = Red, Size = M)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemVariantAttribute {
    pub attribute: String,
    pub attribute_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemBarcode {
    pub barcode: String,
    #[serde(rename = "barcodeType")]
    pub barcode_type: String,
}

impl ItemBarcode {
    pub fn ean(barcode: String) -> Self {
        Self {
            barcode,
            barcode_type: "EAN".to_string(),
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар. `base.code` — код товара (item_code), `base.description` — наименование.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FashionItem {
    #[serde(flatten)]
    pub base: BaseAggregate<FashionItemId>,

    #[serde(rename = "itemGroup")]
    pub item_group: String,

    pub brand: Option<String>,

    /// Артикул производителя (MPN)
    #[serde(rename = "manufacturerPartNo")]
    pub manufacturer_part_no: Option<String>,

    #[serde(rename = "stockUom")]
    pub stock_uom: String,

    #[serde(rename = "isStockItem", default)]
    pub is_stock_item: bool,

    /// Шаблон с вариантами
    #[serde(rename = "hasVariants", default)]
    pub has_variants: bool,

    /// Код шаблона, если это вариант
    #[serde(rename = "variantOf")]
    pub variant_of: Option<String>,

    #[serde(default)]
    pub attributes: Vec<ItemVariantAttribute>,

    #[serde(default)]
    pub barcodes: Vec<ItemBarcode>,

    /// Размер, для которого создан товар (пусто для шаблонов)
    #[serde(default)]
    pub size: String,

    /// Начальное количество при создании из таблицы размеров
    #[serde(rename = "openingQty", default)]
    pub opening_qty: u32,

    pub origin: Origin,
}

impl FashionItem {
    pub fn new_for_insert(
        item_code: String,
        item_name: String,
        item_group: String,
        brand: Option<String>,
        stock_uom: String,
        origin: Origin,
    ) -> Self {
        let base = BaseAggregate::new(FashionItemId::new_v4(), item_code, item_name);
        Self {
            base,
            item_group,
            brand: brand.filter(|b| !b.trim().is_empty()),
            manufacturer_part_no: None,
            stock_uom,
            is_stock_item: true,
            has_variants: false,
            variant_of: None,
            attributes: Vec::new(),
            barcodes: Vec::new(),
            size: String::new(),
            opening_qty: 0,
            origin,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn item_code(&self) -> &str {
        &self.base.code
    }

    pub fn item_name(&self) -> &str {
        &self.base.description
    }

    pub fn set_attribute(&mut self, attribute: &str, value: &str) {
        match self
            .attributes
            .iter_mut()
            .find(|a| a.attribute.eq_ignore_ascii_case(attribute))
        {
            Some(existing) => existing.attribute_value = value.to_string(),
            None => self.attributes.push(ItemVariantAttribute {
                attribute: attribute.to_string(),
                attribute_value: value.to_string(),
            }),
        }
    }

    /// Значение атрибута без учета регистра имени ("color" == "Color")
    pub fn attribute_value(&self, attribute: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.attribute.eq_ignore_ascii_case(attribute))
            .map(|a| a.attribute_value.as_str())
    }

    pub fn first_barcode(&self) -> Option<&str> {
        self.barcodes.first().map(|b| b.barcode.as_str())
    }

    pub fn is_unnamed(&self) -> bool {
        self.base.code.trim().is_empty() || self.base.code.starts_with(UNNAMED_PREFIX)
    }

    /// Автоматическое наименование по бренду и MPN.
    ///
    /// Применяется только к еще не названному товару с заполненными
    /// брендом и MPN. Шаблон: "BRAND-MPN", вариант: "BRAND-MPN-COLOR-SIZE"
    /// (если у варианта есть оба атрибута). Возвращает true, если имя изменено.
    pub fn apply_autoname(&mut self) -> bool {
        if !self.is_unnamed() {
            return false;
        }
        let (Some(brand), Some(mpn)) = (self.brand.clone(), self.manufacturer_part_no.clone())
        else {
            return false;
        };
        if brand.trim().is_empty() || mpn.trim().is_empty() {
            return false;
        }

        let named = if self.variant_of.is_none() {
            Some(template_code_and_name(&self.item_group, &brand, &mpn))
        } else {
            match (
                self.attribute_value(COLOR_ATTRIBUTE),
                self.attribute_value(SIZE_ATTRIBUTE),
            ) {
                (Some(color), Some(size)) if !color.trim().is_empty() && !size.trim().is_empty() => {
                    Some(template_variant_code_and_name(
                        &self.item_group,
                        &brand,
                        &mpn,
                        color,
                        size,
                    ))
                }
                _ => None,
            }
        };

        match named {
            Some((code, name)) => {
                self.base.code = code;
                self.base.description = name;
                true
            }
            None => false,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Item Code is required".into());
        }
        if self.base.description.trim().is_empty() {
            return Err("Item Name is required".into());
        }
        if self.item_group.trim().is_empty() {
            return Err("Item Group is required".into());
        }
        if self.stock_uom.trim().is_empty() {
            return Err("Stock UOM is required".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }

    pub fn to_created_item(&self) -> CreatedItem {
        CreatedItem {
            name: self.base.code.clone(),
            item_code: self.base.code.clone(),
            item_name: self.base.description.clone(),
            stock_uom: self.stock_uom.clone(),
            barcode: self.first_barcode().map(str::to_string),
            size: self.size.clone(),
            qty: self.opening_qty,
        }
    }
}

impl AggregateRoot for FashionItem {
    type Id = FashionItemId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a026"
    }

    fn collection_name() -> &'static str {
        "fashion_item"
    }

    fn element_name() -> &'static str {
        "Item"
    }

    fn list_name() -> &'static str {
        "Items"
    }

    fn origin() -> Origin {
        Origin::Manual
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Ручное создание товара (шаблона или варианта)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FashionItemDto {
    /// Пусто = назначить автоматически
    pub item_code: Option<String>,
    pub item_name: Option<String>,
    pub item_group: String,
    pub brand: Option<String>,
    pub manufacturer_part_no: Option<String>,
    pub stock_uom: Option<String>,
    #[serde(default)]
    pub has_variants: bool,
    pub variant_of: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    #[serde(default)]
    pub barcodes: Vec<String>,
}
