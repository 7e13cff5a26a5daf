use std::collections::HashMap;
use std::sync::Arc;

use contracts::domain::a027_item_attribute::ItemAttribute;
use once_cell::sync::Lazy;
use tokio::sync::RwLock;

pub static REPOSITORY: Lazy<Arc<AttributeRegistry>> =
    Lazy::new(|| Arc::new(AttributeRegistry::new()));

/// Справочник атрибутов товаров (Color, Size) с допустимыми значениями
#[derive(Default)]
pub struct AttributeRegistry {
    attributes: RwLock<HashMap<String, ItemAttribute>>,
}

impl AttributeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить значения атрибута, которых еще нет. Возвращает число добавленных.
    pub async fn ensure_values<'a, I>(&self, attribute: &str, values: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut attributes = self.attributes.write().await;
        let entry = attributes
            .entry(attribute.to_string())
            .or_insert_with(|| ItemAttribute::new(attribute));

        let added = values
            .into_iter()
            .filter(|value| entry.ensure_value(value))
            .count();
        if added > 0 {
            tracing::info!("Added {} value(s) to attribute {}", added, attribute);
        }
        added
    }

    pub async fn get(&self, attribute: &str) -> Option<ItemAttribute> {
        self.attributes.read().await.get(attribute).cloned()
    }

    pub async fn list_all(&self) -> Vec<ItemAttribute> {
        let mut items: Vec<ItemAttribute> =
            self.attributes.read().await.values().cloned().collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }
}
