use std::sync::Arc;

use async_trait::async_trait;
use contracts::domain::a026_fashion_item::{FashionItem, ItemBarcode};
use once_cell::sync::Lazy;
use tokio::sync::RwLock;

use super::barcode;
use crate::shared::config::CatalogConfig;

/// Хранилище товаров процесса
pub static REPOSITORY: Lazy<Arc<FashionItemRepository>> =
    Lazy::new(|| Arc::new(FashionItemRepository::new()));

/// Операции хранилища товаров, нужные при создании товаров по размерам
#[async_trait]
pub trait FashionItemStore: Send + Sync {
    async fn find_by_code(&self, item_code: &str) -> anyhow::Result<Option<FashionItem>>;

    /// Вставить новый товар.
    ///
    /// Товар без штрихкодов получает EAN-13; выбор номера и вставка
    /// выполняются под одной блокировкой записи.
    async fn insert_new(
        &self,
        item: FashionItem,
        catalog: &CatalogConfig,
    ) -> anyhow::Result<FashionItem>;
}

/// In-memory хранилище товаров
#[derive(Default)]
pub struct FashionItemRepository {
    items: RwLock<Vec<FashionItem>>,
}

impl FashionItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Вставка записи как есть (без штрихкода)
    pub async fn insert(&self, item: &FashionItem) -> anyhow::Result<()> {
        let mut items = self.items.write().await;
        if items.iter().any(|i| i.base.code == item.base.code) {
            anyhow::bail!("Duplicate item code {}", item.base.code);
        }
        items.push(item.clone());
        Ok(())
    }

    pub async fn count(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn list_all(&self) -> anyhow::Result<Vec<FashionItem>> {
        let mut items: Vec<FashionItem> = self
            .items
            .read()
            .await
            .iter()
            .filter(|i| !i.base.metadata.is_deleted)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.base.code.cmp(&b.base.code));
        Ok(items)
    }

    /// Варианты шаблона в порядке создания
    pub async fn list_variants(&self, template_code: &str) -> anyhow::Result<Vec<FashionItem>> {
        Ok(self
            .items
            .read()
            .await
            .iter()
            .filter(|i| i.variant_of.as_deref() == Some(template_code))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl FashionItemStore for FashionItemRepository {
    async fn find_by_code(&self, item_code: &str) -> anyhow::Result<Option<FashionItem>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .find(|i| i.base.code == item_code && !i.base.metadata.is_deleted)
            .cloned())
    }

    async fn insert_new(
        &self,
        mut item: FashionItem,
        catalog: &CatalogConfig,
    ) -> anyhow::Result<FashionItem> {
        let mut items = self.items.write().await;
        if items.iter().any(|i| i.base.code == item.base.code) {
            anyhow::bail!("Duplicate item code {}", item.base.code);
        }

        if item.barcodes.is_empty() {
            let code = barcode::next_unique(items.len(), catalog, |candidate| {
                items
                    .iter()
                    .any(|i| i.barcodes.iter().any(|b| b.barcode == candidate))
            })?;
            tracing::debug!("Assigned barcode {} to {}", code, item.item_code());
            item.barcodes.push(ItemBarcode::ean(code));
        }

        items.push(item.clone());
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::Origin;

    fn item(code: &str) -> FashionItem {
        FashionItem::new_for_insert(
            code.to_string(),
            code.to_string(),
            "Dresses".to_string(),
            None,
            "Nos".to_string(),
            Origin::Manual,
        )
    }

    #[tokio::test]
    async fn test_insert_new_assigns_sequential_barcodes() {
        let repo = FashionItemRepository::new();
        let catalog = CatalogConfig::default();

        let a = repo.insert_new(item("A"), &catalog).await.unwrap();
        let b = repo.insert_new(item("B"), &catalog).await.unwrap();
        assert_eq!(a.first_barcode(), Some("2000000000015"));
        assert_eq!(b.first_barcode(), Some("2000000000022"));

        let err = repo.insert_new(item("A"), &catalog).await.unwrap_err();
        assert_eq!(err.to_string(), "Duplicate item code A");
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn test_insert_new_skips_barcode_of_existing_item() {
        let repo = FashionItemRepository::new();
        let catalog = CatalogConfig::default();
        let mut manual = item("MANUAL");
        manual
            .barcodes
            .push(ItemBarcode::ean(barcode::ean13_from_sequence("200", 2).unwrap()));
        repo.insert(&manual).await.unwrap();

        // номер 2 занят, следующий свободный 3
        let created = repo.insert_new(item("A"), &catalog).await.unwrap();
        assert_eq!(
            created.first_barcode(),
            barcode::ean13_from_sequence("200", 3).as_deref()
        );
    }

    #[tokio::test]
    async fn test_concurrent_inserts_get_distinct_barcodes() {
        let repo = Arc::new(FashionItemRepository::new());
        let catalog = CatalogConfig::default();

        let tasks: Vec<_> = ["A", "B", "C", "D"]
            .into_iter()
            .map(|code| {
                let repo = repo.clone();
                let catalog = catalog.clone();
                tokio::spawn(async move { repo.insert_new(item(code), &catalog).await })
            })
            .collect();

        let mut barcodes = Vec::new();
        for task in tasks {
            let saved = task.await.unwrap().unwrap();
            barcodes.push(saved.first_barcode().unwrap().to_string());
        }
        barcodes.sort();
        barcodes.dedup();
        assert_eq!(barcodes.len(), 4);
    }
}
