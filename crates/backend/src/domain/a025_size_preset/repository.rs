use std::sync::Arc;

use chrono::Utc;
use contracts::domain::a025_size_preset::SizePreset;
use once_cell::sync::Lazy;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Хранилище пресетов процесса
pub static REPOSITORY: Lazy<Arc<SizePresetRepository>> =
    Lazy::new(|| Arc::new(SizePresetRepository::new()));

/// In-memory хранилище пресетов размеров (записи не переживают перезапуск)
#[derive(Default)]
pub struct SizePresetRepository {
    items: RwLock<Vec<SizePreset>>,
}

impl SizePresetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Все неудаленные пресеты, отсортированные по имени
    pub async fn list_all(&self) -> anyhow::Result<Vec<SizePreset>> {
        let mut items: Vec<SizePreset> = self
            .items
            .read()
            .await
            .iter()
            .filter(|p| !p.base.metadata.is_deleted)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.base.code.to_lowercase().cmp(&b.base.code.to_lowercase()));
        Ok(items)
    }

    pub async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<SizePreset>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .find(|p| p.base.id.value() == id && !p.base.metadata.is_deleted)
            .cloned())
    }

    pub async fn get_by_name(&self, name: &str) -> anyhow::Result<Option<SizePreset>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .find(|p| p.base.code == name && !p.base.metadata.is_deleted)
            .cloned())
    }

    pub async fn insert(&self, aggregate: &SizePreset) -> anyhow::Result<Uuid> {
        let mut items = self.items.write().await;
        if items
            .iter()
            .any(|p| p.base.code == aggregate.base.code && !p.base.metadata.is_deleted)
        {
            anyhow::bail!("Size preset {} already exists", aggregate.base.code);
        }
        items.push(aggregate.clone());
        Ok(aggregate.base.id.value())
    }

    pub async fn update(&self, aggregate: &SizePreset) -> anyhow::Result<()> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|p| p.base.id == aggregate.base.id) {
            Some(existing) => {
                *existing = aggregate.clone();
                Ok(())
            }
            None => anyhow::bail!("Size preset {} not found", aggregate.to_string_id()),
        }
    }

    /// Снять флаг "по умолчанию" со всех пресетов бренда, кроме `keep`.
    /// Возвращает число измененных записей.
    pub async fn clear_default_for_brand(&self, brand: &str, keep: Uuid) -> anyhow::Result<usize> {
        let mut items = self.items.write().await;
        let mut cleared = 0;
        for preset in items.iter_mut().filter(|p| {
            p.belongs_to(brand) && p.is_default_for_brand && p.base.id.value() != keep
        }) {
            preset.is_default_for_brand = false;
            preset.base.touch();
            cleared += 1;
        }
        Ok(cleared)
    }

    pub async fn soft_delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut items = self.items.write().await;
        match items
            .iter_mut()
            .find(|p| p.base.id.value() == id && !p.base.metadata.is_deleted)
        {
            Some(preset) => {
                preset.base.metadata.is_deleted = true;
                preset.base.metadata.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
