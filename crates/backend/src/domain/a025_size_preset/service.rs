use super::repository::SizePresetRepository;
use contracts::domain::a025_size_preset::{SizePreset, SizePresetDto};
use contracts::shared::sizes::SizeList;
use contracts::usecases::u509_size_presets::{PresetCatalogResponse, PresetEntry};
use uuid::Uuid;

/// Встроенные пресеты, которые отдаются, пока справочник пуст
const LEGACY_PRESETS: &[(&str, &str)] = &[
    ("Turkey (36-42)", "36, 38, 40, 42"),
    ("Standard (S-XL)", "S, M, L, XL"),
    ("Jeans (28-36)", "28, 29, 30, 31, 32, 33, 34, 36"),
];

fn legacy_catalog() -> PresetCatalogResponse {
    let presets: Vec<PresetEntry> = LEGACY_PRESETS
        .iter()
        .map(|(name, sizes)| PresetEntry {
            name: name.to_string(),
            sizes: SizeList::parse(sizes).join(),
            brand: String::new(),
            is_default_for_brand: false,
        })
        .collect();
    let default = presets.first().map(|p| p.name.clone());
    PresetCatalogResponse { presets, default }
}

/// Каталог пресетов для диалога быстрого ввода.
///
/// Без бренда: все активные пресеты, без пресета по умолчанию.
/// С брендом: пресеты бренда, затем общие; по умолчанию первый пресет
/// бренда с флагом, иначе просто первый пресет бренда.
pub async fn catalog_for_brand(
    repo: &SizePresetRepository,
    brand: &str,
) -> anyhow::Result<PresetCatalogResponse> {
    let brand = brand.trim();
    let stored = repo.list_all().await?;
    if stored.is_empty() {
        tracing::debug!("No size presets stored, using legacy presets");
        return Ok(legacy_catalog());
    }

    let enabled: Vec<&SizePreset> = stored.iter().filter(|p| !p.disabled).collect();

    if brand.is_empty() {
        return Ok(PresetCatalogResponse {
            presets: enabled.iter().map(|p| p.to_entry()).collect(),
            default: None,
        });
    }

    let brand_presets: Vec<&SizePreset> = enabled
        .iter()
        .copied()
        .filter(|p| p.belongs_to(brand))
        .collect();
    let default = brand_presets
        .iter()
        .find(|p| p.is_default_for_brand)
        .or_else(|| brand_presets.first())
        .map(|p| p.name().to_string());

    let presets = brand_presets
        .iter()
        .copied()
        .chain(enabled.iter().copied().filter(|p| p.is_global()))
        .map(SizePreset::to_entry)
        .collect();

    Ok(PresetCatalogResponse { presets, default })
}

/// Создание нового пресета
pub async fn create(repo: &SizePresetRepository, dto: SizePresetDto) -> anyhow::Result<Uuid> {
    let mut aggregate = SizePreset::new_for_insert(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    let id = repo.insert(&aggregate).await?;
    enforce_single_default(repo, &aggregate).await?;
    tracing::info!("Created size preset {} ({})", aggregate.name(), id);
    Ok(id)
}

/// Обновление существующего пресета
pub async fn update(repo: &SizePresetRepository, dto: SizePresetDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.update(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repo.update(&aggregate).await?;
    enforce_single_default(repo, &aggregate).await
}

/// Создание или обновление по наличию `id`
pub async fn upsert(repo: &SizePresetRepository, dto: SizePresetDto) -> anyhow::Result<Uuid> {
    match dto.id.as_deref().and_then(|s| Uuid::parse_str(s).ok()) {
        Some(id) => update(repo, dto).await.map(|_| id),
        None => create(repo, dto).await,
    }
}

/// У бренда не больше одного пресета по умолчанию
async fn enforce_single_default(
    repo: &SizePresetRepository,
    aggregate: &SizePreset,
) -> anyhow::Result<()> {
    if let (Some(brand), true) = (aggregate.brand.as_deref(), aggregate.is_default_for_brand) {
        let cleared = repo
            .clear_default_for_brand(brand, aggregate.base.id.value())
            .await?;
        if cleared > 0 {
            tracing::info!(
                "Cleared default flag on {} other preset(s) of brand {}",
                cleared,
                brand
            );
        }
    }
    Ok(())
}

/// Мягкое удаление пресета
pub async fn delete(repo: &SizePresetRepository, id: Uuid) -> anyhow::Result<bool> {
    repo.soft_delete(id).await
}

pub async fn get_by_id(repo: &SizePresetRepository, id: Uuid) -> anyhow::Result<Option<SizePreset>> {
    repo.get_by_id(id).await
}

pub async fn list_all(repo: &SizePresetRepository) -> anyhow::Result<Vec<SizePreset>> {
    repo.list_all().await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(name: &str, brand: Option<&str>, sizes: &str, is_default: bool) -> SizePresetDto {
        SizePresetDto {
            name: name.to_string(),
            brand: brand.map(str::to_string),
            sizes: sizes.to_string(),
            is_default_for_brand: is_default,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_empty_store_returns_legacy_presets() {
        let repo = SizePresetRepository::new();
        let catalog = catalog_for_brand(&repo, "Acme").await.unwrap();

        let names: Vec<_> = catalog.presets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Turkey (36-42)", "Standard (S-XL)", "Jeans (28-36)"]);
        assert_eq!(catalog.default.as_deref(), Some("Turkey (36-42)"));
        assert_eq!(catalog.presets[2].sizes, "28, 29, 30, 31, 32, 33, 34, 36");
    }

    #[tokio::test]
    async fn test_brand_catalog_lists_brand_then_global() {
        let repo = SizePresetRepository::new();
        create(&repo, dto("Acme adult", Some("Acme"), "S, M", false)).await.unwrap();
        create(&repo, dto("Acme kids", Some("Acme"), "98, 104", true)).await.unwrap();
        create(&repo, dto("Basic", None, "S, M, L", false)).await.unwrap();
        create(&repo, dto("Other", Some("Other"), "XS", true)).await.unwrap();

        let catalog = catalog_for_brand(&repo, " Acme ").await.unwrap();
        let names: Vec<_> = catalog.presets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Acme adult", "Acme kids", "Basic"]);
        assert_eq!(catalog.default.as_deref(), Some("Acme kids"));
    }

    #[tokio::test]
    async fn test_brand_without_flag_defaults_to_first_brand_preset() {
        let repo = SizePresetRepository::new();
        create(&repo, dto("Basic", None, "S, M, L", false)).await.unwrap();
        create(&repo, dto("Zeta main", Some("Zeta"), "40, 42", false)).await.unwrap();

        let catalog = catalog_for_brand(&repo, "Zeta").await.unwrap();
        assert_eq!(catalog.default.as_deref(), Some("Zeta main"));

        let catalog = catalog_for_brand(&repo, "Unknown").await.unwrap();
        assert_eq!(catalog.presets.len(), 1);
        assert_eq!(catalog.default, None);
    }

    #[tokio::test]
    async fn test_no_brand_lists_enabled_without_default() {
        let repo = SizePresetRepository::new();
        create(&repo, dto("Acme kids", Some("Acme"), "98", true)).await.unwrap();
        let mut disabled = dto("Old", None, "S", false);
        disabled.disabled = true;
        create(&repo, disabled).await.unwrap();

        let catalog = catalog_for_brand(&repo, "").await.unwrap();
        assert_eq!(catalog.presets.len(), 1);
        assert_eq!(catalog.default, None);
    }

    #[tokio::test]
    async fn test_single_default_per_brand() {
        let repo = SizePresetRepository::new();
        let first = create(&repo, dto("A1", Some("Acme"), "S", true)).await.unwrap();
        let second = create(&repo, dto("A2", Some("Acme"), "M", true)).await.unwrap();

        assert!(!get_by_id(&repo, first).await.unwrap().unwrap().is_default_for_brand);
        assert!(get_by_id(&repo, second).await.unwrap().unwrap().is_default_for_brand);

        let mut again = dto("A1", Some("Acme"), "S, M", true);
        again.id = Some(first.to_string());
        upsert(&repo, again).await.unwrap();

        assert!(get_by_id(&repo, first).await.unwrap().unwrap().is_default_for_brand);
        assert!(!get_by_id(&repo, second).await.unwrap().unwrap().is_default_for_brand);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_and_duplicate() {
        let repo = SizePresetRepository::new();
        let err = create(&repo, dto("Empty", None, " , ", false)).await.unwrap_err();
        assert!(err.to_string().contains("Please add at least one size"));

        create(&repo, dto("Basic", None, "S", false)).await.unwrap();
        assert!(create(&repo, dto("Basic", None, "M", false)).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_hides_preset() {
        let repo = SizePresetRepository::new();
        let id = create(&repo, dto("Basic", None, "S", false)).await.unwrap();
        assert!(delete(&repo, id).await.unwrap());
        assert!(!delete(&repo, id).await.unwrap());
        assert!(list_all(&repo).await.unwrap().is_empty());
    }
}
