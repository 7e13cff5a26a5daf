use contracts::shared::quick_entry_settings::QuickEntrySettings;
use once_cell::sync::OnceCell;
use serde::Deserialize;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub quick_entry: QuickEntrySettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Параметры создания товаров
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Первые 3 цифры внутреннего EAN-13
    pub barcode_prefix: String,
    /// Сколько последовательных номеров пробовать при совпадении штрихкода
    pub max_barcode_tries: u32,
    /// Единицы измерения в порядке предпочтения
    pub stock_uom_candidates: Vec<String>,
    /// Единицы измерения, известные справочнику
    pub known_uoms: Vec<String>,
}

impl CatalogConfig {
    /// Первая из предпочтительных единиц, известная справочнику; иначе "Nos"
    pub fn stock_uom(&self) -> String {
        self.stock_uom_candidates
            .iter()
            .find(|uom| self.known_uoms.contains(uom))
            .cloned()
            .unwrap_or_else(|| "Nos".to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            catalog: CatalogConfig::default(),
            quick_entry: QuickEntrySettings::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            barcode_prefix: "200".to_string(),
            max_barcode_tries: 20,
            stock_uom_candidates: vec!["шт".to_string(), "Nos".to_string()],
            known_uoms: vec!["Nos".to_string(), "шт".to_string(), "Pair".to_string()],
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[catalog]
barcode_prefix = "200"
max_barcode_tries = 20
stock_uom_candidates = ["шт", "Nos"]
known_uoms = ["Nos", "шт", "Pair"]

[quick_entry]
preview_limit = 5
auto_activate_sizes = true
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Загрузить конфигурацию один раз при старте
pub fn initialize() -> anyhow::Result<&'static Config> {
    let config = load_config()?;
    Ok(CONFIG.get_or_init(|| config))
}

/// Текущая конфигурация; до `initialize` возвращает значения по умолчанию
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_stock_uom_prefers_known_candidate() {
        let mut catalog = CatalogConfig::default();
        assert_eq!(catalog.stock_uom(), "шт");

        catalog.known_uoms = vec!["Nos".to_string()];
        assert_eq!(catalog.stock_uom(), "Nos");

        catalog.known_uoms.clear();
        assert_eq!(catalog.stock_uom(), "Nos");
    }

    #[test]
    fn test_quick_entry_section_is_optional() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [catalog]
            barcode_prefix = "290"
            max_barcode_tries = 5
            stock_uom_candidates = ["Nos"]
            known_uoms = ["Nos"]
            "#,
        )
        .unwrap();
        assert_eq!(config.quick_entry, QuickEntrySettings::default());
        assert_eq!(config.catalog.barcode_prefix, "290");
    }
}
