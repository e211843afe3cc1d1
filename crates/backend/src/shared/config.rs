use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub import: ImportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

/// Tuning for the workbook import pipeline (u101).
#[derive(Debug, Deserialize, Clone)]
pub struct ImportConfig {
    /// Records per upsert call.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Pause between batches, to avoid hammering the store. Pacing only,
    /// not a correctness requirement.
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,
    /// Server-side workbooks used by the import-default endpoints.
    #[serde(default = "default_rocks_workbook")]
    pub rocks_workbook: String,
    #[serde(default = "default_minerals_workbook")]
    pub minerals_workbook: String,
}

fn default_batch_size() -> usize {
    50
}

fn default_batch_delay_ms() -> u64 {
    200
}

fn default_rocks_workbook() -> String {
    "data/rocks.xlsx".to_string()
}

fn default_minerals_workbook() -> String {
    "data/minerals.xlsx".to_string()
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            batch_delay_ms: default_batch_delay_ms(),
            rocks_workbook: default_rocks_workbook(),
            minerals_workbook: default_minerals_workbook(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/catalog.db"

[import]
batch_size = 50
batch_delay_ms = 200
rocks_workbook = "data/rocks.xlsx"
minerals_workbook = "data/minerals.xlsx"
"#;

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
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

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Install the loaded configuration for the rest of the process.
pub fn init_config(config: Config) {
    let _ = CONFIG.set(config);
}

/// Process-wide configuration; panics if called before `init_config`.
pub fn get_config() -> &'static Config {
    CONFIG.get().expect("configuration not initialized")
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path_str = &config.database.path;
    let db_path = Path::new(db_path_str);

    // If absolute path, use as is
    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }

    // If relative path, resolve it relative to the executable directory
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(db_path);
            return Ok(resolved_path);
        }
    }

    // Fallback: use relative to current directory
    Ok(PathBuf::from(db_path_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.database.path, "target/db/catalog.db");
        assert_eq!(config.import.batch_size, 50);
        assert_eq!(config.import.batch_delay_ms, 200);
    }

    #[test]
    fn test_import_section_optional() {
        let config: Config = toml::from_str("[database]\npath = \"x.db\"\n").unwrap();
        assert_eq!(config.import.batch_size, 50);
        assert_eq!(config.import.rocks_workbook, "data/rocks.xlsx");
    }
}
