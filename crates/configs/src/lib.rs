use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub data_dir: String,
    #[serde(default = "default_categories_file")]
    pub categories_file: String,
    #[serde(default = "default_reservations_file")]
    pub reservations_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".into(),
            categories_file: default_categories_file(),
            reservations_file: default_reservations_file(),
        }
    }
}

fn default_categories_file() -> String { "reserve_categories.json".into() }
fn default_reservations_file() -> String { "reserve_reservations.json".into() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.storage.normalize_from_env();
        self.storage.validate()?;
        Ok(())
    }
}

impl StorageConfig {
    pub fn normalize_from_env(&mut self) {
        // Fall back to the environment when TOML leaves the directory unset.
        if self.data_dir.trim().is_empty() {
            if let Ok(dir) = std::env::var("RESERVE_DATA_DIR") {
                self.data_dir = dir;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_dir.trim().is_empty() {
            return Err(anyhow!(
                "storage.data_dir is empty; set it in config.toml or the RESERVE_DATA_DIR environment variable"
            ));
        }
        if self.categories_file.trim().is_empty() || self.reservations_file.trim().is_empty() {
            return Err(anyhow!("storage file names must be non-empty"));
        }
        if self.categories_file == self.reservations_file {
            return Err(anyhow!("storage.categories_file and storage.reservations_file must differ"));
        }
        Ok(())
    }

    pub fn categories_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.categories_file)
    }

    pub fn reservations_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(&self.reservations_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_config_defaults_and_validation() {
        let mut cfg = AppConfig::default();
        cfg.normalize_and_validate().expect("defaults are valid");
        assert!(cfg.storage.categories_path().ends_with("reserve_categories.json"));

        cfg.storage.reservations_file = cfg.storage.categories_file.clone();
        assert!(cfg.storage.validate().is_err());
    }

    #[test]
    fn parses_toml_overrides() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [storage]
            data_dir = "/tmp/reserve"
            categories_file = "cats.json"
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.storage.data_dir, "/tmp/reserve");
        assert_eq!(cfg.storage.categories_file, "cats.json");
        assert_eq!(cfg.storage.reservations_file, "reserve_reservations.json");
    }
}
