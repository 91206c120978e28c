//! Application configuration: data directory, currency label, and the
//! static credential table. Loaded from a JSON file, defaults when absent.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::AtelierError;

const APP_DIR: &str = "atelier";
const DATA_DIR: &str = "data";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

static DEFAULT_USERS: Lazy<BTreeMap<String, String>> = Lazy::new(|| {
    let mut users = BTreeMap::new();
    users.insert("admin".to_string(), "1234".to_string());
    users.insert("abdessamad".to_string(), "2025".to_string());
    users
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Suffix appended to formatted amounts.
    pub currency: String,
    /// Override for where the entity tables live.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Static credential table, username → password.
    #[serde(default = "default_users")]
    pub users: BTreeMap<String, String>,
}

fn default_users() -> BTreeMap<String, String> {
    DEFAULT_USERS.clone()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "MAD".into(),
            data_dir: None,
            users: default_users(),
        }
    }
}

/// Loads and saves the config file under the application base directory.
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, AtelierError> {
        Self::from_base(resolve_base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, AtelierError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, AtelierError> {
        ensure_dir(&base)?;
        let path = base.join(CONFIG_FILE);
        Ok(Self { base, path })
    }

    pub fn load(&self) -> Result<Config, AtelierError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), AtelierError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        {
            let mut file = File::create(&tmp)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Where the entity tables live: the configured override, or `data/`
    /// under the application base directory.
    pub fn data_dir(&self, config: &Config) -> PathBuf {
        config
            .data_dir
            .clone()
            .unwrap_or_else(|| self.base.join(DATA_DIR))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }
}

fn resolve_base_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR}")))
}

fn ensure_dir(path: &Path) -> Result<(), AtelierError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => String::from(TMP_SUFFIX),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.currency, "MAD");
        assert_eq!(config.users.get("admin").map(String::as_str), Some("1234"));
        assert_eq!(
            config.users.get("abdessamad").map(String::as_str),
            Some("2025")
        );
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();

        let mut config = Config::default();
        config.currency = "EUR".into();
        config.users.insert("clerk".into(), "secret".into());
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.currency, "EUR");
        assert_eq!(loaded.users.get("clerk").map(String::as_str), Some("secret"));
    }

    #[test]
    fn data_dir_defaults_under_the_base() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(manager.data_dir(&config), temp.path().join("data"));

        let mut config = config;
        config.data_dir = Some(PathBuf::from("/tmp/elsewhere"));
        assert_eq!(manager.data_dir(&config), PathBuf::from("/tmp/elsewhere"));
    }
}
