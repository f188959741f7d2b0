use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::{Error, Result};
use crate::locale::Locale;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub default: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default: "fr".to_string(),
        }
    }
}

impl LocaleConfig {
    pub fn to_locale(&self) -> Locale {
        Locale::resolve(Some(&self.default), Locale::default())
    }
}

/// Analysis spans in calendar days. The alert and insight rules have fixed
/// week lengths of their own; these only bound what the facade feeds them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub quality_days: i64,
    pub trend_days: i64,
    pub digest_symptom_days: i64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            quality_days: 30,
            trend_days: 30,
            digest_symptom_days: 7,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub locale: LocaleConfig,
    pub windows: WindowConfig,
    pub server: ServerConfig,
}

impl AnalyticsConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>)> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(path).map_err(|source| Error::Read {
                    path: path.clone(),
                    source,
                })?;
                toml::from_str(&contents)?
            }
            _ => AnalyticsConfig::default(),
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let payload = toml::to_string_pretty(self)?;
        std::fs::write(path, payload).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(locale) = env::var("ANALYTICS_LOCALE") {
            if !locale.trim().is_empty() {
                self.locale.default = locale;
            }
        }
        if let Some(value) = parse_env::<i64>("ANALYTICS_QUALITY_DAYS") {
            self.windows.quality_days = value;
        }
        if let Some(value) = parse_env::<i64>("ANALYTICS_TREND_DAYS") {
            self.windows.trend_days = value;
        }
        if let Some(value) = parse_env::<i64>("ANALYTICS_DIGEST_SYMPTOM_DAYS") {
            self.windows.digest_symptom_days = value;
        }
        if let Ok(host) = env::var("ANALYTICS_HOST") {
            if !host.trim().is_empty() {
                self.server.host = host;
            }
        }
        if let Some(value) = parse_env::<u16>("ANALYTICS_PORT") {
            self.server.port = value;
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = raw.as_str(), "ignoring unparseable override");
            None
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("ANALYTICS_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/analytics.toml")))
}
