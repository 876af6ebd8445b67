use crate::domain::models::{Orientation, RunMode};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const API_KEY_ENV: &str = "PEXELS_API_KEY";
pub const API_BASE_ENV: &str = "HTTP_RABBITS_API_BASE";
pub const DEFAULT_CONFIG_FILE: &str = "http-rabbits.toml";

/// Photo service credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Decided once at startup. `Placeholder` never touches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchMode {
    Placeholder,
    Live(ApiKey),
}

impl FetchMode {
    pub fn from_credential(raw: Option<String>) -> Self {
        match raw.map(|k| k.trim().to_string()) {
            Some(k) if !k.is_empty() => FetchMode::Live(ApiKey(k)),
            _ => FetchMode::Placeholder,
        }
    }

    pub fn from_env() -> Self {
        Self::from_credential(std::env::var(API_KEY_ENV).ok())
    }

    pub fn run_mode(&self) -> RunMode {
        match self {
            FetchMode::Placeholder => RunMode::Placeholder,
            FetchMode::Live(_) => RunMode::Live,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub images_dir: PathBuf,
    pub mapping_path: PathBuf,
    pub delay_ms: u64,
    pub per_page: u8,
    pub orientation: Orientation,
    pub api_base: String,
    pub timeout_ms: u64,
    pub placeholder_base: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from("public/images"),
            mapping_path: PathBuf::from("src/data/rabbit-images.json"),
            delay_ms: 1000,
            per_page: 5,
            orientation: Orientation::Landscape,
            api_base: "https://api.pexels.com/v1".to_string(),
            timeout_ms: 15_000,
            placeholder_base: "https://picsum.photos/seed".to_string(),
        }
    }
}

impl Settings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Reads `path` (must exist) or, when absent, `http-rabbits.toml` in the
/// working directory if present. Environment overrides are applied last.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match path {
        Some(p) => parse_settings_file(p)?,
        None => {
            let p = Path::new(DEFAULT_CONFIG_FILE);
            if p.exists() {
                parse_settings_file(p)?
            } else {
                Settings::default()
            }
        }
    };
    if let Ok(base) = std::env::var(API_BASE_ENV) {
        if !base.trim().is_empty() {
            settings.api_base = base.trim().to_string();
        }
    }
    Ok(settings)
}

fn parse_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read config {}: {}", path.display(), e))?;
    parse_settings(&raw).map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))
}

pub fn parse_settings(raw: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(raw)
}
