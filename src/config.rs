//! Configuration for tatami.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (TATAMI_API_BASE, TATAMI_TIMEOUT_SECONDS, TATAMI_SNAPSHOT)
//! 2. Config file (.tatami/config.yaml)
//! 3. Defaults (http://localhost:3000, 10s timeout)
//!
//! Config file discovery:
//! - Searches current directory and parents for .tatami/config.yaml
//! - Falls back to ~/.tatami/config.yaml
//! - Paths in config file are relative to the config file's project root

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::sections::SiteDefaults;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const DEFAULT_API_BASE: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub api: ApiConfig,
    /// JSON snapshot to read content from instead of the API
    #[serde(default)]
    pub snapshot: Option<String>,
    #[serde(default)]
    pub defaults: SiteDefaults,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Site API base URL
    pub api_base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// Absolute path to a content snapshot, if configured
    pub snapshot: Option<PathBuf>,
    /// Section defaults and placeholder banks
    pub defaults: SiteDefaults,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            snapshot: None,
            defaults: SiteDefaults::default(),
            config_file: None,
        }
    }
}

impl ResolvedConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Find config file by searching current directory and parents, then home
fn find_config_file() -> Option<PathBuf> {
    if let Ok(mut current) = std::env::current_dir() {
        loop {
            let config_path = current.join(".tatami").join("config.yaml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }
    }

    let home_config = dirs::home_dir()?.join(".tatami").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Apply a parsed config file over the defaults
fn apply_file(mut resolved: ResolvedConfig, config: ConfigFile, config_path: &Path) -> ResolvedConfig {
    // Project root is the parent of .tatami/
    let base_dir = config_path
        .parent()
        .and_then(|p| p.parent())
        .unwrap_or(Path::new("."));

    if let Some(base_url) = config.api.base_url {
        resolved.api_base_url = base_url;
    }
    if let Some(timeout) = config.api.timeout_seconds {
        resolved.timeout_seconds = timeout;
    }
    if let Some(ref snapshot) = config.snapshot {
        resolved.snapshot = Some(resolve_path(base_dir, snapshot));
    }
    resolved.defaults = config.defaults;
    resolved.config_file = Some(config_path.to_path_buf());
    resolved
}

/// Apply environment overrides
fn apply_env(mut resolved: ResolvedConfig) -> Result<ResolvedConfig> {
    if let Ok(base_url) = std::env::var("TATAMI_API_BASE") {
        resolved.api_base_url = base_url;
    }
    if let Ok(timeout) = std::env::var("TATAMI_TIMEOUT_SECONDS") {
        resolved.timeout_seconds = timeout
            .parse()
            .with_context(|| format!("Invalid TATAMI_TIMEOUT_SECONDS: {}", timeout))?;
    }
    if let Ok(snapshot) = std::env::var("TATAMI_SNAPSHOT") {
        resolved.snapshot = Some(PathBuf::from(snapshot));
    }
    Ok(resolved)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some(config_path) = find_config_file() {
        let config = load_config_file(&config_path)?;
        resolved = apply_file(resolved, config, &config_path);
    }

    apply_env(resolved)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
