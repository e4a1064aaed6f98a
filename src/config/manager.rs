use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::backend::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use crate::paths;
use crate::translation::{BASE_LANGUAGE, validate_language};

/// Backend used when neither the CLI nor the config file names one.
pub const DEFAULT_BACKEND: &str = "local";

/// Default settings in the `[tutor]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TutorConfig {
    /// Default backend name.
    pub backend: Option<String>,
    /// Default display language code.
    pub language: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Persist translated dictionaries between runs.
    pub cache: Option<bool>,
}

/// One tutor backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend's HTTP API.
    pub endpoint: String,
    /// Bearer token stored directly in config (not recommended).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Environment variable holding the bearer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
}

impl BackendConfig {
    /// Gets the token, preferring the environment variable over the file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }
}

/// The complete configuration file, `~/.config/tutor/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub tutor: TutorConfig,
    /// Backends keyed by name.
    #[serde(default)]
    pub backends: BTreeMap<String, BackendConfig>,
}

impl ConfigFile {
    /// The configured backends plus the built-in `local` one when the file
    /// does not define it.
    pub fn all_backends(&self) -> BTreeMap<String, BackendConfig> {
        let mut backends = self.backends.clone();
        backends
            .entry(DEFAULT_BACKEND.to_string())
            .or_insert_with(|| BackendConfig {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                api_key: None,
                api_key_env: None,
            });
        backends
    }
}

/// CLI overrides; these win over the config file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub backend: Option<String>,
    /// Endpoint URL, bypassing the backend table.
    pub endpoint: Option<String>,
    pub language: Option<String>,
    pub timeout_secs: Option<u64>,
    pub no_cache: bool,
}

/// Settings after merging CLI options, the config file, and built-in defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub backend_name: String,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub language: String,
    pub timeout: Duration,
    pub cache: bool,
}

/// Resolves settings with priority CLI > config file > built-in defaults.
///
/// # Errors
///
/// Returns an error for an unknown backend, an unsupported language code,
/// a zero timeout, or a backend whose token is configured but unset.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let backend_name = options
        .backend
        .as_ref()
        .or(config_file.tutor.backend.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_BACKEND.to_string());

    let backends = config_file.all_backends();
    let backend = backends.get(&backend_name).ok_or_else(|| {
        anyhow!(
            "Backend '{backend_name}' not found\n\n\
             Available backends:\n  \
             - {}\n\n\
             Add backends to ~/.config/tutor/config.toml",
            backends.keys().map(String::as_str).collect::<Vec<_>>().join("\n  - ")
        )
    })?;

    let endpoint = options
        .endpoint
        .clone()
        .unwrap_or_else(|| backend.endpoint.clone());

    let language = options
        .language
        .as_ref()
        .or(config_file.tutor.language.as_ref())
        .cloned()
        .unwrap_or_else(|| BASE_LANGUAGE.to_string());
    validate_language(&language)?;

    let timeout = options
        .timeout_secs
        .or(config_file.tutor.timeout_secs)
        .map_or(DEFAULT_TIMEOUT, Duration::from_secs);
    if timeout.is_zero() {
        bail!("Invalid timeout: must be at least 1 second");
    }

    let api_key = backend.get_api_key();
    if backend.requires_api_key() && api_key.is_none() {
        let env_var = backend.api_key_env.as_deref().unwrap_or("TUTOR_API_KEY");
        bail!(
            "Backend '{backend_name}' requires an API key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/tutor/config.toml"
        );
    }

    Ok(ResolvedConfig {
        backend_name,
        endpoint,
        api_key,
        language,
        timeout,
        cache: !options.no_cache && config_file.tutor.cache.unwrap_or(true),
    })
}

/// Loads and saves the config file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Uses `$XDG_CONFIG_HOME/tutor/config.toml`, or
    /// `~/.config/tutor/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn at(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!("Invalid config file: {}", self.config_path.display())
        })
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
        crate::fs::atomic_write(&self.config_path, &contents)
    }

    /// Loads the file, or returns defaults when it does not exist.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
