//! Configuration file management for studyplan.
//!
//! Provides a TOML-based config file at `~/.config/studyplan/config.toml` and
//! a resolution chain: CLI flag > env var > config file > default.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use studyplan_core::completion::PerplexityConfig;
use studyplan_core::completion::types::DEFAULT_MAX_TOKENS;

pub const ENV_API_KEY: &str = "STUDYPLAN_API_KEY";
/// Provider-native variable, consulted after [`ENV_API_KEY`].
pub const ENV_PROVIDER_API_KEY: &str = "PERPLEXITY_API_KEY";
pub const ENV_API_URL: &str = "STUDYPLAN_API_URL";
pub const ENV_MODEL: &str = "STUDYPLAN_MODEL";

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub completion: CompletionSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionSection {
    pub api_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for CompletionSection {
    fn default() -> Self {
        Self {
            api_url: PerplexityConfig::DEFAULT_API_URL.to_string(),
            model: PerplexityConfig::DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: PerplexityConfig::DEFAULT_TIMEOUT.as_secs(),
            api_key: None,
        }
    }
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the studyplan config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/studyplan` or
/// `~/.config/studyplan`, on every platform.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("studyplan");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("studyplan")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
/// The file may hold an API key, so it is made owner-only on Unix.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(&path, perms)
            .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    }

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct StudyplanConfig {
    pub perplexity: PerplexityConfig,
    pub max_tokens: u32,
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl StudyplanConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// - API key: `cli_api_key` > `STUDYPLAN_API_KEY` > `PERPLEXITY_API_KEY` > `completion.api_key` > unset
    /// - API URL: `STUDYPLAN_API_URL` > `completion.api_url` > default
    /// - Model: `STUDYPLAN_MODEL` > `completion.model` > default
    /// - Max tokens and timeout: `completion.*` > default
    ///
    /// A missing API key is not an error here; the provider reports it when
    /// first called. A config file that exists but cannot be read or parsed
    /// is an error.
    pub fn resolve(cli_api_key: Option<&str>) -> Result<Self> {
        let file = if config_path().exists() {
            load_config()?.completion
        } else {
            CompletionSection::default()
        };

        let api_key = cli_api_key
            .map(str::to_string)
            .or_else(|| non_empty_env(ENV_API_KEY))
            .or_else(|| non_empty_env(ENV_PROVIDER_API_KEY))
            .or(file.api_key);

        let api_url = non_empty_env(ENV_API_URL).unwrap_or(file.api_url);
        let model = non_empty_env(ENV_MODEL).unwrap_or(file.model);

        if file.max_tokens == 0 {
            bail!("completion.max_tokens must be greater than zero");
        }
        if file.timeout_secs == 0 {
            bail!("completion.timeout_secs must be greater than zero");
        }

        Ok(Self {
            perplexity: PerplexityConfig {
                api_url,
                api_key,
                model,
                timeout: Duration::from_secs(file.timeout_secs),
            },
            max_tokens: file.max_tokens,
        })
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
