//! Application configuration for growthloop.
//!
//! User config lives at `~/.growthloop/growthloop.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{GrowthLoopError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "growthloop.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".growthloop";

// ---------------------------------------------------------------------------
// Config structs (matching growthloop.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Campaign defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Publishing settings.
    #[serde(default)]
    pub publishing: PublishingConfig,

    /// LLM settings (narration only; no key is read).
    #[serde(default)]
    pub llm: LlmConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default head term used for keyword discovery.
    #[serde(default = "default_head_term")]
    pub head_term: String,

    /// Default campaign hashtag used for UGC collection.
    #[serde(default = "default_campaign_hashtag")]
    pub campaign_hashtag: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            head_term: default_head_term(),
            campaign_hashtag: default_campaign_hashtag(),
        }
    }
}

fn default_head_term() -> String {
    "AI assistant".into()
}
fn default_campaign_hashtag() -> String {
    "#MyWebAppCreation".into()
}

/// `[publishing]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishingConfig {
    /// Base URL under which published article slugs live.
    #[serde(default = "default_article_base_url")]
    pub article_base_url: String,
}

impl Default for PublishingConfig {
    fn default() -> Self {
        Self {
            article_base_url: default_article_base_url(),
        }
    }
}

fn default_article_base_url() -> String {
    "https://placeholder.com/article/".into()
}

/// `[llm]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model name echoed in generation narration.
    #[serde(default = "default_model")]
    pub model: String,

    /// Name of the env var that would hold the API key (never the key itself).
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_model() -> String {
    "gemini-pro".into()
}
fn default_api_key_env() -> String {
    "GEMINI_API_KEY".into()
}

impl AppConfig {
    /// Parse and normalize the configured article base URL.
    ///
    /// The path is given a trailing slash so slugs join as child segments.
    pub fn article_base_url(&self) -> Result<Url> {
        let raw = &self.publishing.article_base_url;
        let mut url = Url::parse(raw).map_err(|e| {
            GrowthLoopError::config(format!("invalid article_base_url '{raw}': {e}"))
        })?;

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.growthloop/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| GrowthLoopError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.growthloop/growthloop.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| GrowthLoopError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        GrowthLoopError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| GrowthLoopError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| GrowthLoopError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| GrowthLoopError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("head_term"));
        assert!(toml_str.contains("#MyWebAppCreation"));
        assert!(toml_str.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.defaults.head_term, "AI assistant");
        assert_eq!(parsed.llm.model, "gemini-pro");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[defaults]
head_term = "meal planner"

[publishing]
article_base_url = "https://blog.example.com/posts"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.defaults.head_term, "meal planner");
        assert_eq!(config.defaults.campaign_hashtag, "#MyWebAppCreation");
        assert_eq!(
            config.publishing.article_base_url,
            "https://blog.example.com/posts"
        );
    }

    #[test]
    fn article_base_url_normalizes_trailing_slash() {
        let mut config = AppConfig::default();
        config.publishing.article_base_url = "https://blog.example.com/posts".into();
        let url = config.article_base_url().expect("parse base url");
        assert_eq!(url.as_str(), "https://blog.example.com/posts/");

        config.publishing.article_base_url = "https://placeholder.com/article/".into();
        let url = config.article_base_url().expect("parse base url");
        assert_eq!(url.as_str(), "https://placeholder.com/article/");
    }

    #[test]
    fn article_base_url_rejects_garbage() {
        let mut config = AppConfig::default();
        config.publishing.article_base_url = "not a url".into();
        let result = config.article_base_url();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("article_base_url"));
    }
}
