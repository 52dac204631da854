//! Application configuration.
//!
//! Loaded from `<config dir>/seo-briefing/config.json`. A missing or broken
//! file falls back to defaults. Secrets never live in the file: the
//! extraction API key is read from the environment variable named by
//! `extraction.api_key_env`, the HTTP API key from `SEO_BRIEFING_API_KEY`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use briefing_core::{BriefingComposer, SuffixPluralRule, TemplateKey, TemplateSet};
use dirs::config_dir;
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "seo-briefing";
const CONFIG_FILE: &str = "config.json";

/// Environment variable holding the bearer token for the HTTP API.
pub const API_KEY_ENV: &str = "SEO_BRIEFING_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub extraction: ExtractionConfig,
    pub composer: ComposerConfig,
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
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.anthropic.com".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 2000,
            timeout_secs: 120,
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
        }
    }
}

impl ExtractionConfig {
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// Composer tuning for a product vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Keywords ending in this suffix are their own plural.
    pub reserved_suffix: String,
    /// Suffix appended to form the plural otherwise.
    pub plural_suffix: String,
    /// First-question substrings that make it the how-to heading.
    pub heading_markers: Vec<String>,
    /// Per-key template replacements.
    pub templates: HashMap<TemplateKey, String>,
    /// Replacement for the commercial benefit bullets.
    pub benefits: Option<Vec<String>>,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        let plural = SuffixPluralRule::default();
        Self {
            reserved_suffix: plural.reserved_suffix,
            plural_suffix: plural.suffix,
            heading_markers: briefing_core::composer::DEFAULT_HEADING_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            templates: HashMap::new(),
            benefits: None,
        }
    }
}

impl ComposerConfig {
    pub fn build_composer(&self) -> BriefingComposer {
        let mut templates = TemplateSet::dutch().with_overrides(&self.templates);
        if let Some(benefits) = &self.benefits {
            templates = templates.with_benefits(benefits.iter().cloned());
        }
        let plural = SuffixPluralRule::new(&self.reserved_suffix, &self.plural_suffix);
        BriefingComposer::new(templates, plural).with_heading_markers(self.heading_markers.clone())
    }
}

impl AppConfig {
    /// Load from the user's config directory, falling back to defaults.
    pub fn load() -> Self {
        match get_config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config = serde_json::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Write to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Write the default configuration to `path`.
    ///
    /// An existing file is kept unless `force` is set. Returns whether a file
    /// was written.
    pub fn init_at(path: &Path, force: bool) -> Result<bool> {
        if path.exists() && !force {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        Ok(true)
    }

    /// HTTP API key from the environment, if set.
    pub fn api_key() -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
