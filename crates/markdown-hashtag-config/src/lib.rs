use markdown_hashtag_engine::{Attribute, HashtagOptions, PrefixResolver, Variant};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Hashtag settings, read from `~/.config/markdown-hashtag/config.toml`.
///
/// ```toml
/// variant = "obsidian"
/// link_prefix = "/tags/"
/// unlinked = ["draft"]
///
/// [[attributes]]
/// name = "class"
/// value = "p-category"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub variant: Variant,
    /// Tags link to `link_prefix` + tag. No prefix, no links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_prefix: Option<String>,
    /// Tags that are never linked.
    pub unlinked: Vec<String>,
    /// Extra attributes on generated links.
    pub attributes: Vec<Attribute>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the link prefix
        if let Some(prefix) = &config.link_prefix {
            config.link_prefix = Some(Self::expand(prefix).unwrap_or_else(|| prefix.clone()));
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-hashtag");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and `$VARS` in a user-supplied path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        Self::expand(&path.to_string_lossy()).map(PathBuf::from)
    }

    fn expand(s: &str) -> Option<String> {
        shellexpand::full(s).ok().map(|e| e.into_owned())
    }

    /// Engine options for this configuration.
    pub fn options(&self) -> HashtagOptions {
        let options = HashtagOptions::default()
            .with_variant(self.variant)
            .with_attributes(self.attributes.clone());
        match &self.link_prefix {
            Some(prefix) => options.with_resolver(
                PrefixResolver::new(prefix.clone()).with_unlinked(self.unlinked.iter().cloned()),
            ),
            None => options,
        }
    }
}
