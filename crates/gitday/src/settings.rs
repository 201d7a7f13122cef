//! Settings file handling
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. built-in defaults ([`Settings::default`])
//! 2. the TOML file (`~/.gitday.toml` unless `--config` says otherwise)
//! 3. environment variables for API keys, then command-line flags
//!
//! A missing file is not an error; a malformed one is.

use std::path::{Path, PathBuf};

use gitday_ai::ProviderSettings;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{Cli, ConfigError};

/// Default settings file name, relative to the home directory
pub const SETTINGS_FILE_NAME: &str = ".gitday.toml";

/// Starter settings written by `gitday init`
pub const DEFAULT_SETTINGS_TEMPLATE: &str = r#"# gitday settings

# Directories scanned for git repositories (one level deep)
scan_paths = ["~/projects"]

# Directory names skipped while scanning
exclude = ["node_modules", "vendor", ".cache", ".venv"]

# Only include commits by this author (empty means everyone)
author = ""

[ai]
# claude, openai or ollama
provider = "claude"
# GITDAY_API_KEY, ANTHROPIC_API_KEY or OPENAI_API_KEY take precedence
api_key = ""
# Empty selects the provider's default model
model = ""
ollama_url = "http://localhost:11434"

[slack]
webhook_url = ""

[output]
color = true
compact = false
"#;

/// Slack delivery settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackSettings {
    /// Incoming webhook URL
    pub webhook_url: String,
}

/// Terminal rendering settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Use ANSI colors
    pub color: bool,
    /// Limit each repository to three commits
    pub compact: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            color: true,
            compact: false,
        }
    }
}

/// Everything gitday reads from its settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root directories to scan
    pub scan_paths: Vec<String>,
    /// Directory names never treated as repositories
    pub exclude: Vec<String>,
    /// Author filter; empty means every author
    pub author: String,
    /// Summary provider selection
    pub ai: ProviderSettings,
    /// Slack webhook
    pub slack: SlackSettings,
    /// Terminal output
    pub output: OutputSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_paths: vec![".".to_string()],
            exclude: ["node_modules", "vendor", ".cache", ".venv"]
                .map(String::from)
                .to_vec(),
            author: String::new(),
            ai: ProviderSettings::default(),
            slack: SlackSettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl Settings {
    /// `~/.gitday.toml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HomeNotFound` when there is no home directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::home_dir()
            .map(|home| home.join(SETTINGS_FILE_NAME))
            .ok_or(ConfigError::HomeNotFound)
    }

    /// Settings file selected by `--config`, or the default path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HomeNotFound` when no path was given and there
    /// is no home directory.
    pub fn path_for(cli: &Cli) -> Result<PathBuf, ConfigError> {
        match &cli.config {
            Some(path) => Ok(path.clone()),
            None => Self::default_path(),
        }
    }

    /// Parse settings from TOML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the text is not valid settings TOML.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(origin.to_path_buf(), e))
    }

    /// Load settings from `path`, falling back to defaults if it is missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                debug!(path = %path.display(), "Loaded settings file");
                Self::from_toml(&text, path)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::Read(path.to_path_buf(), e)),
        }
    }

    /// Load the settings file and apply environment and flag overrides
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Settings::path_for`] and [`Settings::load`].
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = Self::load(&Self::path_for(cli)?)?;
        settings.apply_env(|key| std::env::var(key).ok());
        settings.apply_cli(cli);
        Ok(settings)
    }

    /// Take the API key from the environment when one is set there
    ///
    /// `GITDAY_API_KEY` applies to any provider. Otherwise the provider's
    /// conventional variable is consulted. Either beats the file value.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let provider = self.ai.provider.to_lowercase();
        let fallback = match provider.as_str() {
            "claude" => Some("ANTHROPIC_API_KEY"),
            "openai" => Some("OPENAI_API_KEY"),
            _ => None,
        };
        let key = lookup("GITDAY_API_KEY")
            .filter(|k| !k.is_empty())
            .or_else(|| fallback.and_then(&lookup).filter(|k| !k.is_empty()));
        if let Some(key) = key {
            self.ai.api_key = key;
        }
    }

    /// Apply command-line overrides
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(author) = &cli.author {
            self.author = author.clone();
        }
        if cli.compact {
            self.output.compact = true;
        }
        if cli.no_color {
            self.output.color = false;
        }
    }

    /// The Slack webhook, if one is configured
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingWebhook` for an empty URL.
    pub fn slack_webhook(&self) -> Result<&str, ConfigError> {
        match self.slack.webhook_url.trim() {
            "" => Err(ConfigError::MissingWebhook),
            url => Ok(url),
        }
    }

    /// Write [`DEFAULT_SETTINGS_TEMPLATE`] to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Write` if the file cannot be written.
    pub fn write_template(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Write(path.to_path_buf(), e))?;
        }
        std::fs::write(path, DEFAULT_SETTINGS_TEMPLATE)
            .map_err(|e| ConfigError::Write(path.to_path_buf(), e))
    }
}

/// Directory where `gitday log` stores reports
///
/// # Errors
///
/// Returns `ConfigError::HomeNotFound` when there is no home directory.
pub fn log_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".gitday").join("logs"))
        .ok_or(ConfigError::HomeNotFound)
}
