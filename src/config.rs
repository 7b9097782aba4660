// Global configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vault: VaultSettings,
}

/// Where the vault lives and how its daily notes are laid out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultSettings {
    /// Absolute vault directory; when blank the vault is `~/<vault_name>`
    #[serde(default)]
    pub vault_path: String,

    #[serde(default = "default_vault_name")]
    pub vault_name: String,

    /// Subdirectory holding one `YYYY-MM-DD.md` file per day
    #[serde(default = "default_daily_note_dir")]
    pub daily_note_dir: String,

    #[serde(default = "default_template_dir")]
    pub template_dir: String,

    /// Template copied verbatim into each new daily note
    #[serde(default = "default_template_filename")]
    pub template_filename: String,
}

fn default_vault_name() -> String {
    "obsidian_vault".to_string()
}

fn default_daily_note_dir() -> String {
    "002_daily_note".to_string()
}

fn default_template_dir() -> String {
    "004_template".to_string()
}

fn default_template_filename() -> String {
    "daily_note.md".to_string()
}

impl Default for VaultSettings {
    fn default() -> Self {
        Self {
            vault_path: String::new(), // Derive from vault_name
            vault_name: default_vault_name(),
            daily_note_dir: default_daily_note_dir(),
            template_dir: default_template_dir(),
            template_filename: default_template_filename(),
        }
    }
}

impl VaultSettings {
    /// Settings pointing at an explicit vault directory, other keys defaulted
    pub fn with_vault_path(path: impl AsRef<Path>) -> Self {
        Self {
            vault_path: path.as_ref().to_string_lossy().into_owned(),
            ..Self::default()
        }
    }

    /// Layer the launcher's per-plugin settings over these.
    ///
    /// Keys match the field names. `vault_path` is taken as-is so the
    /// launcher can clear it; blank values for the other keys keep the
    /// current value. Non-string values and unknown keys are ignored.
    pub fn apply_host_settings(&mut self, host: &Map<String, Value>) {
        if let Some(path) = host.get("vault_path").and_then(Value::as_str) {
            self.vault_path = path.to_string();
        }

        let fields: [(&str, &mut String); 4] = [
            ("vault_name", &mut self.vault_name),
            ("daily_note_dir", &mut self.daily_note_dir),
            ("template_dir", &mut self.template_dir),
            ("template_filename", &mut self.template_filename),
        ];
        for (key, slot) in fields {
            match host.get(key).and_then(Value::as_str) {
                Some(value) if !value.trim().is_empty() => *slot = value.to_string(),
                _ => {}
            }
        }
    }
}

impl Config {
    /// Directory holding the config file and the log file
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".config")
                .join("dailynote")
        } else {
            // Linux, Windows and others
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("dailynote")
        };

        Ok(config_dir)
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Get the path to the log file
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("dailynote.log"))
    }

    /// Load config from disk, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Config::default();

            // Try to save the default config, but don't fail if we can't
            // (e.g., if the directory isn't writable)
            if let Err(e) = config.save() {
                tracing::warn!(
                    "Could not create default config file: {:#}. Using built-in defaults.",
                    e
                );
            }

            Ok(config)
        }
    }

    /// Load the config at `path`, writing the defaults there only if no file
    /// exists. A file that fails to parse is an error and is left untouched.
    pub fn init_at(path: &Path) -> Result<(Self, bool)> {
        if path.exists() {
            return Ok((Self::load_from(path)?, false));
        }

        let config = Config::default();
        config.save_to(path)?;
        Ok((config, true))
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
