//! Configuration file support for nupkg-graph.
//!
//! Provides YAML-based configuration through `nupkg-graph.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::adapters::outbound::renderer::RenderSettings;
use crate::shared::security::{validate_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "nupkg-graph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub renderer: Option<RendererConfig>,
    pub fetch: Option<FetchConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Settings for the external diagram renderer.
#[derive(Debug, Deserialize, Default)]
pub struct RendererConfig {
    pub command: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub scale: Option<u32>,
}

/// Settings for the archive download.
#[derive(Debug, Deserialize, Default)]
pub struct FetchConfig {
    pub timeout_secs: Option<u64>,
}

impl ConfigFile {
    /// Renderer settings with defaults filled in for absent fields.
    pub fn render_settings(&self) -> RenderSettings {
        let defaults = RenderSettings::default();
        match &self.renderer {
            Some(renderer) => RenderSettings {
                command: renderer.command.clone().unwrap_or(defaults.command),
                width: renderer.width.unwrap_or(defaults.width),
                height: renderer.height.unwrap_or(defaults.height),
                scale: renderer.scale.unwrap_or(defaults.scale),
            },
            None => defaults,
        }
    }

    /// Download timeout; `None` means the request may block indefinitely.
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch
            .as_ref()
            .and_then(|fetch| fetch.timeout_secs)
            .map(Duration::from_secs)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref renderer) = config.renderer {
        if let Some(ref command) = renderer.command {
            if command.trim().is_empty() {
                bail!(
                    "Invalid config: renderer.command must not be empty.\n\n\
                     💡 Hint: Use the name or path of the Mermaid CLI executable (e.g., \"mmdc\")."
                );
            }
        }

        for (field, value) in [
            ("width", renderer.width),
            ("height", renderer.height),
            ("scale", renderer.scale),
        ] {
            if value == Some(0) {
                bail!(
                    "Invalid config: renderer.{} must be greater than zero.",
                    field
                );
            }
        }
    }

    if config.fetch.as_ref().and_then(|fetch| fetch.timeout_secs) == Some(0) {
        bail!(
            "Invalid config: fetch.timeout_secs must be greater than zero.\n\n\
             💡 Hint: Remove the field to wait without a timeout."
        );
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
