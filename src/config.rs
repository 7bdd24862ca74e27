use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Source dialect of the generated declarations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    Cpp,
    C,
}

impl Target {
    pub fn default_preamble(self) -> &'static [&'static str] {
        match self {
            Target::Cpp => &["#include <cstddef>"],
            Target::C => &["#include <stddef.h>"],
        }
    }

    pub fn default_size_type(self) -> &'static str {
        match self {
            Target::Cpp => "std::size_t",
            Target::C => "size_t",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub version: String,
    pub target: Target,
    pub layout: LayoutConfig,
    pub declarations: DeclarationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Values per initializer row
    pub row_width: usize,
    pub indent: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeclarationConfig {
    /// Lines written before the array, replaces the target's include
    pub preamble: Option<Vec<String>>,
    pub size_type: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            target: Target::default(),
            layout: LayoutConfig::default(),
            declarations: DeclarationConfig::default(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_width: 12,
            indent: "    ".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = Self::expand_tilde(&path.to_string_lossy())?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at specified path: {}",
                config_path.display()
            );
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", config_path.display()))?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.version.is_empty() {
            anyhow::bail!("Config version cannot be empty");
        }

        if self.layout.row_width == 0 {
            anyhow::bail!("layout.rowWidth must be greater than 0");
        }
        if !self.layout.indent.chars().all(|c| c == ' ' || c == '\t') {
            anyhow::bail!("layout.indent may only contain spaces and tabs");
        }

        if let Some(size_type) = &self.declarations.size_type {
            if size_type.trim().is_empty() {
                anyhow::bail!("declarations.sizeType cannot be empty");
            }
        }

        Ok(())
    }

    pub fn preamble(&self) -> Vec<String> {
        match &self.declarations.preamble {
            Some(lines) => lines.clone(),
            None => self
                .target
                .default_preamble()
                .iter()
                .map(|line| line.to_string())
                .collect(),
        }
    }

    pub fn size_type(&self) -> &str {
        self.declarations
            .size_type
            .as_deref()
            .unwrap_or_else(|| self.target.default_size_type())
    }

    pub fn expand_tilde(path: &str) -> Result<PathBuf> {
        if let Some(stripped) = path.strip_prefix("~/") {
            let home = dirs::home_dir().context("Could not determine home directory")?;
            Ok(home.join(stripped))
        } else {
            Ok(PathBuf::from(path))
        }
    }
}
