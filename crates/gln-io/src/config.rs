use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Label selecting byte-per-unit reading with no decoding at all
pub const RAW_ENCODING: &str = "raw";

/// How a [`crate::FileReader`] turns bytes into code units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// `"raw"` or any WHATWG encoding label (`"utf-8"`, `"utf-16le"`, ...)
    pub encoding: String,

    /// Whether a leading byte-order mark overrides `encoding`
    pub bom_sniffing: bool,

    /// Bytes pulled from the file per refill
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { encoding: "utf-8".to_string(), bom_sniffing: true, buffer_size: 8192 }
    }
}

impl ReaderConfig {
    /// Byte-per-unit reading, matching a plain `char` stream
    pub fn raw() -> Self {
        Self { encoding: RAW_ENCODING.to_string(), bom_sniffing: false, ..Self::default() }
    }

    pub fn with_encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = label.into();
        self
    }

    pub fn with_bom_sniffing(mut self, enabled: bool) -> Self {
        self.bom_sniffing = enabled;
        self
    }

    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Defaults, overridden by whatever `path` sets when it exists
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = ReaderConfig::default();

        if let Some(path) = path {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let partial: PartialConfig = toml::from_str(&contents)
                    .with_context(|| format!("Failed to parse {}", path.display()))?;
                config.merge(partial);
            }
        }

        Ok(config)
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let partial: PartialConfig =
            toml::from_str(contents).context("Failed to parse reader configuration")?;
        let mut config = ReaderConfig::default();
        config.merge(partial);
        Ok(config)
    }

    fn merge(&mut self, other: PartialConfig) {
        if let Some(val) = other.encoding {
            self.encoding = val;
        }
        if let Some(val) = other.bom_sniffing {
            self.bom_sniffing = val;
        }
        if let Some(val) = other.buffer_size {
            self.buffer_size = val;
        }
    }
}

/// Partial configuration for deserializing from TOML with optional fields
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    encoding: Option<String>,
    bom_sniffing: Option<bool>,
    buffer_size: Option<usize>,
}
