//! Pipeline configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ResmatError, Result};

/// Top-level configuration for the processing pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResmatConfig {
    /// PDF decoding settings.
    pub pdf: PdfConfig,
    /// Field extraction settings.
    pub extraction: ExtractionConfig,
}

impl Default for ResmatConfig {
    fn default() -> Self {
        Self {
            pdf: PdfConfig::default(),
            extraction: ExtractionConfig::default(),
        }
    }
}

/// PDF decoding settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Prefer the embedded text layer when one exists.
    pub prefer_embedded_text: bool,
    /// Minimum characters of embedded text for a page to count as text-based.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            prefer_embedded_text: true,
            min_text_length: 50,
        }
    }
}

/// Field extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Apply the mod-23 checksum when accepting DNI candidates.
    pub validate_dni: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self { validate_dni: true }
    }
}

impl ResmatConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ResmatError::Config(format!("invalid config file: {e}")))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ResmatError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ResmatConfig::default();
        assert!(config.pdf.prefer_embedded_text);
        assert_eq!(config.pdf.min_text_length, 50);
        assert!(config.extraction.validate_dni);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ResmatConfig =
            serde_json::from_str(r#"{"extraction": {"validate_dni": false}}"#).unwrap();
        assert!(!config.extraction.validate_dni);
        assert_eq!(config.pdf.min_text_length, 50);
    }
}
