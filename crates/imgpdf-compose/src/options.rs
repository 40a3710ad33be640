#[cfg(feature = "serde")]
use crate::types::{ComposeError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// User settings for PDF generation
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ComposeOptions {
    /// Write the PDF even when no image could be read, producing a document
    /// without pages. Off by default: such a request fails instead.
    pub allow_empty_document: bool,
}

impl ComposeOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ComposeError::Config(format!("Failed to parse settings: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ComposeError::Config(format!("Failed to serialize settings: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}
