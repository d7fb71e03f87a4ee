//! Versioned configuration document

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use sm_model::{
    BetSettings, BonusFeature, ModelError, ReelSet, SymbolLibrary, WinModel,
};

/// Current document schema version
pub const DOCUMENT_VERSION: u32 = 1;

/// Refuse to parse documents larger than this
const MAX_DOCUMENT_BYTES: u64 = 8 * 1024 * 1024;

/// Persistence errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document version {0} is newer than supported version {DOCUMENT_VERSION}")]
    FutureVersion(u32),

    #[error("invalid document: {0}")]
    Invalid(String),
}

/// The complete persisted configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,
    /// Project name
    #[serde(default)]
    pub name: String,
    /// Symbol library
    #[serde(default)]
    pub symbols: SymbolLibrary,
    /// Reel configuration
    #[serde(default)]
    pub reel_set: ReelSet,
    /// Active win model
    #[serde(default)]
    pub win_model: WinModel,
    /// Bet settings
    #[serde(default)]
    pub bet: BetSettings,
    /// Bonus features
    #[serde(default)]
    pub bonuses: Vec<BonusFeature>,
}

fn default_version() -> u32 {
    DOCUMENT_VERSION
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self {
            version: DOCUMENT_VERSION,
            name: "Untitled Game".into(),
            symbols: SymbolLibrary::default(),
            reel_set: ReelSet::default(),
            win_model: WinModel::default(),
            bet: BetSettings::default(),
            bonuses: Vec::new(),
        }
    }
}

impl ConfigDocument {
    /// Starter document: the classic library on a 5-reel machine
    pub fn classic() -> Self {
        let symbols = SymbolLibrary::classic();
        // Rarer at the top of the paytable, common at the bottom
        let weights: Vec<(u32, f64)> = symbols
            .iter()
            .map(|s| {
                let weight = if s.is_wild || s.is_scatter {
                    1.0
                } else {
                    f64::from(s.id + 1)
                };
                (s.id, weight)
            })
            .collect();

        Self {
            name: "Classic Fruit".into(),
            symbols,
            reel_set: ReelSet::uniform(5, &weights),
            ..Self::default()
        }
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), ModelError> {
        self.symbols.validate()?;
        self.reel_set.validate()?;
        self.win_model.validate()?;
        self.bet.validate()?;
        Ok(())
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON, rejecting future schema versions
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let doc: Self = serde_json::from_str(json)?;
        if doc.version > DOCUMENT_VERSION {
            return Err(StoreError::FutureVersion(doc.version));
        }
        Ok(doc)
    }

    /// Write the document to a file
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = self.to_json()?;
        fs::write(path, json)?;
        log::info!("saved configuration document to {}", path.display());
        Ok(())
    }

    /// Load a document from a file
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let size = fs::metadata(path)?.len();
        if size > MAX_DOCUMENT_BYTES {
            return Err(StoreError::Invalid(format!(
                "document too large: {size} bytes (max {MAX_DOCUMENT_BYTES})"
            )));
        }
        let json = fs::read_to_string(path)?;
        let doc = Self::from_json(&json)?;
        log::info!(
            "loaded configuration document '{}' from {}",
            doc.name,
            path.display()
        );
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_roundtrip() {
        let doc = ConfigDocument::classic();
        let json = doc.to_json().unwrap();
        let parsed = ConfigDocument::from_json(&json).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let doc = ConfigDocument::from_json("{}").unwrap();
        assert_eq!(doc.version, DOCUMENT_VERSION);
        assert!(doc.symbols.is_empty());
        assert!(doc.reel_set.reels.is_empty());
        assert!(doc.win_model.is_standard());
    }

    #[test]
    fn test_future_version_rejected() {
        let err = ConfigDocument::from_json("{\"version\": 99}").unwrap_err();
        assert!(matches!(err, StoreError::FutureVersion(99)));
    }

    #[test]
    fn test_classic_document_validates() {
        let doc = ConfigDocument::classic();
        assert!(doc.validate().is_ok());
        assert_eq!(doc.reel_set.reel_count(), 5);
        assert_eq!(doc.symbols.len(), 11);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "sm-state-doc-test-{}.json",
            std::process::id()
        ));
        let doc = ConfigDocument::classic();
        doc.save(&path).unwrap();
        let loaded = ConfigDocument::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, doc);
    }
}
