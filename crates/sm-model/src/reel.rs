//! Weighted reel strips

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// How symbols are placed on the reels
///
/// Only `Percentage` reels have a closed-form hit probability; `Fixed`
/// strips are laid out by hand in the editor and evaluate to zero RTP in the
/// theoretical model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMethod {
    /// Relative symbol weights per reel
    #[default]
    Percentage,
    /// Hand-placed strip positions
    Fixed,
}

/// A symbol's relative weight on one reel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelEntry {
    /// Symbol ID
    pub id: u32,
    /// Relative frequency; not required to sum to 100 across the reel
    pub percentage: f64,
}

/// One reel of the machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reel {
    /// Reel position (1-based)
    pub id: u32,
    /// Weight entries; a symbol absent here has probability 0 on this reel
    #[serde(default)]
    pub symbols: Vec<ReelEntry>,
}

impl Reel {
    /// Create an empty reel
    pub fn new(id: u32) -> Self {
        Self {
            id,
            symbols: Vec::new(),
        }
    }

    /// Builder: set a symbol's weight, replacing any existing entry
    pub fn with_entry(mut self, symbol_id: u32, percentage: f64) -> Self {
        if let Some(entry) = self.symbols.iter_mut().find(|e| e.id == symbol_id) {
            entry.percentage = percentage;
        } else {
            self.symbols.push(ReelEntry {
                id: symbol_id,
                percentage,
            });
        }
        self
    }

    /// Sum of all weights on this reel
    pub fn total_weight(&self) -> f64 {
        self.symbols.iter().map(|e| e.percentage).sum()
    }

    /// Raw weight of a symbol on this reel (0 when absent)
    pub fn weight_of(&self, symbol_id: u32) -> f64 {
        self.symbols
            .iter()
            .find(|e| e.id == symbol_id)
            .map(|e| e.percentage)
            .unwrap_or(0.0)
    }

    /// Normalized probability of the symbol landing on this reel
    ///
    /// A reel whose weights sum to zero contributes probability 0 for every
    /// symbol; defined, not an error.
    pub fn probability_of(&self, symbol_id: u32) -> f64 {
        let total = self.total_weight();
        if total > 0.0 {
            self.weight_of(symbol_id) / total
        } else {
            0.0
        }
    }

    /// Validate weights (non-negative, finite) and entry uniqueness
    pub fn validate(&self) -> Result<(), ModelError> {
        for entry in &self.symbols {
            if !entry.percentage.is_finite() || entry.percentage < 0.0 {
                return Err(ModelError::InvalidReel(format!(
                    "reel {} has an invalid weight {} for symbol {}",
                    self.id, entry.percentage, entry.id
                )));
            }
        }
        for (i, entry) in self.symbols.iter().enumerate() {
            if self.symbols[..i].iter().any(|e| e.id == entry.id) {
                return Err(ModelError::InvalidReel(format!(
                    "reel {} lists symbol {} more than once",
                    self.id, entry.id
                )));
            }
        }
        Ok(())
    }
}

/// The full reel configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelSet {
    /// Placement strategy for every reel
    #[serde(default)]
    pub selection_method: SelectionMethod,
    /// Reels in machine order
    #[serde(default)]
    pub reels: Vec<Reel>,
}

impl ReelSet {
    /// Create a percentage-weighted reel set
    pub fn new(reels: Vec<Reel>) -> Self {
        Self {
            selection_method: SelectionMethod::Percentage,
            reels,
        }
    }

    /// Create `reel_count` identical reels from one weight list
    pub fn uniform(reel_count: u32, entries: &[(u32, f64)]) -> Self {
        let reels = (1..=reel_count)
            .map(|id| {
                entries
                    .iter()
                    .fold(Reel::new(id), |reel, &(sym, pct)| reel.with_entry(sym, pct))
            })
            .collect();
        Self::new(reels)
    }

    /// Number of reels
    pub fn reel_count(&self) -> usize {
        self.reels.len()
    }

    /// Whether the theoretical model applies to this reel set
    pub fn is_probability_based(&self) -> bool {
        self.selection_method == SelectionMethod::Percentage
    }

    /// Validate every reel
    pub fn validate(&self) -> Result<(), ModelError> {
        for reel in &self.reels {
            reel.validate()?;
        }
        Ok(())
    }
}
