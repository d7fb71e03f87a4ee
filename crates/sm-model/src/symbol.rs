//! Symbol definitions and the symbol library

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A symbol definition
///
/// `payouts` maps a match size (of-a-kind count for line/ways games, cluster
/// size for cluster games) to a payout multiplier in bet units. Sizes without
/// an entry pay 0; a sparse table is valid, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    /// Unique symbol ID
    pub id: u32,
    /// Display name (e.g., "Diamond", "Seven")
    pub name: String,
    /// Editor display color (hex); opaque to the math
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Payout multiplier per match size
    #[serde(default)]
    pub payouts: BTreeMap<u32, f64>,
    /// Substitutes for other symbols
    #[serde(default)]
    pub is_wild: bool,
    /// Pays in any position, typically a feature trigger
    #[serde(default)]
    pub is_scatter: bool,
}

impl Symbol {
    /// Create a regular symbol with an empty payout table
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: None,
            payouts: BTreeMap::new(),
            is_wild: false,
            is_scatter: false,
        }
    }

    /// Builder: add a payout entry for a match size
    pub fn with_payout(mut self, match_size: u32, multiplier: f64) -> Self {
        self.payouts.insert(match_size, multiplier);
        self
    }

    /// Builder: set the editor color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Builder: mark as wild
    pub fn wild(mut self) -> Self {
        self.is_wild = true;
        self
    }

    /// Builder: mark as scatter
    pub fn scatter(mut self) -> Self {
        self.is_scatter = true;
        self
    }

    /// Payout multiplier for a match size (0 when the size has no entry)
    pub fn payout_for(&self, match_size: u32) -> f64 {
        self.payouts.get(&match_size).copied().unwrap_or(0.0)
    }

    /// Largest match size with a payout entry
    pub fn max_paying_size(&self) -> Option<u32> {
        self.payouts.keys().next_back().copied()
    }

    /// Validate payout entries (sizes positive, multipliers non-negative)
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.is_empty() {
            return Err(ModelError::InvalidSymbol(format!(
                "symbol {} has no name",
                self.id
            )));
        }
        for (&size, &pay) in &self.payouts {
            if size == 0 {
                return Err(ModelError::InvalidSymbol(format!(
                    "symbol '{}' has a payout for match size 0",
                    self.name
                )));
            }
            if !pay.is_finite() || pay < 0.0 {
                return Err(ModelError::InvalidSymbol(format!(
                    "symbol '{}' has an invalid payout {} for match size {}",
                    self.name, pay, size
                )));
            }
        }
        Ok(())
    }
}

/// An ordered collection of symbol definitions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolLibrary {
    pub symbols: Vec<Symbol>,
}

impl SymbolLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic fruit-machine library the editors start from
    pub fn classic() -> Self {
        let symbols = vec![
            // High paying
            Symbol::new(1, "Diamond")
                .with_color("#3FB8AF")
                .with_payout(3, 50.0)
                .with_payout(4, 150.0)
                .with_payout(5, 500.0),
            Symbol::new(2, "Seven")
                .with_color("#FF3366")
                .with_payout(3, 30.0)
                .with_payout(4, 100.0)
                .with_payout(5, 300.0),
            Symbol::new(3, "Triple Bar")
                .with_color("#FFAD11")
                .with_payout(3, 20.0)
                .with_payout(4, 60.0)
                .with_payout(5, 200.0),
            Symbol::new(4, "Bell")
                .with_color("#7C4DFF")
                .with_payout(3, 15.0)
                .with_payout(4, 40.0)
                .with_payout(5, 150.0),
            // Medium paying
            Symbol::new(5, "Watermelon")
                .with_color("#8BC34A")
                .with_payout(3, 10.0)
                .with_payout(4, 25.0)
                .with_payout(5, 75.0),
            Symbol::new(6, "Grapes")
                .with_color("#9C27B0")
                .with_payout(3, 8.0)
                .with_payout(4, 20.0)
                .with_payout(5, 60.0),
            Symbol::new(7, "Orange")
                .with_color("#FF9800")
                .with_payout(3, 5.0)
                .with_payout(4, 15.0)
                .with_payout(5, 50.0),
            // Low paying
            Symbol::new(8, "Cherry")
                .with_color("#F44336")
                .with_payout(3, 3.0)
                .with_payout(4, 10.0)
                .with_payout(5, 30.0),
            Symbol::new(9, "Lemon")
                .with_color("#CDDC39")
                .with_payout(3, 2.0)
                .with_payout(4, 8.0)
                .with_payout(5, 25.0),
            // Special
            Symbol::new(10, "Wild")
                .with_color("#00BCD4")
                .with_payout(3, 25.0)
                .with_payout(4, 75.0)
                .with_payout(5, 250.0)
                .wild(),
            Symbol::new(11, "Scatter")
                .with_color("#FF5722")
                .with_payout(3, 5.0)
                .with_payout(4, 20.0)
                .with_payout(5, 100.0)
                .scatter(),
        ];

        Self { symbols }
    }

    /// Get a symbol by ID
    pub fn get(&self, id: u32) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.id == id)
    }

    /// All symbol IDs in library order
    pub fn ids(&self) -> Vec<u32> {
        self.symbols.iter().map(|s| s.id).collect()
    }

    /// First wild symbol ID, if any
    pub fn wild_id(&self) -> Option<u32> {
        self.symbols.iter().find(|s| s.is_wild).map(|s| s.id)
    }

    /// First scatter symbol ID, if any
    pub fn scatter_id(&self) -> Option<u32> {
        self.symbols.iter().find(|s| s.is_scatter).map(|s| s.id)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    /// Validate every symbol plus ID uniqueness
    pub fn validate(&self) -> Result<(), ModelError> {
        for symbol in &self.symbols {
            symbol.validate()?;
        }
        for (i, symbol) in self.symbols.iter().enumerate() {
            if self.symbols[..i].iter().any(|s| s.id == symbol.id) {
                return Err(ModelError::InvalidSymbol(format!(
                    "duplicate symbol id {}",
                    symbol.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payout_lookup() {
        let symbol = Symbol::new(1, "Diamond")
            .with_payout(3, 50.0)
            .with_payout(5, 500.0);
        assert_eq!(symbol.payout_for(3), 50.0);
        assert_eq!(symbol.payout_for(4), 0.0); // Sparse table, not an error
        assert_eq!(symbol.payout_for(5), 500.0);
        assert_eq!(symbol.max_paying_size(), Some(5));
    }

    #[test]
    fn test_classic_library() {
        let library = SymbolLibrary::classic();
        assert_eq!(library.len(), 11);
        assert_eq!(library.wild_id(), Some(10));
        assert_eq!(library.scatter_id(), Some(11));
        assert_eq!(library.get(1).unwrap().name, "Diamond");
        assert!(library.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_payouts() {
        let negative = Symbol::new(1, "Bad").with_payout(3, -5.0);
        assert!(negative.validate().is_err());

        let zero_size = Symbol::new(1, "Bad").with_payout(0, 5.0);
        assert!(zero_size.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let library = SymbolLibrary {
            symbols: vec![Symbol::new(1, "A"), Symbol::new(1, "B")],
        };
        assert!(library.validate().is_err());
    }

    #[test]
    fn test_serialization_shape() {
        let symbol = Symbol::new(7, "Orange").with_payout(3, 5.0).scatter();
        let json = serde_json::to_string(&symbol).unwrap();
        assert!(json.contains("\"isScatter\":true"));
        assert!(json.contains("\"isWild\":false"));

        let parsed: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, symbol);
    }
}
