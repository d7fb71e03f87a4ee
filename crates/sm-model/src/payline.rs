//! Payline patterns

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Direction wins are read along a payline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EvaluationDirection {
    #[default]
    LeftToRight,
    RightToLeft,
    BothWays,
}

/// A fixed payline pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payline {
    /// Payline ID (1-based)
    pub id: u32,
    /// Display name (e.g., "Center Horizontal")
    pub name: String,
    /// Row index per reel (0 = top)
    pub pattern: Vec<u8>,
    /// Whether the line participates in evaluation
    #[serde(default = "default_active")]
    pub active: bool,
    /// Line win multiplier
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
}

fn default_active() -> bool {
    true
}

fn default_multiplier() -> f64 {
    1.0
}

impl Payline {
    /// Create a straight line on one row
    pub fn straight(id: u32, name: impl Into<String>, row: u8, reel_count: usize) -> Self {
        Self {
            id,
            name: name.into(),
            pattern: vec![row; reel_count],
            active: true,
            multiplier: 1.0,
        }
    }

    /// Validate the pattern and multiplier
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.pattern.is_empty() {
            return Err(ModelError::InvalidWinModel(format!(
                "payline {} has an empty pattern",
                self.id
            )));
        }
        if !self.multiplier.is_finite() || self.multiplier < 0.0 {
            return Err(ModelError::InvalidWinModel(format!(
                "payline {} has an invalid multiplier {}",
                self.id, self.multiplier
            )));
        }
        Ok(())
    }
}

/// The stock five-line set for a 5×3 grid
pub fn classic_5x3_paylines() -> Vec<Payline> {
    vec![
        Payline::straight(1, "Center Horizontal", 1, 5),
        Payline::straight(2, "Top Horizontal", 0, 5),
        Payline::straight(3, "Bottom Horizontal", 2, 5),
        Payline {
            id: 4,
            name: "V Shape".into(),
            pattern: vec![0, 1, 2, 1, 0],
            active: true,
            multiplier: 1.0,
        },
        Payline {
            id: 5,
            name: "Inverted V".into(),
            pattern: vec![2, 1, 0, 1, 2],
            active: true,
            multiplier: 1.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_line() {
        let line = Payline::straight(1, "Center", 1, 5);
        assert_eq!(line.pattern, vec![1, 1, 1, 1, 1]);
        assert!(line.active);
    }

    #[test]
    fn test_classic_set() {
        let lines = classic_5x3_paylines();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3].pattern, vec![0, 1, 2, 1, 0]);
        for line in &lines {
            assert!(line.validate().is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_empty_pattern() {
        let line = Payline {
            id: 1,
            name: "Empty".into(),
            pattern: vec![],
            active: true,
            multiplier: 1.0,
        };
        assert!(line.validate().is_err());
    }

    #[test]
    fn test_direction_serialization() {
        let json = serde_json::to_string(&EvaluationDirection::LeftToRight).unwrap();
        assert_eq!(json, "\"leftToRight\"");
    }
}
