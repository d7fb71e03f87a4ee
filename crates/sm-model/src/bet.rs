//! Bet settings

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Wager parameters for an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetSettings {
    /// Credits wagered per spin
    pub credits_per_bet: f64,
    /// Designer's target RTP, as a percentage (e.g., 95.0)
    #[serde(rename = "targetRTP")]
    pub target_rtp_percent: f64,
}

impl BetSettings {
    pub fn new(credits_per_bet: f64, target_rtp_percent: f64) -> Self {
        Self {
            credits_per_bet,
            target_rtp_percent,
        }
    }

    /// Validate the target percentage (the evaluator checks the bet itself)
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.target_rtp_percent.is_finite() || self.target_rtp_percent < 0.0 {
            return Err(ModelError::InvalidBet(format!(
                "target RTP must be a non-negative percentage, got {}",
                self.target_rtp_percent
            )));
        }
        Ok(())
    }
}

impl Default for BetSettings {
    fn default() -> Self {
        Self {
            credits_per_bet: 1.0,
            target_rtp_percent: 95.0,
        }
    }
}
