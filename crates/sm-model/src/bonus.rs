//! Bonus feature definitions
//!
//! Bonus features are configured separately from the base game; their RTP
//! contributions are computed by the evaluation crate and summed with the
//! base-game figure.

use serde::{Deserialize, Serialize};

/// What the bonus awards when triggered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BonusKind {
    /// A batch of free spins
    FreeSpins { spins: u32 },
    /// Hold-and-spin respins collecting jackpot tiers
    HoldAndSpin,
    /// A wheel (or chance draw) across the configured jackpot tiers
    JackpotWheel,
    /// Fixed-value super bonus
    SuperBonus,
}

/// A jackpot tier a bonus can award
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JackpotTier {
    pub name: String,
    /// Payout in bet units
    pub payout: f64,
    /// Display multiplier
    #[serde(default = "default_tier_multiplier")]
    pub multiplier: f64,
}

fn default_tier_multiplier() -> f64 {
    1.0
}

/// A configured bonus feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusFeature {
    /// Unique bonus ID
    pub id: u32,
    /// Display name
    pub name: String,
    /// Award on trigger
    pub kind: BonusKind,
    /// Trigger chance per spin, as a percentage (e.g., 5 for 5%)
    pub trigger_percent: f64,
    /// Jackpot tiers for jackpot-style bonuses
    #[serde(default)]
    pub jackpots: Vec<JackpotTier>,
}

impl BonusFeature {
    pub fn new(id: u32, name: impl Into<String>, kind: BonusKind, trigger_percent: f64) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            trigger_percent,
            jackpots: Vec::new(),
        }
    }

    /// Builder: add a jackpot tier
    pub fn with_jackpot(mut self, name: impl Into<String>, payout: f64) -> Self {
        self.jackpots.push(JackpotTier {
            name: name.into(),
            payout,
            multiplier: 1.0,
        });
        self
    }

    /// Mean payout across the configured jackpot tiers
    pub fn average_jackpot_payout(&self) -> Option<f64> {
        if self.jackpots.is_empty() {
            return None;
        }
        let sum: f64 = self.jackpots.iter().map(|j| j.payout).sum();
        Some(sum / self.jackpots.len() as f64)
    }
}
