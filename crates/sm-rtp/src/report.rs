//! Evaluation result records

use serde::{Deserialize, Serialize};

/// One symbol's share of the expected payout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolContribution {
    /// Symbol ID
    pub symbol_id: u32,
    /// Symbol name, echoed for reporting
    pub name: String,
    /// Expected payout in bet units contributed by this symbol
    pub expected_payout: f64,
    /// This symbol's RTP contribution, as a percentage of the bet
    pub rtp_percent: f64,
}

/// Output of one evaluation call
///
/// Created fresh on every call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RtpResult {
    /// Total expected payout per spin, in bet units
    pub expected_payout: f64,
    /// Expected payout as a percentage of the bet
    #[serde(rename = "theoreticalRTP")]
    pub theoretical_rtp_percent: f64,
    /// The designer's target, echoed from the input
    #[serde(rename = "targetRTP")]
    pub target_rtp_percent: f64,
    /// `target - theoretical`, signed; positive means the configuration
    /// underpays relative to target
    #[serde(rename = "difference")]
    pub difference_percent: f64,
    /// Per-symbol breakdown
    pub symbols: Vec<SymbolContribution>,
}

impl RtpResult {
    /// Assemble a result from per-symbol contributions
    pub(crate) fn from_contributions(
        symbols: Vec<SymbolContribution>,
        credits_per_bet: f64,
        target_rtp_percent: f64,
    ) -> Self {
        let expected_payout: f64 = symbols.iter().map(|c| c.expected_payout).sum();
        let theoretical_rtp_percent = expected_payout / credits_per_bet * 100.0;
        Self {
            expected_payout,
            theoretical_rtp_percent,
            target_rtp_percent,
            difference_percent: target_rtp_percent - theoretical_rtp_percent,
            symbols,
        }
    }

    /// Whether the configuration pays at least the target
    pub fn meets_target(&self) -> bool {
        self.difference_percent <= 0.0
    }
}
