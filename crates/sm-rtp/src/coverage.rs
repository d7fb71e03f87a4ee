//! Payout coverage reporting
//!
//! Derives the match sizes a symbol's payout table should define for the
//! active win model and surfaces the gaps. Informational only: missing
//! entries pay 0 and never block evaluation.

use std::ops::RangeInclusive;

use serde::Serialize;
use sm_model::{Symbol, WinModel};

/// Match sizes the active win model can award
///
/// Line-style models pay from 3 of a kind up to the reel count; the cluster
/// model pays across its configured size range. The range may be empty
/// (e.g., fewer than 3 reels).
pub fn expected_match_sizes(win_model: &WinModel, reel_count: u32) -> RangeInclusive<u32> {
    match win_model {
        WinModel::Standard { .. } | WinModel::Ways => 3..=reel_count,
        WinModel::Clusters {
            min_cluster_size,
            max_cluster_size,
        } => *min_cluster_size..=*max_cluster_size,
    }
}

/// A symbol with payout entries missing for the active win model
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutGap {
    /// Symbol ID
    pub symbol_id: u32,
    /// Symbol name
    pub name: String,
    /// Match sizes without a payout entry
    pub missing_sizes: Vec<u32>,
}

/// Report symbols whose payout tables do not cover the model's size range
pub fn payout_coverage(
    symbols: &[Symbol],
    win_model: &WinModel,
    reel_count: u32,
) -> Vec<PayoutGap> {
    let sizes = expected_match_sizes(win_model, reel_count);
    symbols
        .iter()
        .filter_map(|symbol| {
            let missing: Vec<u32> = sizes
                .clone()
                .filter(|size| !symbol.payouts.contains_key(size))
                .collect();
            if missing.is_empty() {
                None
            } else {
                Some(PayoutGap {
                    symbol_id: symbol.id,
                    name: symbol.name.clone(),
                    missing_sizes: missing,
                })
            }
        })
        .collect()
}
