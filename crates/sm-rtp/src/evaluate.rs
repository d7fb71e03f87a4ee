//! Win-model dispatch and per-model expected value

use log::debug;

use sm_model::{ReelSet, Symbol, WinModel};

use crate::error::RtpError;
use crate::report::{RtpResult, SymbolContribution};

/// Largest cluster size the cluster model evaluates
///
/// The frequency heuristic is calibrated for sizes 3..=8; configured maxima
/// beyond this are truncated, and payout entries above it are never
/// consulted.
pub const CLUSTER_SIZE_CAP: u32 = 8;

/// Evaluate the theoretical RTP of a configuration
///
/// Pure and synchronous: reads the given snapshots, allocates a fresh
/// [`RtpResult`], touches nothing else. An empty symbol list is a valid
/// zero-payout configuration, not an error.
///
/// # Errors
///
/// - [`RtpError::InvalidConfiguration`] when the reel set is empty or
///   `credits_per_bet` is negative or non-finite
/// - [`RtpError::DivisionByZero`] when `credits_per_bet` is zero
pub fn evaluate(
    symbols: &[Symbol],
    reel_set: &ReelSet,
    win_model: &WinModel,
    credits_per_bet: f64,
    target_rtp_percent: f64,
) -> Result<RtpResult, RtpError> {
    if reel_set.reels.is_empty() {
        return Err(RtpError::InvalidConfiguration(
            "reel set contains no reels".into(),
        ));
    }
    if credits_per_bet == 0.0 {
        return Err(RtpError::DivisionByZero);
    }
    if !credits_per_bet.is_finite() || credits_per_bet < 0.0 {
        return Err(RtpError::InvalidConfiguration(format!(
            "credits per bet must be positive and finite, got {credits_per_bet}"
        )));
    }

    // Fixed strips have no closed-form hit probability; the theoretical
    // model is defined for percentage-weighted reels only.
    if !reel_set.is_probability_based() {
        debug!("reel selection is not percentage-based, reporting zero RTP");
        let zeroes = symbols
            .iter()
            .map(|s| contribution(s, 0.0, credits_per_bet))
            .collect();
        return Ok(RtpResult::from_contributions(
            zeroes,
            credits_per_bet,
            target_rtp_percent,
        ));
    }

    let contributions = match win_model {
        // A line hit is modeled as the symbol occupying every reel at once,
        // the limiting case that dominates the theoretical contribution
        // when lines are few relative to ways.
        WinModel::Standard { .. } => line_contributions(symbols, reel_set, credits_per_bet),
        // Ways reads as per-reel presence rather than a tracked position.
        // With payouts keyed to reel count the arithmetic is identical to
        // the standard path; the models differ in game semantics only.
        WinModel::Ways => line_contributions(symbols, reel_set, credits_per_bet),
        WinModel::Clusters {
            min_cluster_size,
            max_cluster_size,
        } => {
            if *max_cluster_size > CLUSTER_SIZE_CAP {
                debug!(
                    "cluster evaluation truncated at size {CLUSTER_SIZE_CAP} (configured max {max_cluster_size})"
                );
            }
            cluster_contributions(
                symbols,
                reel_set,
                *min_cluster_size,
                *max_cluster_size,
                credits_per_bet,
            )
        }
    };

    Ok(RtpResult::from_contributions(
        contributions,
        credits_per_bet,
        target_rtp_percent,
    ))
}

/// Probability of the symbol landing on every reel simultaneously
fn all_reels_probability(symbol_id: u32, reel_set: &ReelSet) -> f64 {
    reel_set
        .reels
        .iter()
        .map(|reel| reel.probability_of(symbol_id))
        .product()
}

/// Mean normalized frequency of the symbol across all reels
fn average_frequency(symbol_id: u32, reel_set: &ReelSet) -> f64 {
    let sum: f64 = reel_set
        .reels
        .iter()
        .map(|reel| reel.probability_of(symbol_id))
        .sum();
    sum / reel_set.reel_count() as f64
}

/// Expected payout per symbol for the line-style models
///
/// Payout is keyed to the full reel count: a symbol on all R reels is an
/// "R of a kind". Shorter matches are not modeled on this path.
fn line_contributions(
    symbols: &[Symbol],
    reel_set: &ReelSet,
    credits_per_bet: f64,
) -> Vec<SymbolContribution> {
    let match_size = reel_set.reel_count() as u32;
    symbols
        .iter()
        .map(|symbol| {
            let probability = all_reels_probability(symbol.id, reel_set);
            let expected = probability * symbol.payout_for(match_size);
            contribution(symbol, expected, credits_per_bet)
        })
        .collect()
}

/// Expected payout per symbol for the cluster model
///
/// Approximate: scales the symbol's mean frequency by cluster size with the
/// heuristic `avg^c * (9 - c)` instead of enumerating connected components
/// over the grid. Sizes above [`CLUSTER_SIZE_CAP`] are never evaluated.
fn cluster_contributions(
    symbols: &[Symbol],
    reel_set: &ReelSet,
    min_cluster_size: u32,
    max_cluster_size: u32,
    credits_per_bet: f64,
) -> Vec<SymbolContribution> {
    let cap = max_cluster_size.min(CLUSTER_SIZE_CAP);
    symbols
        .iter()
        .map(|symbol| {
            let avg = average_frequency(symbol.id, reel_set);
            let mut expected = 0.0;
            for size in min_cluster_size..=cap {
                let hit = avg.powi(size as i32) * f64::from(9 - size);
                expected += hit * symbol.payout_for(size.min(CLUSTER_SIZE_CAP));
            }
            contribution(symbol, expected, credits_per_bet)
        })
        .collect()
}

fn contribution(symbol: &Symbol, expected_payout: f64, credits_per_bet: f64) -> SymbolContribution {
    SymbolContribution {
        symbol_id: symbol.id,
        name: symbol.name.clone(),
        expected_payout,
        rtp_percent: expected_payout / credits_per_bet * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use sm_model::{Reel, SelectionMethod};

    use super::*;

    fn five_reel_set() -> ReelSet {
        // Symbol 1 at weight 1 of 10 on every reel
        ReelSet::uniform(5, &[(1, 1.0), (2, 9.0)])
    }

    fn library() -> Vec<Symbol> {
        vec![
            Symbol::new(1, "Diamond").with_payout(5, 500.0),
            Symbol::new(2, "Cherry").with_payout(5, 30.0),
        ]
    }

    #[test]
    fn test_empty_reel_set_is_an_error() {
        let err = evaluate(
            &library(),
            &ReelSet::default(),
            &WinModel::standard(),
            1.0,
            95.0,
        )
        .unwrap_err();
        assert!(matches!(err, RtpError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_zero_credits_is_division_by_zero() {
        // A typed error, never Infinity or NaN
        let err = evaluate(
            &library(),
            &five_reel_set(),
            &WinModel::standard(),
            0.0,
            95.0,
        )
        .unwrap_err();
        assert_eq!(err, RtpError::DivisionByZero);
    }

    #[test]
    fn test_negative_credits_rejected() {
        let err = evaluate(
            &library(),
            &five_reel_set(),
            &WinModel::standard(),
            -1.0,
            95.0,
        )
        .unwrap_err();
        assert!(matches!(err, RtpError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_no_symbols_is_a_valid_zero_result() {
        let result = evaluate(&[], &five_reel_set(), &WinModel::standard(), 1.0, 95.0).unwrap();
        assert_eq!(result.expected_payout, 0.0);
        assert_eq!(result.theoretical_rtp_percent, 0.0);
        assert_eq!(result.difference_percent, 95.0);
    }

    #[test]
    fn test_fixed_selection_short_circuits_to_zero() {
        let mut reels = five_reel_set();
        reels.selection_method = SelectionMethod::Fixed;
        let result = evaluate(&library(), &reels, &WinModel::standard(), 1.0, 95.0).unwrap();
        assert_eq!(result.expected_payout, 0.0);
        assert_eq!(result.difference_percent, 95.0);
        assert_eq!(result.symbols.len(), 2);
    }

    #[test]
    fn test_zero_weight_reels_pay_nothing() {
        let reels = ReelSet::uniform(5, &[(1, 0.0), (2, 0.0)]);
        let result = evaluate(&library(), &reels, &WinModel::standard(), 1.0, 95.0).unwrap();
        assert_eq!(result.expected_payout, 0.0);
    }

    #[test]
    fn test_single_reel_single_symbol() {
        // One reel, one symbol at weight 1, payout 10 for a 1-of-a-kind:
        // the hit is certain, so RTP is 1000 / creditsPerBet.
        let reels = ReelSet::new(vec![Reel::new(1).with_entry(1, 1.0)]);
        let symbols = vec![Symbol::new(1, "Solo").with_payout(1, 10.0)];
        for credits in [1.0, 4.0, 10.0] {
            let result = evaluate(&symbols, &reels, &WinModel::standard(), credits, 95.0).unwrap();
            assert_relative_eq!(
                result.theoretical_rtp_percent,
                1000.0 / credits,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_five_reel_end_to_end() {
        // Per-reel probability 0.1, product 1e-5, times payout 500
        let result = evaluate(
            &library(),
            &five_reel_set(),
            &WinModel::standard(),
            1.0,
            95.0,
        )
        .unwrap();

        let diamond = &result.symbols[0];
        assert_relative_eq!(diamond.expected_payout, 0.005, max_relative = 1e-12);
        let cherry_expected = 0.9f64.powi(5) * 30.0;
        assert_relative_eq!(
            result.expected_payout,
            0.005 + cherry_expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_diamond_only_rtp_is_half_percent() {
        let symbols = vec![Symbol::new(1, "Diamond").with_payout(5, 500.0)];
        let result = evaluate(
            &symbols,
            &five_reel_set(),
            &WinModel::standard(),
            1.0,
            95.0,
        )
        .unwrap();
        assert_relative_eq!(result.theoretical_rtp_percent, 0.5, max_relative = 1e-12);
        assert_relative_eq!(result.difference_percent, 94.5, max_relative = 1e-12);
    }

    #[test]
    fn test_standard_and_ways_agree_exactly() {
        // Shared arithmetic path; must be bit-identical
        let reels = ReelSet::new(vec![
            Reel::new(1).with_entry(1, 3.0).with_entry(2, 7.0),
            Reel::new(2).with_entry(1, 1.0).with_entry(2, 4.0),
            Reel::new(3).with_entry(1, 2.0).with_entry(2, 2.0),
        ]);
        let symbols = vec![
            Symbol::new(1, "A").with_payout(3, 40.0),
            Symbol::new(2, "B").with_payout(3, 5.0),
        ];

        let standard = evaluate(&symbols, &reels, &WinModel::standard(), 2.0, 96.0).unwrap();
        let ways = evaluate(&symbols, &reels, &WinModel::ways(), 2.0, 96.0).unwrap();

        assert_eq!(
            standard.theoretical_rtp_percent,
            ways.theoretical_rtp_percent
        );
        assert_eq!(standard.expected_payout, ways.expected_payout);
        assert_eq!(standard.symbols, ways.symbols);
    }

    #[test]
    fn test_cluster_model_value() {
        // avg frequency 0.1; sizes 3..=5 with payouts 2/4/8:
        // 0.1^3·6·2 + 0.1^4·5·4 + 0.1^5·4·8
        let symbols = vec![Symbol::new(1, "Gem")
            .with_payout(3, 2.0)
            .with_payout(4, 4.0)
            .with_payout(5, 8.0)];
        let result = evaluate(
            &symbols,
            &five_reel_set(),
            &WinModel::clusters(3, 5),
            1.0,
            95.0,
        )
        .unwrap();

        let expected = 0.1f64.powi(3) * 6.0 * 2.0
            + 0.1f64.powi(4) * 5.0 * 4.0
            + 0.1f64.powi(5) * 4.0 * 8.0;
        assert_relative_eq!(result.expected_payout, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_cluster_sizes_above_cap_never_consulted() {
        // A configured max of 20 truncates at 8; payout entries above 8
        // must not change the result.
        let mut base = Symbol::new(1, "Gem");
        for size in 3..=8 {
            base = base.with_payout(size, f64::from(size));
        }
        let mut oversized = base.clone();
        for size in 9..=20 {
            oversized = oversized.with_payout(size, 1e9);
        }

        let capped = evaluate(
            &[base],
            &five_reel_set(),
            &WinModel::clusters(3, 20),
            1.0,
            95.0,
        )
        .unwrap();
        let decoy = evaluate(
            &[oversized],
            &five_reel_set(),
            &WinModel::clusters(3, 20),
            1.0,
            95.0,
        )
        .unwrap();

        assert_eq!(capped.expected_payout, decoy.expected_payout);
    }

    #[test]
    fn test_cluster_minimum_above_cap_pays_nothing() {
        let symbols = vec![Symbol::new(1, "Gem").with_payout(9, 100.0)];
        // min 9 exceeds the cap of 8, so no sizes are evaluated.
        // (The editors would reject this range; the evaluator stays total.)
        let result = evaluate(
            &symbols,
            &five_reel_set(),
            &WinModel::clusters(9, 12),
            1.0,
            95.0,
        )
        .unwrap();
        assert_eq!(result.expected_payout, 0.0);
    }

    #[test]
    fn test_difference_identity_holds() {
        for target in [0.0, 42.5, 95.0, 250.0] {
            for credits in [0.5, 1.0, 3.0] {
                let result = evaluate(
                    &library(),
                    &five_reel_set(),
                    &WinModel::ways(),
                    credits,
                    target,
                )
                .unwrap();
                assert_relative_eq!(
                    result.difference_percent,
                    target - result.theoretical_rtp_percent,
                    max_relative = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_symbol_absent_from_one_reel_kills_the_line() {
        let reels = ReelSet::new(vec![
            Reel::new(1).with_entry(1, 1.0),
            Reel::new(2).with_entry(2, 1.0), // Symbol 1 missing here
            Reel::new(3).with_entry(1, 1.0),
        ]);
        let symbols = vec![Symbol::new(1, "A").with_payout(3, 100.0)];
        let result = evaluate(&symbols, &reels, &WinModel::standard(), 1.0, 95.0).unwrap();
        assert_eq!(result.expected_payout, 0.0);
    }
}
