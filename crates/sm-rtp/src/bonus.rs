//! Bonus feature RTP contributions
//!
//! Bonus and jackpot sub-calculations are simple weighted averages: each
//! feature contributes `trigger chance × effect payout`, and the total game
//! RTP is the base-game figure plus every contribution.

use sm_model::{BonusFeature, BonusKind};

use crate::report::RtpResult;

/// Scale from a bonus effect's nominal value to bet units
pub const EFFECT_PAYOUT_FACTOR: f64 = 10.0;

/// Errors for misconfigured bonus features
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BonusError {
    #[error("bonus '{0}' has an invalid trigger chance")]
    InvalidTrigger(String),

    #[error("bonus '{0}' needs at least one jackpot tier")]
    MissingJackpots(String),
}

/// RTP contribution of one bonus feature, as a percentage of the bet
pub fn bonus_rtp_percent(feature: &BonusFeature) -> Result<f64, BonusError> {
    if !feature.trigger_percent.is_finite() || feature.trigger_percent < 0.0 {
        return Err(BonusError::InvalidTrigger(feature.name.clone()));
    }

    let effect_payout = match &feature.kind {
        BonusKind::FreeSpins { spins } => f64::from(*spins) * EFFECT_PAYOUT_FACTOR,
        BonusKind::HoldAndSpin | BonusKind::JackpotWheel => {
            let avg = feature
                .average_jackpot_payout()
                .ok_or_else(|| BonusError::MissingJackpots(feature.name.clone()))?;
            avg * EFFECT_PAYOUT_FACTOR
        }
        BonusKind::SuperBonus => EFFECT_PAYOUT_FACTOR * 2.0,
    };

    Ok(feature.trigger_percent / 100.0 * effect_payout)
}

/// Base-game RTP plus every bonus contribution
pub fn combined_rtp_percent(
    base: &RtpResult,
    features: &[BonusFeature],
) -> Result<f64, BonusError> {
    let mut total = base.theoretical_rtp_percent;
    for feature in features {
        total += bonus_rtp_percent(feature)?;
    }
    Ok(total)
}
