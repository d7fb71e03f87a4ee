//! Evaluation errors

/// Errors an evaluation call can return
///
/// Precondition failures surface as typed errors; they are never logged and
/// swallowed. Missing payout entries and empty symbol sets are not errors,
/// they evaluate to zero payout.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RtpError {
    /// Configuration the evaluator has no defined answer for
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A zero credits-per-bet cannot be divided through
    #[error("credits per bet is zero")]
    DivisionByZero,
}
