//! Configuration validation errors

/// Validation errors for configuration entities
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    #[error("Invalid reel: {0}")]
    InvalidReel(String),

    #[error("Invalid win model: {0}")]
    InvalidWinModel(String),

    #[error("Invalid bet settings: {0}")]
    InvalidBet(String),
}
