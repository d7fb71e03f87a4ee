//! Win model — how wins are evaluated

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::payline::{classic_5x3_paylines, EvaluationDirection, Payline};

/// Minimum cluster size any cluster game may configure
pub const MIN_CLUSTER_FLOOR: u32 = 3;

/// Win evaluation model
///
/// Three mutually exclusive models with structurally different parameters,
/// dispatched by pattern match in the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WinModel {
    /// Fixed payline patterns
    Standard {
        #[serde(default)]
        paylines: Vec<Payline>,
        #[serde(default, rename = "evaluationType")]
        evaluation_type: EvaluationDirection,
    },

    /// Ways to win — adjacent-reel matches regardless of row
    Ways,

    /// Cluster pays — adjacent groups of identical symbols
    Clusters {
        #[serde(rename = "minClusterSize")]
        min_cluster_size: u32,
        #[serde(rename = "maxClusterSize")]
        max_cluster_size: u32,
    },
}

impl WinModel {
    /// Standard model with the stock 5×3 lines
    pub fn standard() -> Self {
        Self::Standard {
            paylines: classic_5x3_paylines(),
            evaluation_type: EvaluationDirection::LeftToRight,
        }
    }

    /// Ways model
    pub fn ways() -> Self {
        Self::Ways
    }

    /// Cluster model with the given size range
    pub fn clusters(min_cluster_size: u32, max_cluster_size: u32) -> Self {
        Self::Clusters {
            min_cluster_size,
            max_cluster_size,
        }
    }

    pub fn is_standard(&self) -> bool {
        matches!(self, Self::Standard { .. })
    }

    pub fn is_ways(&self) -> bool {
        matches!(self, Self::Ways)
    }

    pub fn is_clusters(&self) -> bool {
        matches!(self, Self::Clusters { .. })
    }

    /// Validate model-specific parameters
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            Self::Standard { paylines, .. } => {
                for line in paylines {
                    line.validate()?;
                }
                Ok(())
            }
            Self::Ways => Ok(()),
            Self::Clusters {
                min_cluster_size,
                max_cluster_size,
            } => {
                if *min_cluster_size < MIN_CLUSTER_FLOOR {
                    return Err(ModelError::InvalidWinModel(format!(
                        "minimum cluster size must be at least {MIN_CLUSTER_FLOOR}, got {min_cluster_size}"
                    )));
                }
                if max_cluster_size <= min_cluster_size {
                    return Err(ModelError::InvalidWinModel(format!(
                        "maximum cluster size {max_cluster_size} must exceed minimum {min_cluster_size}"
                    )));
                }
                Ok(())
            }
        }
    }
}

impl Default for WinModel {
    fn default() -> Self {
        Self::standard()
    }
}
