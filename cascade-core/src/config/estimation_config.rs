//! Estimation configuration: interaction weights, friendship orientation,
//! parallelism threshold.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Weights applied to per-kind interaction counts when folding them into a
/// single strength. Defaults match the published method: 1.0 each.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct InteractionWeights {
    /// Weight for quotes. Default: 1.0.
    pub quote: Option<f64>,
    /// Weight for replies. Default: 1.0.
    pub reply: Option<f64>,
    /// Weight for retweets. Default: 1.0.
    pub retweet: Option<f64>,
}

impl InteractionWeights {
    pub fn effective_quote(&self) -> f64 {
        self.quote.unwrap_or(1.0)
    }

    pub fn effective_reply(&self) -> f64 {
        self.reply.unwrap_or(1.0)
    }

    pub fn effective_retweet(&self) -> f64 {
        self.retweet.unwrap_or(1.0)
    }

    /// Reject negative or non-finite weights.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("quote", self.effective_quote()),
            ("reply", self.effective_reply()),
            ("retweet", self.effective_retweet()),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeWeight { name, value });
            }
        }
        Ok(())
    }
}

/// Which direction of a follow edge links a retweeter to a candidate parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FriendshipOrientation {
    /// The retweeter follows the candidate (the classic "friends" list).
    #[default]
    Following,
    /// The candidate follows the retweeter.
    FollowedBy,
    /// Either direction counts.
    Mutual,
}

impl FriendshipOrientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Following => "following",
            Self::FollowedBy => "followed_by",
            Self::Mutual => "mutual",
        }
    }
}

/// Configuration for one estimation run.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EstimationConfig {
    /// Interaction weights for count folding.
    pub weights: InteractionWeights,
    /// Friendship edge orientation. Default: `following`.
    pub orientation: FriendshipOrientation,
    /// Cascade size at which resolution switches to the rayon pool.
    /// Default: 4096.
    pub parallel_threshold: Option<usize>,
}

impl EstimationConfig {
    /// Returns the effective parallel threshold, defaulting to 4096.
    pub fn effective_parallel_threshold(&self) -> usize {
        self.parallel_threshold.unwrap_or(4096)
    }

    /// Parse from a TOML string and validate.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()?;
        if self.parallel_threshold == Some(0) {
            return Err(ConfigError::ZeroParallelThreshold);
        }
        Ok(())
    }
}
