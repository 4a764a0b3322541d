//! Engine configuration.
//!
//! # Responsibility
//! - Hold the tunables callers may choose: link matching policy and the
//!   segment cache bound.
//! - Decode configuration from JSON handed over by the host app.
//!
//! # Invariants
//! - Every field has a default; an empty JSON object is a valid config.
//! - Unknown fields are rejected so typos are not silently ignored.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_MAX_CACHED_NOTES: usize = 512;

/// How a bare wiki-link title is matched against note titles.
///
/// All policies compare case-insensitively and return the first match in
/// collection order within the winning tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkMatchPolicy {
    /// Exact title match first, then substring match as a fallback.
    #[default]
    ExactThenSubstring,
    /// First note whose title equals or contains the link title.
    FirstMatch,
    /// Exact title match only.
    Exact,
}

impl LinkMatchPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExactThenSubstring => "exact_then_substring",
            Self::FirstMatch => "first_match",
            Self::Exact => "exact",
        }
    }
}

/// Content engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub link_match: LinkMatchPolicy,
    /// Upper bound for [`crate::SegmentCache`] entries.
    pub max_cached_notes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            link_match: LinkMatchPolicy::default(),
            max_cached_notes: DEFAULT_MAX_CACHED_NOTES,
        }
    }
}

impl EngineConfig {
    /// Decodes configuration from a JSON object.
    ///
    /// # Errors
    /// - Returns `InvalidJson` for malformed JSON, unknown fields or values.
    /// - Returns `ZeroCacheCapacity` when `max_cached_notes` is `0`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::InvalidJson(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cached_notes == 0 {
            return Err(ConfigError::ZeroCacheCapacity);
        }
        Ok(())
    }
}

/// Configuration decoding errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidJson(String),
    ZeroCacheCapacity,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson(message) => write!(f, "invalid engine config: {message}"),
            Self::ZeroCacheCapacity => write!(f, "max_cached_notes must be greater than 0"),
        }
    }
}

impl Error for ConfigError {}
