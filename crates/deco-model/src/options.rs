//! Configuration options for attribute normalization.

use serde::{Deserialize, Serialize};

/// Mode for matching raw attribute values against a vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchingMode {
    /// Exact matches only (after case, accent, and whitespace folding).
    Strict,
    /// Exact matches, then substring containment in either direction.
    #[default]
    Lenient,
}

/// Options for normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationOptions {
    /// Matching strictness (Strict vs Lenient).
    pub matching_mode: MatchingMode,

    /// Treat a blank decoration base as the literal `N/A` before matching.
    /// Default: true.
    pub blank_deco_base_as_na: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            matching_mode: MatchingMode::Lenient,
            blank_deco_base_as_na: true,
        }
    }
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that skip the containment pass.
    pub fn strict() -> Self {
        Self {
            matching_mode: MatchingMode::Strict,
            ..Self::default()
        }
    }

    pub fn with_matching_mode(mut self, mode: MatchingMode) -> Self {
        self.matching_mode = mode;
        self
    }

    pub fn with_blank_deco_base_as_na(mut self, enable: bool) -> Self {
        self.blank_deco_base_as_na = enable;
        self
    }
}
