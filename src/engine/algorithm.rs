//! Engine selection and run outcome.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::{deferred, naive};
use crate::ledger::Group;
use crate::types::MatchError;

/// The available matching engines.
///
/// A closed set: selecting by string goes through [`FromStr`], which
/// rejects unknown selectors instead of silently doing nothing.
///
/// ## Example
///
/// ```
/// use stable_match::engine::Algorithm;
///
/// let algorithm: Algorithm = "gale-shapley".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::GaleShapley);
/// assert!("gale-shapely-typo".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Pair the i-th member of A with the i-th member of B
    Naive,
    /// Deferred acceptance with group A proposing
    #[default]
    GaleShapley,
}

impl Algorithm {
    /// Every engine, in a stable order
    pub const ALL: [Algorithm; 2] = [Algorithm::Naive, Algorithm::GaleShapley];

    /// Selector string understood by [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::GaleShapley => "gale-shapley",
        }
    }

    /// Run this engine against `group`, replacing any existing pairing.
    ///
    /// # Errors
    ///
    /// [`MatchError::GroupSizeMismatch`] if |A| != |B|, or any lookup error
    /// raised by a malformed preference configuration.
    pub fn run(self, group: &mut Group) -> Result<MatchOutcome, MatchError> {
        let outcome = match self {
            Algorithm::Naive => naive::run(group)?,
            Algorithm::GaleShapley => deferred::run(group)?,
        };

        tracing::debug!(
            algorithm = %self,
            pairs = outcome.pairs,
            proposals = outcome.proposals,
            rejections = outcome.rejections,
            rounds = outcome.rounds,
            "matching complete"
        );
        Ok(outcome)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(Algorithm::Naive),
            "gale-shapley" | "gale_shapley" | "gs" => Ok(Algorithm::GaleShapley),
            _ => Err(MatchError::UnknownAlgorithm { selector: s.to_string() }),
        }
    }
}

/// Counters from one matching run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Engine that produced the matching
    pub algorithm: Algorithm,

    /// Partnerships in the final matching
    pub pairs: usize,

    /// Proposals made (naive: one per pair)
    pub proposals: usize,

    /// Proposals turned down
    pub rejections: usize,

    /// Passes over the unpartnered proposers
    pub rounds: usize,
}

impl MatchOutcome {
    pub(crate) fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            pairs: 0,
            proposals: 0,
            rejections: 0,
            rounds: 0,
        }
    }

    /// Fraction of proposals accepted, None if none were made
    pub fn acceptance_rate(&self) -> Option<f64> {
        if self.proposals == 0 {
            return None;
        }
        Some((self.proposals - self.rejections) as f64 / self.proposals as f64)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
