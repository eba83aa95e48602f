//! Error types for matching, ledger and metric operations.
//!
//! Every failure here is a programming or configuration error. Nothing is
//! transient, so nothing is retried: callers get the error immediately.

use thiserror::Error;

/// Errors raised by the group, the matching engines and the metrics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A name was looked up that belongs to no participant
    #[error("no participant named `{name}`")]
    UnknownParticipant { name: String },

    /// A rating was requested for a name absent from a preference list
    #[error("`{participant}` has no rating for `{name}`")]
    NameNotRanked { participant: String, name: String },

    /// Names must be unique across both groups
    #[error("duplicate participant name `{name}`")]
    DuplicateName { name: String },

    /// Both engines require |A| == |B|
    #[error("group sizes differ: |A| = {a}, |B| = {b}")]
    GroupSizeMismatch { a: usize, b: usize },

    /// Preference list is not a permutation of the opposite group
    #[error("invalid preferences for `{participant}`: {reason}")]
    InvalidPreferences { participant: String, reason: String },

    /// A participant cannot partner with itself
    #[error("`{name}` cannot partner with itself")]
    SelfPartnership { name: String },

    /// Partners must come from opposite groups
    #[error("`{first}` and `{second}` are in the same group")]
    SameSide { first: String, second: String },

    /// A proposer ran out of candidates while still unpartnered
    #[error("`{participant}` exhausted every candidate without a partner")]
    ProposalsExhausted { participant: String },

    /// A quality metric has no defined scale for the given participants
    #[error("metric undefined: {reason}")]
    MetricUndefined { reason: String },

    /// Algorithm selector did not name a known engine
    #[error("unknown matching algorithm `{selector}`")]
    UnknownAlgorithm { selector: String },
}

impl MatchError {
    /// Shorthand for [`MatchError::UnknownParticipant`]
    pub(crate) fn unknown(name: impl Into<String>) -> Self {
        MatchError::UnknownParticipant { name: name.into() }
    }

    /// Shorthand for [`MatchError::MetricUndefined`]
    pub(crate) fn metric(reason: impl Into<String>) -> Self {
        MatchError::MetricUndefined { reason: reason.into() }
    }
}
