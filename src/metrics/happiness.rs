//! Happiness scores and the fairness ratio.
//!
//! ## Normalization
//!
//! Raw happiness is the rating of the current partner (-1 if none). Group
//! averages divide the summed ratings by `count * max_rating`, where
//! `max_rating = opposite group size - 1`:
//!
//! ```text
//! 1.0   everyone got their single top choice
//! 0.5   expected value for a random pairing
//! < 0   only reachable with unpartnered participants
//! ```

use serde::Serialize;

use crate::ledger::Group;
use crate::types::{MatchError, ParticipantKey, Side};

/// Rating of `key`'s current partner, -1 if unpartnered
#[inline]
pub fn happiness(group: &Group, key: ParticipantKey) -> Result<isize, MatchError> {
    group.rating_of_current_partner(key)
}

/// Normalized mean happiness over `keys`.
///
/// # Errors
///
/// [`MatchError::MetricUndefined`] if `keys` is empty, a key is not in the
/// group, preference lengths differ from the opposite group size (the scale
/// would be skewed), or the maximum rating is 0.
pub fn average_happiness(group: &Group, keys: &[ParticipantKey]) -> Result<f64, MatchError> {
    let first = *keys
        .first()
        .ok_or_else(|| MatchError::metric("no participants to average"))?;
    let scale = group
        .participant(first)
        .ok_or_else(|| MatchError::metric("participant key not in group"))?
        .preferences();
    let options = scale.len();
    let max_rating = match scale.max_rating() {
        Some(max) if max > 0 => max,
        _ => return Err(MatchError::metric("fewer than two options leave no rating scale")),
    };

    let mut total: isize = 0;
    for &key in keys {
        let participant = group
            .participant(key)
            .ok_or_else(|| MatchError::metric("participant key not in group"))?;
        let ranked = participant.preferences().len();
        let opposite = group.size(participant.side().opposite());
        if ranked != options || ranked != opposite {
            return Err(MatchError::metric(format!(
                "`{}` ranks {} names but the scale needs {} (opposite group has {})",
                participant.name(),
                ranked,
                options,
                opposite
            )));
        }
        total += happiness(group, key)?;
    }

    Ok(total as f64 / (keys.len() * max_rating) as f64)
}

/// Normalized mean happiness of one side
pub fn side_happiness(group: &Group, side: Side) -> Result<f64, MatchError> {
    average_happiness(group, group.members(side))
}

/// Mean happiness of A over mean happiness of B.
///
/// 1.0 is perfectly fair, above 1 favors A. Plain float division, so a
/// B average of 0 yields infinity (or NaN if A is also 0).
pub fn fairness_ratio(group: &Group) -> Result<f64, MatchError> {
    Ok(side_happiness(group, Side::A)? / side_happiness(group, Side::B)?)
}

/// Snapshot of matching quality for a whole group
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualitySummary {
    /// Average happiness of group A
    pub happiness_a: f64,

    /// Average happiness of group B
    pub happiness_b: f64,

    /// Average happiness over both groups
    pub happiness_overall: f64,

    /// `happiness_a / happiness_b`
    pub fairness_ratio: f64,

    /// Participants without a partner, both sides
    pub unpartnered: usize,
}

impl QualitySummary {
    /// Measure the current matching
    pub fn measure(group: &Group) -> Result<Self, MatchError> {
        let happiness_a = side_happiness(group, Side::A)?;
        let happiness_b = side_happiness(group, Side::B)?;
        let happiness_overall = average_happiness(group, &group.all_keys())?;
        let unpartnered =
            group.unpartnered(Side::A).len() + group.unpartnered(Side::B).len();

        Ok(Self {
            happiness_a,
            happiness_b,
            happiness_overall,
            fairness_ratio: happiness_a / happiness_b,
            unpartnered,
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
