//! Index-aligned pairing, the control baseline.
//!
//! The i-th member of group A is paired with the i-th member of group B.
//! Preferences are ignored entirely, so the result is fair on average but
//! of low quality.

use crate::engine::{Algorithm, MatchOutcome};
use crate::ledger::Group;
use crate::types::{MatchError, Side};

/// Pair A and B strictly by declaration position.
///
/// # Errors
///
/// [`MatchError::GroupSizeMismatch`] if |A| != |B|. The ledger is left
/// untouched in that case.
pub fn run(group: &mut Group) -> Result<MatchOutcome, MatchError> {
    let size = group.ensure_balanced()?;
    group.break_all();

    let pairs: Vec<_> = group
        .members(Side::A)
        .iter()
        .copied()
        .zip(group.members(Side::B).iter().copied())
        .collect();

    for (a, b) in pairs {
        group.make_partnership(a, b)?;
    }

    let mut outcome = MatchOutcome::new(Algorithm::Naive);
    outcome.pairs = size;
    outcome.proposals = size;
    outcome.rounds = 1;
    Ok(outcome)
}
