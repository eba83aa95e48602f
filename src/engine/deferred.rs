//! Deferred acceptance (Gale-Shapley) with group A proposing.
//!
//! ## Protocol
//!
//! 1. Every proposer gets a run-scoped copy of its preference list. The
//!    stored preferences are never consumed, so ratings stay valid.
//! 2. Each unpartnered proposer pops its most preferred remaining
//!    candidate (the END of the list, since index 0 is least preferred).
//! 3. An unpartnered recipient accepts. A partnered recipient accepts only
//!    if it rates the proposer strictly higher than its current partner,
//!    dropping that partner. Otherwise the proposal is rejected and the
//!    candidate is gone from the proposer's list for the rest of the run.
//! 4. Rounds repeat over the unpartnered proposers, in group A declaration
//!    order, until everyone in A is partnered.
//!
//! ## Termination
//!
//! Every proposal either pairs the proposer or removes one candidate from
//! its list for good, so at most |A| * |B| proposals happen. With |A| == |B|
//! and complete preferences nobody runs out of candidates; if someone does,
//! the run fails with [`MatchError::ProposalsExhausted`] instead of looping.
//!
//! The result is stable and proposer-optimal: A gets the best partner it
//! can have in any stable matching, B the worst.

use std::collections::HashMap;

use crate::engine::{Algorithm, MatchOutcome};
use crate::ledger::Group;
use crate::types::{MatchError, ParticipantKey, Side};

/// Result of a single proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proposal {
    /// Recipient took the proposer, possibly dropping a previous partner
    Accepted {
        recipient: ParticipantKey,
        displaced: Option<ParticipantKey>,
    },
    /// Recipient kept its current partner
    Rejected { recipient: ParticipantKey },
}

impl Proposal {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Proposal::Accepted { .. })
    }
}

/// Fresh "still to propose to" list for a proposer: a copy of its
/// preferences, consumed from the end.
///
/// # Errors
///
/// [`MatchError::UnknownParticipant`] if `proposer` is not from `group`
pub fn candidates(group: &Group, proposer: ParticipantKey) -> Result<Vec<String>, MatchError> {
    Ok(group.try_participant(proposer)?.preferences().names().to_vec())
}

/// Let `proposer` propose to its top remaining candidate.
///
/// The candidate is popped from `to_propose` whatever the answer.
///
/// # Errors
///
/// - [`MatchError::UnknownParticipant`] if `proposer` is not from `group`
/// - [`MatchError::ProposalsExhausted`] if `to_propose` is empty
/// - [`MatchError::UnknownParticipant`] / [`MatchError::NameNotRanked`] if
///   the preference configuration is malformed
pub fn propose(
    group: &mut Group,
    proposer: ParticipantKey,
    to_propose: &mut Vec<String>,
) -> Result<Proposal, MatchError> {
    let proposer_name = group.try_participant(proposer)?.name().to_string();
    let name = to_propose.pop().ok_or_else(|| MatchError::ProposalsExhausted {
        participant: proposer_name.clone(),
    })?;
    let recipient = group.key_of(&name)?;

    let displaced = match group.partner_of(recipient) {
        None => None,
        Some(current) => {
            let current_rating = group.rating_of_current_partner(recipient)?;
            let offered = group.rating_of(recipient, &proposer_name)? as isize;
            if offered <= current_rating {
                tracing::trace!(proposer = %proposer_name, recipient = %name, "rejected");
                return Ok(Proposal::Rejected { recipient });
            }
            Some(current)
        }
    };

    group.make_partnership(proposer, recipient)?;
    tracing::trace!(
        proposer = %proposer_name,
        recipient = %name,
        displaced = displaced.map(|key| group.name(key)),
        "accepted"
    );
    Ok(Proposal::Accepted { recipient, displaced })
}

/// Run deferred acceptance over the whole group.
///
/// # Errors
///
/// [`MatchError::GroupSizeMismatch`] if |A| != |B| (checked before the
/// ledger is touched), otherwise any error from [`propose`].
pub fn run(group: &mut Group) -> Result<MatchOutcome, MatchError> {
    let size = group.ensure_balanced()?;
    group.break_all();

    // Run-scoped, dropped on return
    let snapshot: &Group = group;
    let mut to_propose: HashMap<ParticipantKey, Vec<String>> = snapshot
        .members(Side::A)
        .iter()
        .map(|&key| Ok((key, candidates(snapshot, key)?)))
        .collect::<Result<_, MatchError>>()?;

    let mut outcome = MatchOutcome::new(Algorithm::GaleShapley);
    loop {
        let waiting = group.unpartnered(Side::A);
        if waiting.is_empty() {
            break;
        }
        outcome.rounds += 1;

        for proposer in waiting {
            let remaining = to_propose.entry(proposer).or_default();
            let proposal = propose(group, proposer, remaining)?;
            outcome.proposals += 1;
            if !proposal.is_accepted() {
                outcome.rejections += 1;
            }
        }
    }

    outcome.pairs = size;
    Ok(outcome)
}

// ============================================================================
// Unit Tests
// ============================================================================
