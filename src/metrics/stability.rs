//! Blocking-pair audit.
//!
//! A pair (a, b) not matched to each other blocks the matching when both
//! strictly prefer each other over their current partners. Being
//! unpartnered counts as rating -1, so any real partner is preferred.
//! A matching with no blocking pair is stable.

use crate::ledger::Group;
use crate::types::{MatchError, ParticipantKey, Side};

/// Every blocking (A, B) pair, in declaration order. O(|A| * |B|).
pub fn blocking_pairs(group: &Group) -> Result<Vec<(ParticipantKey, ParticipantKey)>, MatchError> {
    let mut blocking = Vec::new();

    for &a in group.members(Side::A) {
        let a_current = group.rating_of_current_partner(a)?;

        for &b in group.members(Side::B) {
            if group.partner_of(a) == Some(b) {
                continue;
            }
            if group.rating_of(a, group.name(b))? as isize <= a_current {
                continue;
            }
            let b_current = group.rating_of_current_partner(b)?;
            if group.rating_of(b, group.name(a))? as isize > b_current {
                blocking.push((a, b));
            }
        }
    }

    Ok(blocking)
}

/// Check that no blocking pair exists
pub fn is_stable(group: &Group) -> Result<bool, MatchError> {
    Ok(blocking_pairs(group)?.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Everyone on both sides prefers the second name of the other side
    fn group() -> Group {
        Group::new(&["Anna", "Avery"], &["Bob", "Biyu"]).unwrap()
    }

    fn pair(group: &mut Group, a: &str, b: &str) {
        let a = group.key_of(a).unwrap();
        let b = group.key_of(b).unwrap();
        group.make_partnership(a, b).unwrap();
    }

    #[test]
    fn test_blocking_pair_found() {
        let mut group = group();
        // Avery and Biyu are each other's top choice but not matched
        pair(&mut group, "Anna", "Biyu");
        pair(&mut group, "Avery", "Bob");

        let avery = group.key_of("Avery").unwrap();
        let biyu = group.key_of("Biyu").unwrap();
        assert_eq!(blocking_pairs(&group).unwrap(), vec![(avery, biyu)]);
        assert!(!is_stable(&group).unwrap());
    }

    #[test]
    fn test_stable_matching() {
        let mut group = group();
        pair(&mut group, "Avery", "Biyu");
        pair(&mut group, "Anna", "Bob");
        assert!(is_stable(&group).unwrap());
    }

    #[test]
    fn test_empty_matching_is_unstable() {
        let group = group();
        // Every cross pair blocks when nobody is partnered
        assert_eq!(blocking_pairs(&group).unwrap().len(), 4);
    }
}
