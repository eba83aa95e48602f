//! Partnership ledger operations on a [`Group`].
//!
//! ## Invariant
//!
//! The partner relation is symmetric with at most one partner each:
//!
//! ```text
//! p.partner == Some(q)  <=>  q.partner == Some(p)
//! ```
//!
//! Every operation here writes both halves of a link in the same call, so
//! no caller can observe a one-sided link.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::ledger::Group;
use crate::types::{MatchError, ParticipantKey, Side};

impl Group {
    /// Check if a participant currently has a partner
    ///
    /// # Panics
    ///
    /// Panics if `key` does not belong to this group
    #[inline]
    pub fn has_partner(&self, key: ParticipantKey) -> bool {
        self.participants[key].has_partner()
    }

    /// Current partner's key
    ///
    /// # Panics
    ///
    /// Panics if `key` does not belong to this group
    #[inline]
    pub fn partner_of(&self, key: ParticipantKey) -> Option<ParticipantKey> {
        self.participants[key].partner()
    }

    /// Clear `key`'s partnership on both sides. No-op if unpartnered.
    ///
    /// # Panics
    ///
    /// Panics if `key` does not belong to this group
    pub fn break_partnership(&mut self, key: ParticipantKey) {
        if let Some(partner) = self.participants[key].partner.take() {
            self.participants[partner].partner = None;
        }
    }

    /// Link `p` and `q`, first breaking any partnership either already has.
    ///
    /// This does not judge whether the pairing is good; the engines decide.
    ///
    /// # Errors
    ///
    /// - [`MatchError::UnknownParticipant`] if either key is not from this group
    /// - [`MatchError::SelfPartnership`] if `p == q`
    /// - [`MatchError::SameSide`] if both are in the same group
    ///
    /// Nothing is changed when an error is returned.
    pub fn make_partnership(
        &mut self,
        p: ParticipantKey,
        q: ParticipantKey,
    ) -> Result<(), MatchError> {
        let side_p = self.try_participant(p)?.side();
        let side_q = self.try_participant(q)?.side();
        if p == q {
            return Err(MatchError::SelfPartnership { name: self.name(p).to_string() });
        }
        if side_p == side_q {
            return Err(MatchError::SameSide {
                first: self.name(p).to_string(),
                second: self.name(q).to_string(),
            });
        }

        self.break_partnership(p);
        self.break_partnership(q);

        self.participants[p].partner = Some(q);
        self.participants[q].partner = Some(p);
        Ok(())
    }

    /// Clear every partnership in both groups
    pub fn break_all(&mut self) {
        for key in self.all_keys() {
            self.break_partnership(key);
        }
    }

    /// Current (A, B) pairs in group A declaration order
    pub fn partnerships(&self) -> Vec<(ParticipantKey, ParticipantKey)> {
        self.members(Side::A)
            .iter()
            .filter_map(|&a| self.partner_of(a).map(|b| (a, b)))
            .collect()
    }

    /// Unpartnered keys of one side, in declaration order
    pub fn unpartnered(&self, side: Side) -> Vec<ParticipantKey> {
        self.members(side)
            .iter()
            .copied()
            .filter(|&key| !self.has_partner(key))
            .collect()
    }

    /// Render a participant as `Name (Partner)` or `Name (no-one)`
    pub fn display(&self, key: ParticipantKey) -> PartnerDisplay<'_> {
        PartnerDisplay { group: self, key }
    }

    // ========================================================================
    // Matching Digest
    // ========================================================================

    /// SHA-256 digest of the current matching.
    ///
    /// Covers every group A member in declaration order with its partner's
    /// name (empty if unpartnered). Identical pairings give identical digests.
    pub fn matching_digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for &a in self.members(Side::A) {
            let partner = self.partner_of(a).map(|b| self.name(b)).unwrap_or("");
            for name in [self.name(a), partner] {
                hasher.update((name.len() as u64).to_le_bytes());
                hasher.update(name.as_bytes());
            }
        }

        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());
        digest
    }

    /// Hex form of [`Group::matching_digest`]
    pub fn matching_digest_hex(&self) -> String {
        hex::encode(self.matching_digest())
    }
}

/// Display adapter returned by [`Group::display`]
#[derive(Debug, Clone, Copy)]
pub struct PartnerDisplay<'a> {
    group: &'a Group,
    key: ParticipantKey,
}

impl fmt::Display for PartnerDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let partner = match self.group.partner_of(self.key) {
            Some(partner) => self.group.name(partner),
            None => "no-one",
        };
        write!(f, "{} ({})", self.group.name(self.key), partner)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Jason/Joy/Jeremiah/Jessica vs Rachael/Ryan/Riley/Richard
    fn worked_example() -> Group {
        let mut group = Group::new(
            &["Jason", "Joy", "Jeremiah", "Jessica"],
            &["Rachael", "Ryan", "Riley", "Richard"],
        )
        .unwrap();
        group
            .set_all_preferences(vec![
                ("Jason", vec!["Rachael", "Ryan", "Riley", "Richard"]),
                ("Joy", vec!["Rachael", "Ryan", "Richard", "Riley"]),
                ("Ryan", vec!["Joy", "Jeremiah", "Jason", "Jessica"]),
                ("Riley", vec!["Jason", "Joy", "Jeremiah", "Jessica"]),
            ])
            .unwrap();
        group
    }

    fn keys(group: &Group, names: [&str; 4]) -> [ParticipantKey; 4] {
        names.map(|name| group.key_of(name).unwrap())
    }

    /// p.partner.partner == p for every partnered p
    fn assert_symmetric(group: &Group) {
        for key in group.all_keys() {
            if let Some(partner) = group.partner_of(key) {
                assert_eq!(group.partner_of(partner), Some(key));
            }
        }
    }

    #[test]
    fn test_worked_example() {
        let mut group = worked_example();
        let [jason, joy, ryan, riley] = keys(&group, ["Jason", "Joy", "Ryan", "Riley"]);

        group.make_partnership(jason, ryan).unwrap();
        assert_eq!(group.display(jason).to_string(), "Jason (Ryan)");
        assert_eq!(group.display(riley).to_string(), "Riley (no-one)");
        assert!(group.has_partner(ryan));
        assert!(!group.has_partner(joy));
        assert_eq!(group.rating_of(ryan, "Jessica").unwrap(), 3);
        assert_eq!(group.rating_of_current_partner(jason).unwrap(), 1);
        assert_eq!(group.rating_of_current_partner(joy).unwrap(), -1);

        group.break_partnership(jason);
        assert!(!group.has_partner(jason));
        assert!(!group.has_partner(ryan));

        group.make_partnership(jason, riley).unwrap();
        assert_eq!(
            format!("{} {}", group.display(jason), group.display(riley)),
            "Jason (Riley) Riley (Jason)"
        );

        // Riley dumps Jason for Joy
        group.make_partnership(riley, joy).unwrap();
        assert!(!group.has_partner(jason));

        // Riley goes back to Jason
        group.make_partnership(riley, jason).unwrap();
        assert!(!group.has_partner(joy));
        assert_eq!(group.rating_of_current_partner(jason).unwrap(), 2);
        assert_symmetric(&group);
    }

    #[test]
    fn test_break_is_idempotent() {
        let mut group = worked_example();
        let [jason, _, ryan, _] = keys(&group, ["Jason", "Joy", "Ryan", "Riley"]);

        group.break_partnership(jason);
        group.break_partnership(jason);
        assert!(!group.has_partner(jason));

        group.make_partnership(jason, ryan).unwrap();
        group.break_partnership(ryan);
        group.break_partnership(ryan);
        assert!(!group.has_partner(jason));
        assert!(!group.has_partner(ryan));
    }

    #[test]
    fn test_repartnering_touches_four() {
        let mut group = worked_example();
        let [jason, joy, ryan, riley] = keys(&group, ["Jason", "Joy", "Ryan", "Riley"]);

        group.make_partnership(jason, ryan).unwrap();
        group.make_partnership(joy, riley).unwrap();

        group.make_partnership(jason, riley).unwrap();

        assert_eq!(group.partner_of(jason), Some(riley));
        assert_eq!(group.partner_of(riley), Some(jason));
        assert!(!group.has_partner(ryan));
        assert!(!group.has_partner(joy));
        assert_symmetric(&group);

        // Nobody else was touched
        let jeremiah = group.key_of("Jeremiah").unwrap();
        assert!(!group.has_partner(jeremiah));
        assert_eq!(group.partnerships(), vec![(jason, riley)]);
    }

    #[test]
    fn test_make_partnership_rejects_misuse() {
        let mut group = worked_example();
        let [jason, joy, ryan, _] = keys(&group, ["Jason", "Joy", "Ryan", "Riley"]);
        group.make_partnership(jason, ryan).unwrap();

        assert_eq!(
            group.make_partnership(jason, jason),
            Err(MatchError::SelfPartnership { name: "Jason".into() })
        );
        assert!(matches!(
            group.make_partnership(joy, jason),
            Err(MatchError::SameSide { .. })
        ));

        assert_eq!(
            group.make_partnership(jason, 999),
            Err(MatchError::unknown("#999"))
        );
        assert_eq!(
            group.make_partnership(999, ryan),
            Err(MatchError::unknown("#999"))
        );

        // Existing link survives a rejected call
        assert_eq!(group.partner_of(jason), Some(ryan));
        assert_eq!(group.partner_of(ryan), Some(jason));
    }

    #[test]
    fn test_break_all() {
        let mut group = worked_example();
        let [jason, joy, ryan, riley] = keys(&group, ["Jason", "Joy", "Ryan", "Riley"]);
        group.make_partnership(jason, ryan).unwrap();
        group.make_partnership(joy, riley).unwrap();
        assert_eq!(group.partnerships().len(), 2);

        group.break_all();

        assert!(group.partnerships().is_empty());
        assert_eq!(group.unpartnered(Side::A).len(), 4);
        assert_eq!(group.unpartnered(Side::B).len(), 4);
    }

    #[test]
    fn test_matching_digest() {
        let mut group = worked_example();
        let [jason, joy, ryan, riley] = keys(&group, ["Jason", "Joy", "Ryan", "Riley"]);
        let empty = group.matching_digest();

        group.make_partnership(jason, ryan).unwrap();
        group.make_partnership(joy, riley).unwrap();
        let first = group.matching_digest();
        assert_ne!(first, empty);

        group.break_all();
        assert_eq!(group.matching_digest(), empty);

        group.make_partnership(joy, riley).unwrap();
        group.make_partnership(jason, ryan).unwrap();
        assert_eq!(group.matching_digest(), first);

        group.make_partnership(jason, riley).unwrap();
        assert_ne!(group.matching_digest(), first);
        assert_eq!(group.matching_digest_hex().len(), 64);
    }
}
