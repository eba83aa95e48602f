//! The matchmaking context: two disjoint groups in one participant arena.
//!
//! ## Architecture
//!
//! - **Slab**: every participant of both groups, addressed by `usize` key
//! - **Vec per side**: declaration order of group A and group B keys
//! - **HashMap**: name -> slab key for O(1) lookup by name
//!
//! Partner links are slab keys stored on the participants themselves, see
//! the ledger operations in [`partnership`](super::partnership).
//!
//! ## Example
//!
//! ```
//! use stable_match::ledger::Group;
//!
//! let mut group = Group::new(&["Anna", "Avery"], &["Bailey", "Brian"]).unwrap();
//! group.set_preferences("Anna", vec!["Bailey", "Brian"]).unwrap();
//!
//! let anna = group.key_of("Anna").unwrap();
//! assert_eq!(group.rating_of(anna, "Brian").unwrap(), 1);
//! assert_eq!(group.rating_of_current_partner(anna).unwrap(), -1);
//! ```

use std::collections::HashMap;

use rand::Rng;
use slab::Slab;

use crate::types::{
    MatchError, Participant, ParticipantKey, PreferenceList, Side, NO_PARTNER_RATING,
};

/// Two disjoint groups of participants and their pairing state.
#[derive(Debug, Clone, Default)]
pub struct Group {
    /// Participant storage for both sides
    pub(super) participants: Slab<Participant>,

    /// Group A keys in declaration order
    group_a: Vec<ParticipantKey>,

    /// Group B keys in declaration order
    group_b: Vec<ParticipantKey>,

    /// Name -> slab key, unique across both sides
    name_index: HashMap<String, ParticipantKey>,
}

impl Group {
    /// Create a group from two name collections.
    ///
    /// Each participant initially ranks the opposite group in declaration
    /// order (first name least preferred). Names must be unique within and
    /// across both collections.
    ///
    /// # Errors
    ///
    /// [`MatchError::DuplicateName`] on the first repeated name.
    pub fn new<S: AsRef<str>>(names_a: &[S], names_b: &[S]) -> Result<Self, MatchError> {
        let a: Vec<&str> = names_a.iter().map(AsRef::as_ref).collect();
        let b: Vec<&str> = names_b.iter().map(AsRef::as_ref).collect();

        let mut group = Self {
            participants: Slab::with_capacity(a.len() + b.len()),
            group_a: Vec::with_capacity(a.len()),
            group_b: Vec::with_capacity(b.len()),
            name_index: HashMap::with_capacity(a.len() + b.len()),
        };

        for name in &a {
            group.insert(name, Side::A, PreferenceList::new(b.iter().copied()))?;
        }
        for name in &b {
            group.insert(name, Side::B, PreferenceList::new(a.iter().copied()))?;
        }

        Ok(group)
    }

    /// Create a group where every preference list starts shuffled.
    pub fn with_random_preferences<S: AsRef<str>, R: Rng + ?Sized>(
        names_a: &[S],
        names_b: &[S],
        rng: &mut R,
    ) -> Result<Self, MatchError> {
        let mut group = Self::new(names_a, names_b)?;
        group.randomize_all(rng);
        Ok(group)
    }

    fn insert(
        &mut self,
        name: &str,
        side: Side,
        preferences: PreferenceList,
    ) -> Result<ParticipantKey, MatchError> {
        if self.name_index.contains_key(name) {
            return Err(MatchError::DuplicateName { name: name.to_string() });
        }

        let key = self.participants.insert(Participant::new(name, side, preferences));
        self.name_index.insert(name.to_string(), key);
        match side {
            Side::A => self.group_a.push(key),
            Side::B => self.group_b.push(key),
        }
        Ok(key)
    }

    // ========================================================================
    // Size and Membership
    // ========================================================================

    /// Total number of participants in both groups
    #[inline]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Number of participants on one side
    #[inline]
    pub fn size(&self, side: Side) -> usize {
        self.members(side).len()
    }

    /// Keys of one side in declaration order
    #[inline]
    pub fn members(&self, side: Side) -> &[ParticipantKey] {
        match side {
            Side::A => &self.group_a,
            Side::B => &self.group_b,
        }
    }

    /// Every key, group A first, then group B
    pub fn all_keys(&self) -> Vec<ParticipantKey> {
        self.group_a.iter().chain(&self.group_b).copied().collect()
    }

    /// Require |A| == |B|, returning the common size
    ///
    /// # Errors
    ///
    /// [`MatchError::GroupSizeMismatch`] when the sides differ.
    pub fn ensure_balanced(&self) -> Result<usize, MatchError> {
        let (a, b) = (self.group_a.len(), self.group_b.len());
        if a != b {
            return Err(MatchError::GroupSizeMismatch { a, b });
        }
        Ok(a)
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Slab key for a name
    pub fn key_of(&self, name: &str) -> Result<ParticipantKey, MatchError> {
        self.name_index
            .get(name)
            .copied()
            .ok_or_else(|| MatchError::unknown(name))
    }

    /// Participant by name
    pub fn get(&self, name: &str) -> Result<&Participant, MatchError> {
        let key = self.key_of(name)?;
        Ok(&self.participants[key])
    }

    /// Participant by key, None if the key is not from this group
    #[inline]
    pub fn participant(&self, key: ParticipantKey) -> Option<&Participant> {
        self.participants.get(key)
    }

    /// Participant by key, for operations that must reject foreign keys
    ///
    /// # Errors
    ///
    /// [`MatchError::UnknownParticipant`] if `key` is not from this group
    pub fn try_participant(&self, key: ParticipantKey) -> Result<&Participant, MatchError> {
        self.participants
            .get(key)
            .ok_or_else(|| MatchError::unknown(format!("#{}", key)))
    }

    /// Name of a participant
    ///
    /// # Panics
    ///
    /// Panics if `key` does not belong to this group
    #[inline]
    pub fn name(&self, key: ParticipantKey) -> &str {
        self.participants[key].name()
    }

    // ========================================================================
    // Preference Store
    // ========================================================================

    /// Replace a participant's preference list wholesale.
    ///
    /// The list must be a permutation of the opposite group's names,
    /// ordered least -> most preferred.
    ///
    /// # Errors
    ///
    /// - [`MatchError::UnknownParticipant`] if `name` is not in the group
    /// - [`MatchError::InvalidPreferences`] if the list is not a permutation
    pub fn set_preferences<S: Into<String>>(
        &mut self,
        name: &str,
        ordered: Vec<S>,
    ) -> Result<(), MatchError> {
        let key = self.key_of(name)?;
        let candidate = PreferenceList::new(ordered);

        let side = self.participants[key].side();
        let opposite = self.members(side.opposite());
        candidate
            .check_permutation_of(opposite.iter().map(|&k| self.participants[k].name()))
            .map_err(|reason| MatchError::InvalidPreferences {
                participant: name.to_string(),
                reason,
            })?;

        *self.participants[key].preferences_mut() = candidate;
        Ok(())
    }

    /// Apply many `name -> ordered list` overrides, stopping at the first error.
    pub fn set_all_preferences<K, S>(
        &mut self,
        ratings: impl IntoIterator<Item = (K, Vec<S>)>,
    ) -> Result<(), MatchError>
    where
        K: AsRef<str>,
        S: Into<String>,
    {
        for (name, ordered) in ratings {
            self.set_preferences(name.as_ref(), ordered)?;
        }
        Ok(())
    }

    /// Shuffle one participant's preferences in place
    ///
    /// # Panics
    ///
    /// Panics if `key` does not belong to this group
    pub fn randomize<R: Rng + ?Sized>(&mut self, key: ParticipantKey, rng: &mut R) {
        self.participants[key].preferences_mut().shuffle(rng);
    }

    /// Shuffle every participant's preferences, A first then B
    pub fn randomize_all<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for key in self.all_keys() {
            self.randomize(key, rng);
        }
    }

    /// How much `key` wants `name` (higher is better)
    ///
    /// # Errors
    ///
    /// - [`MatchError::UnknownParticipant`] if `key` is not from this group
    /// - [`MatchError::NameNotRanked`] if `name` is not in the preference list
    pub fn rating_of(&self, key: ParticipantKey, name: &str) -> Result<usize, MatchError> {
        let participant = self.try_participant(key)?;
        participant
            .rating_of(name)
            .ok_or_else(|| MatchError::NameNotRanked {
                participant: participant.name().to_string(),
                name: name.to_string(),
            })
    }

    /// Rating of the current partner, or [`NO_PARTNER_RATING`] if unpartnered
    ///
    /// # Errors
    ///
    /// [`MatchError::UnknownParticipant`] if `key` is not from this group
    pub fn rating_of_current_partner(&self, key: ParticipantKey) -> Result<isize, MatchError> {
        match self.try_participant(key)?.partner() {
            Some(partner) => {
                let rating = self.rating_of(key, self.name(partner))?;
                Ok(rating as isize)
            }
            None => Ok(NO_PARTNER_RATING),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn five_by_five() -> Group {
        Group::new(
            &["Anna", "Avery", "Alastair", "Amelia", "Abby"],
            &["Bailey", "Brian", "Beverly", "Bob", "Biyu"],
        )
        .unwrap()
    }

    #[test]
    fn test_group_new() {
        let group = five_by_five();

        assert_eq!(group.len(), 10);
        assert_eq!(group.size(Side::A), 5);
        assert_eq!(group.size(Side::B), 5);
        assert_eq!(group.ensure_balanced(), Ok(5));

        let anna = group.get("Anna").unwrap();
        assert_eq!(anna.side(), Side::A);
        assert_eq!(anna.preferences().len(), 5);
        assert_eq!(anna.rating_of("Bailey"), Some(0));
        assert_eq!(anna.rating_of("Biyu"), Some(4));

        let bob = group.get("Bob").unwrap();
        assert_eq!(bob.side(), Side::B);
        assert_eq!(bob.rating_of("Abby"), Some(4));
    }

    #[test]
    fn test_group_members_in_declaration_order() {
        let group = five_by_five();
        let names: Vec<&str> = group
            .members(Side::B)
            .iter()
            .map(|&k| group.name(k))
            .collect();
        assert_eq!(names, ["Bailey", "Brian", "Beverly", "Bob", "Biyu"]);
        assert_eq!(group.all_keys().len(), 10);
        assert_eq!(group.name(group.all_keys()[0]), "Anna");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = Group::new(&["Anna", "Anna"], &["Bob", "Biyu"]).unwrap_err();
        assert_eq!(err, MatchError::DuplicateName { name: "Anna".into() });

        let err = Group::new(&["Anna", "Bob"], &["Bob", "Biyu"]).unwrap_err();
        assert_eq!(err, MatchError::DuplicateName { name: "Bob".into() });
    }

    #[test]
    fn test_unbalanced_detected() {
        let group = Group::new(&["Anna", "Avery"], &["Bob"]).unwrap();
        assert_eq!(
            group.ensure_balanced(),
            Err(MatchError::GroupSizeMismatch { a: 2, b: 1 })
        );
    }

    #[test]
    fn test_lookup_unknown_name() {
        let group = five_by_five();
        assert_eq!(group.key_of("Zed"), Err(MatchError::unknown("Zed")));
        assert!(group.get("Zed").is_err());
        assert!(group.participant(999).is_none());
    }

    #[test]
    fn test_set_preferences() {
        let mut group = five_by_five();
        group
            .set_preferences("Amelia", vec!["Bailey", "Brian", "Beverly", "Bob", "Biyu"])
            .unwrap();
        group
            .set_preferences("Biyu", vec!["Amelia", "Abby", "Avery", "Anna", "Alastair"])
            .unwrap();

        let amelia = group.key_of("Amelia").unwrap();
        let biyu = group.key_of("Biyu").unwrap();
        assert_eq!(group.rating_of(amelia, "Biyu").unwrap(), 4);
        assert_eq!(group.rating_of(biyu, "Amelia").unwrap(), 0);
        assert_eq!(group.rating_of(biyu, "Alastair").unwrap(), 4);
    }

    #[test]
    fn test_set_preferences_rejects_non_permutation() {
        let mut group = five_by_five();

        // Missing one name
        let err = group
            .set_preferences("Anna", vec!["Bob", "Brian", "Bailey", "Beverly"])
            .unwrap_err();
        assert!(matches!(err, MatchError::InvalidPreferences { .. }));

        // Own group instead of opposite group
        let err = group
            .set_preferences("Anna", vec!["Anna", "Avery", "Alastair", "Amelia", "Abby"])
            .unwrap_err();
        assert!(matches!(err, MatchError::InvalidPreferences { .. }));

        // Unknown participant
        let err = group.set_preferences("Zed", vec!["Bob"]).unwrap_err();
        assert_eq!(err, MatchError::unknown("Zed"));

        // Failed set leaves the list untouched
        let anna = group.key_of("Anna").unwrap();
        assert_eq!(group.rating_of(anna, "Biyu").unwrap(), 4);
    }

    #[test]
    fn test_set_all_preferences_stops_at_first_error() {
        let mut group = Group::new(&["Anna", "Avery"], &["Bob", "Biyu"]).unwrap();
        let result = group.set_all_preferences(vec![
            ("Anna", vec!["Biyu", "Bob"]),
            ("Avery", vec!["Biyu"]),
        ]);
        assert!(result.is_err());

        let anna = group.key_of("Anna").unwrap();
        assert_eq!(group.rating_of(anna, "Bob").unwrap(), 1);
    }

    #[test]
    fn test_foreign_key_is_an_error() {
        let group = five_by_five();
        let foreign = MatchError::unknown("#999");

        assert_eq!(group.try_participant(999).unwrap_err(), foreign);
        assert_eq!(group.rating_of(999, "Bob"), Err(foreign.clone()));
        assert_eq!(group.rating_of_current_partner(999), Err(foreign));
    }

    #[test]
    fn test_rating_of_missing_name() {
        let group = five_by_five();
        let anna = group.key_of("Anna").unwrap();
        let err = group.rating_of(anna, "Zed").unwrap_err();
        assert_eq!(
            err,
            MatchError::NameNotRanked { participant: "Anna".into(), name: "Zed".into() }
        );
    }

    #[test]
    fn test_randomize_all_is_seeded() {
        let mut first = five_by_five();
        let mut second = five_by_five();
        first.randomize_all(&mut ChaCha8Rng::seed_from_u64(3));
        second.randomize_all(&mut ChaCha8Rng::seed_from_u64(3));

        for key in first.all_keys() {
            assert_eq!(
                first.participant(key).unwrap().preferences(),
                second.participant(key).unwrap().preferences()
            );
            assert_eq!(first.participant(key).unwrap().preferences().len(), 5);
        }
    }

    #[test]
    fn test_with_random_preferences() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let group = Group::with_random_preferences(&["A0", "A1", "A2"], &["B0", "B1", "B2"], &mut rng)
            .unwrap();
        for key in group.all_keys() {
            let side = group.participant(key).unwrap().side();
            let opposite = group.members(side.opposite());
            let prefs = group.participant(key).unwrap().preferences();
            assert!(prefs
                .check_permutation_of(opposite.iter().map(|&k| group.name(k)))
                .is_ok());
        }
    }
}
