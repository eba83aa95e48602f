//! Participant records stored in the group arena.
//!
//! ## Partner Links
//!
//! A participant never holds a reference to its partner. The partner is a
//! slab key into the owning [`Group`](crate::ledger::Group), so the mutual
//! link `p.partner == q && q.partner == p` is plain data and both halves are
//! always written together by the ledger.

use crate::types::PreferenceList;

/// Slab key identifying a participant within its group
pub type ParticipantKey = usize;

/// Rating reported for a participant with no partner.
///
/// Outside the valid range `[0, n-1]`, so it sorts below every real rating.
pub const NO_PARTNER_RATING: isize = -1;

// ============================================================================
// Side enum
// ============================================================================

/// Which of the two disjoint groups a participant belongs to.
///
/// Group A is the proposing side of deferred acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Proposers
    A,
    /// Recipients
    B,
}

impl Side {
    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

// ============================================================================
// Participant struct
// ============================================================================

/// A member of group A or group B.
///
/// ## Example
///
/// ```
/// use stable_match::types::{Participant, PreferenceList, Side};
///
/// let jason = Participant::new(
///     "Jason",
///     Side::A,
///     PreferenceList::new(["Rachael", "Ryan", "Riley", "Richard"]),
/// );
/// assert!(!jason.has_partner());
/// assert_eq!(jason.rating_of("Riley"), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Unique name across both groups
    name: String,

    /// Group membership
    side: Side,

    /// Ranking of the opposite group
    preferences: PreferenceList,

    /// Current partner (slab key), None if unpartnered
    pub(crate) partner: Option<ParticipantKey>,
}

impl Participant {
    /// Create an unpartnered participant
    pub fn new(name: impl Into<String>, side: Side, preferences: PreferenceList) -> Self {
        Self {
            name: name.into(),
            side,
            preferences,
            partner: None,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn preferences(&self) -> &PreferenceList {
        &self.preferences
    }

    #[inline]
    pub(crate) fn preferences_mut(&mut self) -> &mut PreferenceList {
        &mut self.preferences
    }

    /// Current partner's slab key
    #[inline]
    pub fn partner(&self) -> Option<ParticipantKey> {
        self.partner
    }

    #[inline]
    pub fn has_partner(&self) -> bool {
        self.partner.is_some()
    }

    /// Rating of `name` in this participant's preferences
    #[inline]
    pub fn rating_of(&self, name: &str) -> Option<usize> {
        self.preferences.rating_of(name)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
