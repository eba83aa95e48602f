//! Ordered preference lists.
//!
//! ## Ordering Convention
//!
//! Index 0 is the LEAST preferred name, the last index the MOST preferred.
//! The rating of a name is its index, so a higher rating is better:
//!
//! ```text
//! [Rachael, Ryan, Riley, Richard]
//!     0       1     2       3      <- rating
//!  least                  most
//! ```
//!
//! A name->rank index is rebuilt whenever the order changes, so rating
//! lookups are O(1) instead of a linear scan.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

/// A participant's total order over every member of the opposite group.
///
/// ## Example
///
/// ```
/// use stable_match::types::PreferenceList;
///
/// let prefs = PreferenceList::new(vec!["Rachael", "Ryan", "Riley", "Richard"]);
/// assert_eq!(prefs.rating_of("Ryan"), Some(1));
/// assert_eq!(prefs.max_rating(), Some(3));
/// assert_eq!(prefs.rating_of("Nobody"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceList {
    /// Names ordered least -> most preferred
    names: Vec<String>,

    /// Name -> index in `names`
    ranks: HashMap<String, usize>,
}

impl PreferenceList {
    /// Create a preference list from names ordered least -> most preferred
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let ranks = Self::index(&names);
        Self { names, ranks }
    }

    fn index(names: &[String]) -> HashMap<String, usize> {
        names
            .iter()
            .enumerate()
            .map(|(rank, name)| (name.clone(), rank))
            .collect()
    }

    /// Number of ranked names
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no names are ranked
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names ordered least -> most preferred
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Rating (index) of `name`, or None if it is not ranked
    #[inline]
    pub fn rating_of(&self, name: &str) -> Option<usize> {
        self.ranks.get(name).copied()
    }

    /// Check if `name` is ranked
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.ranks.contains_key(name)
    }

    /// Highest possible rating, `len - 1`
    pub fn max_rating(&self) -> Option<usize> {
        self.names.len().checked_sub(1)
    }

    /// Shuffle into a uniformly random permutation of the same names
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.names.shuffle(rng);
        self.ranks = Self::index(&self.names);
    }

    /// Check that this list ranks exactly `expected`, each once.
    ///
    /// Returns a human-readable reason on failure.
    pub fn check_permutation_of<'a>(
        &self,
        expected: impl ExactSizeIterator<Item = &'a str>,
    ) -> Result<(), String> {
        if self.ranks.len() != self.names.len() {
            return Err("list contains duplicate names".to_string());
        }
        if self.names.len() != expected.len() {
            return Err(format!(
                "expected {} names, got {}",
                expected.len(),
                self.names.len()
            ));
        }
        for name in expected {
            if !self.contains(name) {
                return Err(format!("missing `{}`", name));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
