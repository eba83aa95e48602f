//! Matching engines.
//!
//! ## Engines
//!
//! - **Naive**: i-th member of A with i-th member of B, preferences ignored
//! - **Gale-Shapley**: deferred acceptance with group A proposing
//!
//! Both engines:
//!
//! 1. Reject |A| != |B| up front with [`MatchError::GroupSizeMismatch`]
//! 2. Start from a clean slate (`break_all`), no incremental re-matching
//! 3. Are deterministic: proposers are visited in group A declaration order
//!
//! ## Example
//!
//! ```
//! use stable_match::engine::Algorithm;
//! use stable_match::ledger::Group;
//! use stable_match::types::Side;
//!
//! let mut group = Group::new(&["Anna", "Avery"], &["Bob", "Biyu"]).unwrap();
//! group.set_preferences("Anna", vec!["Bob", "Biyu"]).unwrap();
//! group.set_preferences("Avery", vec!["Bob", "Biyu"]).unwrap();
//! group.set_preferences("Biyu", vec!["Anna", "Avery"]).unwrap();
//!
//! let outcome = Algorithm::GaleShapley.run(&mut group).unwrap();
//!
//! assert_eq!(outcome.pairs, 2);
//! assert!(group.unpartnered(Side::A).is_empty());
//! let biyu = group.key_of("Biyu").unwrap();
//! assert_eq!(group.name(group.partner_of(biyu).unwrap()), "Avery");
//! ```
//!
//! [`MatchError::GroupSizeMismatch`]: crate::types::MatchError::GroupSizeMismatch

pub mod algorithm;
pub mod deferred;
pub mod naive;

pub use algorithm::{Algorithm, MatchOutcome};
pub use deferred::Proposal;
