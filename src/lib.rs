//! # Stable Match
//!
//! Stable one-to-one matching between two equal-size groups, A and B, where
//! every member ranks every member of the other group.
//!
//! ## Architecture
//!
//! - **Types**: Participants, sides, preference lists, errors
//! - **Ledger**: Slab arena of participants with symmetric partner links
//! - **Engine**: Naive (index-aligned) and deferred-acceptance matching
//! - **Metrics**: Happiness, fairness ratio, blocking-pair audit
//! - **Experiment**: Repeated randomized trials with aggregate reporting
//!
//! ## Design Principles
//!
//! 1. **No back-references**: partners are slab keys, never references
//! 2. **Determinism**: identical preferences give identical matchings
//! 3. **Fail fast**: unequal groups and malformed preferences are errors,
//!    never silent truncation or an endless proposal loop
//! 4. **Closed engine set**: engines are an enum, not stringly-typed
//!
//! ## Example
//!
//! ```
//! use stable_match::{Algorithm, Group, QualitySummary};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut group = Group::with_random_preferences(
//!     &["A0", "A1", "A2", "A3"],
//!     &["B0", "B1", "B2", "B3"],
//!     &mut rng,
//! ).unwrap();
//!
//! Algorithm::GaleShapley.run(&mut group).unwrap();
//! assert!(stable_match::metrics::is_stable(&group).unwrap());
//!
//! let quality = QualitySummary::measure(&group).unwrap();
//! assert_eq!(quality.unpartnered, 0);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Participant, Side, PreferenceList, MatchError
pub mod types;

/// Participant arena and partnership ledger
pub mod ledger;

/// Matching engines: naive and Gale-Shapley
pub mod engine;

/// Happiness, fairness and stability metrics
pub mod metrics;

/// Randomized experiment harness
pub mod experiment;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::{Algorithm, MatchOutcome};
pub use experiment::{run_experiment, ExperimentConfig, ExperimentReport};
pub use ledger::Group;
pub use metrics::QualitySummary;
pub use types::{MatchError, Participant, ParticipantKey, PreferenceList, Side};
