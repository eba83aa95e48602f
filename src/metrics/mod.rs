//! Matching quality metrics.
//!
//! - [`happiness`], [`average_happiness`], [`fairness_ratio`]: how well
//!   each side did, normalized to the rating scale
//! - [`QualitySummary`]: all of the above for one group in one call
//! - [`blocking_pairs`], [`is_stable`]: stability audit
//!
//! All metrics only read the ledger; they never change a pairing.

pub mod happiness;
pub mod stability;

pub use happiness::{
    average_happiness, fairness_ratio, happiness, side_happiness, QualitySummary,
};
pub use stability::{blocking_pairs, is_stable};
