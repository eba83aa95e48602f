//! Core data types for stable matching
//!
//! ## Types
//!
//! - [`Participant`]: A member of group A or B with its preferences
//! - [`Side`]: Group A (proposers) or group B
//! - [`PreferenceList`]: Ordered ranking of the opposite group
//! - [`MatchError`]: Errors from lookups, preconditions and metrics
//!
//! ## Ratings
//!
//! Preference lists run least -> most preferred, so the rating of a name is
//! its index and higher is better. An unpartnered participant reports
//! [`NO_PARTNER_RATING`] (-1).

mod error;
mod participant;
mod preferences;

pub use error::MatchError;
pub use participant::{Participant, ParticipantKey, Side, NO_PARTNER_RATING};
pub use preferences::PreferenceList;
