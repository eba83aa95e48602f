//! Participant arena, preference store and partnership ledger.
//!
//! ## Components
//!
//! - [`Group`]: two disjoint groups stored in one slab, with name lookup and
//!   preference operations
//! - Partnership operations (`make_partnership`, `break_partnership`,
//!   `break_all`) that keep the partner relation symmetric
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Lookup by name | O(1) |
//! | Rating lookup | O(1) |
//! | Make / break partnership | O(1) |
//! | Break all | O(n) |
//! | Set preferences | O(n) |
//!
//! ## Example
//!
//! ```
//! use stable_match::ledger::Group;
//!
//! let mut group = Group::new(&["Jason", "Joy"], &["Ryan", "Riley"]).unwrap();
//! let jason = group.key_of("Jason").unwrap();
//! let riley = group.key_of("Riley").unwrap();
//!
//! group.make_partnership(jason, riley).unwrap();
//! assert_eq!(group.display(jason).to_string(), "Jason (Riley)");
//!
//! group.break_partnership(riley);
//! assert!(!group.has_partner(jason));
//! ```

pub mod group;
pub mod partnership;

pub use group::Group;
pub use partnership::PartnerDisplay;
