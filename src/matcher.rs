//! Best-match search over arbitrary candidate sets.
//!
//! The matcher knows nothing about strings or numbers. Callers hand it a
//! query, an ordered candidate collection and a distance function (lower is
//! more similar); it returns the closest candidate, or `None` when an optional
//! threshold rejects even the best one. The [`bulk`] helpers run the same
//! search independently for many queries.

pub mod best_match;
pub mod bulk;

pub use best_match::*;
pub use bulk::*;
