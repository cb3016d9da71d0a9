//! caseline-roster
//!
//! The dashboard's in-memory client collection: a wholesale-replace cache of
//! normalized records plus the list filter. Filtering is a stable in-order
//! scan; no index, no reordering.

pub mod filter;
pub mod roster;

pub use filter::{ListFilter, filter};
pub use roster::Roster;
