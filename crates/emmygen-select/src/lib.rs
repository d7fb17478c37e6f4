#![forbid(unsafe_code)]

//! Decides which dump types a run generates.
//!
//! Filters are exact qualified names or `*` globs matched with
//! [`wildcard_matches`]; [`select_types`] applies them to a whole store
//! after dropping generic, special-name, and compiler-generated types.

mod filter;
mod wildcard;

pub use filter::select_types;
pub use wildcard::wildcard_matches;
