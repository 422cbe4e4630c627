//! Roster data model.
//!
//! The input side of the crate: a [`Roster`] is an ordered list of
//! [`Person`] records, each tagged with a [`Gender`]. Rosters arrive from
//! an external ingestion layer (spreadsheet import, form input) and are
//! read-only from the partitioner's point of view.
//!
//! # Key Types
//!
//! - [`Person`]: one roster entry — a name and a gender
//! - [`Gender`]: closed enumeration with strict source-column parsing
//! - [`Roster`]: the ordered population, with per-gender tallies

mod types;

pub use types::{Gender, GenderParseError, Person, Roster};
