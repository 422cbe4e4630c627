//! Balanced group partitioning for gender-tagged rosters.
//!
//! Takes an ordered roster of people, each tagged with a gender, and a
//! partition policy, and produces balanced groups:
//!
//! - **Shuffle-and-slice** (`Any`, `MaleOnly`, `FemaleOnly`): one uniform
//!   Fisher–Yates permutation of the (filtered) population, cut into
//!   contiguous slices whose sizes differ by at most 1.
//! - **Per-gender round-robin** (`BalancedMixed`): females and males are
//!   shuffled independently and dealt one at a time across the groups,
//!   so each gender's count is balanced within 1 per group.
//!
//! The partitioner is a pure synchronous call: immutable roster and
//! config in, a fresh [`partition::GroupSet`] out, no state retained
//! between calls. Seed the config for exact reproducibility; leave it
//! unseeded for fresh memberships with an identical size distribution.
//!
//! Spreadsheet ingestion, rendering, and file export live outside this
//! crate; it only provides the small edge helpers those layers need
//! (strict gender parsing, roster tallies, flattened group iteration).
//!
//! # Example
//!
//! ```
//! use group_partition::partition::{CompositionMode, PartitionConfig, PartitionRunner};
//! use group_partition::roster::{Gender, Person, Roster};
//!
//! let roster: Roster = [
//!     Person::new("Awa", Gender::Female),
//!     Person::new("Binta", Gender::Female),
//!     Person::new("Chloé", Gender::Female),
//!     Person::new("Dior", Gender::Female),
//!     Person::new("Émile", Gender::Male),
//!     Person::new("Franck", Gender::Male),
//! ]
//! .into_iter()
//! .collect();
//!
//! let config = PartitionConfig::new(2)
//!     .with_composition(CompositionMode::BalancedMixed)
//!     .with_seed(42);
//!
//! let groups = PartitionRunner::run(&roster, &config)?;
//! assert_eq!(groups.sizes(), vec![3, 3]);
//! for group in &groups {
//!     assert_eq!(group.count_of(Gender::Female), 2);
//!     assert_eq!(group.count_of(Gender::Male), 1);
//! }
//! # Ok::<(), group_partition::partition::PartitionError>(())
//! ```

pub mod partition;
pub mod random;
pub mod roster;

#[cfg(feature = "wasm")]
pub mod wasm;
