//! Group partitioning.
//!
//! Splits a [`Roster`](crate::roster::Roster) into a requested number of
//! balanced groups, optionally constrained by gender composition.
//!
//! # Strategies
//!
//! | Mode | Population | Mechanics |
//! |---|---|---|
//! | [`Any`](CompositionMode::Any) | everyone | shuffle, contiguous slices |
//! | [`MaleOnly`](CompositionMode::MaleOnly) | males | shuffle, contiguous slices |
//! | [`FemaleOnly`](CompositionMode::FemaleOnly) | females | shuffle, contiguous slices |
//! | [`BalancedMixed`](CompositionMode::BalancedMixed) | everyone | per-gender shuffle, round-robin |
//!
//! # Key Types
//!
//! - [`PartitionConfig`]: group count, composition mode, optional seed
//! - [`PartitionRunner`]: executes one partition call
//! - [`GroupSet`] / [`Group`]: the produced groups, in index order
//! - [`PartitionError`]: the input-validation failure taxonomy
//!
//! # Submodules
//!
//! - [`operators`]: the raw distribution primitives (slice size plan,
//!   round-robin drain)

mod config;
mod error;
pub mod operators;
mod runner;
mod types;

pub use config::PartitionConfig;
pub use error::PartitionError;
pub use runner::PartitionRunner;
pub use types::{CompositionMode, Group, GroupSet};
