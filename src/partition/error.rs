//! Error types for the partitioner.

use super::types::CompositionMode;

/// Errors raised by a partition call.
///
/// All failures are input-validation failures: there are no transient
/// modes and nothing to retry with the same input. No partial result is
/// ever produced alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    /// The requested group count cannot form any partition.
    #[error("invalid policy: group count must be at least 1, got {group_count}")]
    InvalidPolicy {
        /// The rejected group count.
        group_count: usize,
    },

    /// Nobody remained after applying the composition filter.
    #[error("no eligible people remain under composition mode {composition}")]
    EmptyPopulation {
        /// The mode whose filter emptied the population.
        composition: CompositionMode,
    },

    /// Balanced-mixed partitioning met a person outside the two gender
    /// buckets it balances.
    #[error("balanced-mixed mode cannot place {name:?}: gender is neither male nor female")]
    UnsupportedGender {
        /// Name of the first affected person, for the caller's diagnostics.
        name: String,
    },
}
