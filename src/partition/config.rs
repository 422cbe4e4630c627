//! Partition configuration.
//!
//! [`PartitionConfig`] holds the policy for one partition call.

use super::error::PartitionError;
use super::types::CompositionMode;

/// Policy for one partition call.
///
/// # Defaults
///
/// ```
/// use group_partition::partition::{CompositionMode, PartitionConfig};
///
/// let config = PartitionConfig::default();
/// assert_eq!(config.group_count, 1);
/// assert_eq!(config.composition, CompositionMode::Any);
/// assert!(config.seed.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use group_partition::partition::{CompositionMode, PartitionConfig};
///
/// let config = PartitionConfig::new(4)
///     .with_composition(CompositionMode::BalancedMixed)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionConfig {
    /// Number of groups to produce. Must be at least 1.
    ///
    /// May exceed the population size; surplus groups come out empty.
    pub group_count: usize,

    /// Gender composition constraint.
    pub composition: CompositionMode,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed, so repeated calls draw fresh group
    /// memberships (the size distribution is identical either way).
    pub seed: Option<u64>,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            group_count: 1,
            composition: CompositionMode::Any,
            seed: None,
        }
    }
}

impl PartitionConfig {
    /// Creates a config for `group_count` unconstrained groups.
    pub fn new(group_count: usize) -> Self {
        Self {
            group_count,
            ..Self::default()
        }
    }

    /// Sets the number of groups.
    pub fn with_group_count(mut self, n: usize) -> Self {
        self.group_count = n;
        self
    }

    /// Sets the composition mode.
    pub fn with_composition(mut self, mode: CompositionMode) -> Self {
        self.composition = mode;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the policy.
    ///
    /// The runner calls this first on every partition; callers may also
    /// invoke it directly to surface problems before a roster exists.
    pub fn validate(&self) -> Result<(), PartitionError> {
        if self.group_count == 0 {
            return Err(PartitionError::InvalidPolicy {
                group_count: self.group_count,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PartitionConfig::default();
        assert_eq!(config.group_count, 1);
        assert_eq!(config.composition, CompositionMode::Any);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PartitionConfig::new(4)
            .with_composition(CompositionMode::BalancedMixed)
            .with_seed(42);

        assert_eq!(config.group_count, 4);
        assert_eq!(config.composition, CompositionMode::BalancedMixed);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_with_group_count_chainable() {
        let config = PartitionConfig::default()
            .with_group_count(7)
            .with_composition(CompositionMode::FemaleOnly);
        assert_eq!(config.group_count, 7);
        assert_eq!(config.composition, CompositionMode::FemaleOnly);
    }

    #[test]
    fn test_validate_zero_groups() {
        let err = PartitionConfig::new(0).validate().unwrap_err();
        assert_eq!(err, PartitionError::InvalidPolicy { group_count: 0 });
    }

    #[test]
    fn test_validate_one_group_is_legal() {
        assert!(PartitionConfig::new(1).validate().is_ok());
    }
}
