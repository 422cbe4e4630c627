//! Partition execution.
//!
//! [`PartitionRunner`] turns a roster and a [`PartitionConfig`] into a
//! [`GroupSet`]: validate → filter → shuffle → distribute. One call, one
//! result; nothing is retained between calls.

use super::config::PartitionConfig;
use super::error::PartitionError;
use super::operators::{round_robin_drain, slice_sizes};
use super::types::{CompositionMode, Group, GroupSet};
use crate::random::{create_rng, shuffle};
use crate::roster::{Gender, Person, Roster};
use rand::Rng;

/// Executes partition calls.
///
/// # Usage
///
/// ```
/// use group_partition::partition::{CompositionMode, PartitionConfig, PartitionRunner};
/// use group_partition::roster::{Gender, Person, Roster};
///
/// let roster: Roster = (0..10)
///     .map(|i| Person::new(format!("p{i}"), if i % 2 == 0 { Gender::Female } else { Gender::Male }))
///     .collect();
/// let config = PartitionConfig::new(3).with_seed(42);
///
/// let set = PartitionRunner::run(&roster, &config).unwrap();
/// assert_eq!(set.sizes(), vec![4, 3, 3]);
/// ```
pub struct PartitionRunner;

impl PartitionRunner {
    /// Partitions `roster` into `config.group_count` groups.
    ///
    /// `Any`, `MaleOnly` and `FemaleOnly` shuffle the (filtered)
    /// population and cut it into contiguous slices whose sizes differ by
    /// at most 1, the larger slices at the low indices. `BalancedMixed`
    /// shuffles each gender independently and deals both round-robin, so
    /// female and male counts are each balanced within 1 per group.
    ///
    /// The round-robin cursor restarts at group 0 between the female and
    /// male passes, matching the long-standing behavior of the tool this
    /// crate replaces: group 0 always receives the first male, however
    /// many females it already holds. Low-index groups are therefore
    /// slightly favored when counts don't divide evenly.
    ///
    /// # Errors
    ///
    /// - [`PartitionError::InvalidPolicy`] when `group_count == 0`.
    /// - [`PartitionError::EmptyPopulation`] when nobody survives the
    ///   composition filter.
    /// - [`PartitionError::UnsupportedGender`] when `BalancedMixed` meets
    ///   a person tagged [`Gender::Other`].
    ///
    /// A `group_count` larger than the population is not an error; the
    /// surplus groups come out empty.
    pub fn run(roster: &Roster, config: &PartitionConfig) -> Result<GroupSet, PartitionError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let groups = match config.composition {
            CompositionMode::Any => contiguous_slice(
                roster.iter().cloned().collect(),
                config.group_count,
                CompositionMode::Any,
                &mut rng,
            )?,
            CompositionMode::MaleOnly => contiguous_slice(
                filter_gender(roster, Gender::Male),
                config.group_count,
                CompositionMode::MaleOnly,
                &mut rng,
            )?,
            CompositionMode::FemaleOnly => contiguous_slice(
                filter_gender(roster, Gender::Female),
                config.group_count,
                CompositionMode::FemaleOnly,
                &mut rng,
            )?,
            CompositionMode::BalancedMixed => {
                balanced_mixed(roster, config.group_count, &mut rng)?
            }
        };

        Ok(GroupSet::from_groups(groups))
    }
}

fn filter_gender(roster: &Roster, gender: Gender) -> Vec<Person> {
    roster
        .iter()
        .filter(|p| p.gender == gender)
        .cloned()
        .collect()
}

/// Shuffle-and-slice: one uniform permutation cut into contiguous chunks
/// per the [`slice_sizes`] plan.
fn contiguous_slice<R: Rng>(
    mut people: Vec<Person>,
    group_count: usize,
    composition: CompositionMode,
    rng: &mut R,
) -> Result<Vec<Group>, PartitionError> {
    if people.is_empty() {
        return Err(PartitionError::EmptyPopulation { composition });
    }

    shuffle(&mut people, rng);

    let mut groups = Vec::with_capacity(group_count);
    let mut start = 0;
    for size in slice_sizes(people.len(), group_count) {
        groups.push(Group::from_members(people[start..start + size].to_vec()));
        start += size;
    }
    Ok(groups)
}

/// Per-gender round-robin: females dealt first, then males, each from an
/// independently shuffled list.
fn balanced_mixed<R: Rng>(
    roster: &Roster,
    group_count: usize,
    rng: &mut R,
) -> Result<Vec<Group>, PartitionError> {
    if let Some(person) = roster.iter().find(|p| p.gender == Gender::Other) {
        return Err(PartitionError::UnsupportedGender {
            name: person.name.clone(),
        });
    }
    if roster.is_empty() {
        return Err(PartitionError::EmptyPopulation {
            composition: CompositionMode::BalancedMixed,
        });
    }

    let mut females = filter_gender(roster, Gender::Female);
    let mut males = filter_gender(roster, Gender::Male);
    shuffle(&mut females, rng);
    shuffle(&mut males, rng);

    let mut buckets: Vec<Vec<Person>> = vec![Vec::new(); group_count];
    round_robin_drain(&mut females, &mut buckets);
    round_robin_drain(&mut males, &mut buckets);

    Ok(buckets.into_iter().map(Group::from_members).collect())
}

// ============================================================================
// Tests
// ============================================================================
