//! Output types and the composition mode enumeration.

use crate::roster::{Gender, Person};
use std::fmt;

/// Gender composition constraint for a partition.
///
/// A closed enumeration: there is deliberately no catch-all variant, so
/// an unknown mode cannot fall through to an unfiltered partition the way
/// a string-matched mode could.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompositionMode {
    /// No constraint: everyone is eligible, groups are shuffled slices.
    Any,
    /// Keep only male entries, then shuffle and slice.
    MaleOnly,
    /// Keep only female entries, then shuffle and slice.
    FemaleOnly,
    /// Keep everyone; distribute each gender round-robin so female and
    /// male counts are each balanced within 1 across groups.
    BalancedMixed,
}

impl fmt::Display for CompositionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositionMode::Any => write!(f, "any"),
            CompositionMode::MaleOnly => write!(f, "male-only"),
            CompositionMode::FemaleOnly => write!(f, "female-only"),
            CompositionMode::BalancedMixed => write!(f, "balanced-mixed"),
        }
    }
}

/// One produced group: an ordered list of people assigned together.
///
/// Member order within a group is an artifact of the assignment strategy
/// and carries no meaning; consumers must treat it as cosmetic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group(Vec<Person>);

impl Group {
    pub(crate) fn from_members(members: Vec<Person>) -> Self {
        Self(members)
    }

    /// Number of people in this group.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the group received nobody (legal when there are more
    /// groups than people).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The members, in assignment order.
    pub fn members(&self) -> &[Person] {
        &self.0
    }

    /// Number of members tagged with `gender`.
    pub fn count_of(&self, gender: Gender) -> usize {
        self.0.iter().filter(|p| p.gender == gender).count()
    }

    /// Iterates the members.
    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The result of one partition call: exactly `group_count` groups, in
/// index order 0..k-1.
///
/// Groups are mutually exclusive and collectively exhaustive over the
/// filtered population — no person appears twice and none is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupSet(Vec<Group>);

impl GroupSet {
    pub(crate) fn from_groups(groups: Vec<Group>) -> Self {
        Self(groups)
    }

    /// Number of groups (always the configured group count).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set holds no groups. Never true for a set produced by
    /// a successful partition call.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The groups, in index order.
    pub fn groups(&self) -> &[Group] {
        &self.0
    }

    /// Group sizes, in index order.
    pub fn sizes(&self) -> Vec<usize> {
        self.0.iter().map(Group::len).collect()
    }

    /// Total number of people across all groups.
    pub fn total_members(&self) -> usize {
        self.0.iter().map(Group::len).sum()
    }

    /// Iterates the groups.
    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.0.iter()
    }

    /// Flattens the set into `(group_index, person)` pairs, groups in
    /// index order. This is the traversal spreadsheet export uses for a
    /// numbered listing.
    pub fn members(&self) -> impl Iterator<Item = (usize, &Person)> + '_ {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(i, g)| g.iter().map(move |p| (i, p)))
    }
}

impl<'a> IntoIterator for &'a GroupSet {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
