//! Core roster types.

use std::fmt;
use std::str::FromStr;

/// Gender tag attached to every roster entry.
///
/// A closed enumeration: ingestion must map its source column onto one of
/// these variants (via [`FromStr`]) and reject anything it cannot map.
/// Nothing in this crate ever coerces an unrecognized value silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    Male,
    Female,
    /// Anything the two-valued source column does not cover.
    ///
    /// Carried through `Any` partitions untouched; rejected by the
    /// balanced-mixed strategy (see `PartitionError::UnsupportedGender`).
    Other,
}

/// Failed to parse a gender value from its source-column encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized gender value: {value:?} (expected \"M\"/\"F\" or \"Male\"/\"Female\")")]
pub struct GenderParseError {
    /// The offending raw value.
    pub value: String,
}

impl FromStr for Gender {
    type Err = GenderParseError;

    /// Parses the two-valued source-column encoding.
    ///
    /// Accepts `"M"`/`"F"` and the spelled-out `"Male"`/`"Female"`,
    /// case-insensitively. Everything else is an error — deciding what
    /// to do with unknown values belongs to the ingestion layer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            m if m.eq_ignore_ascii_case("M") || m.eq_ignore_ascii_case("Male") => {
                Ok(Gender::Male)
            }
            f if f.eq_ignore_ascii_case("F") || f.eq_ignore_ascii_case("Female") => {
                Ok(Gender::Female)
            }
            other => Err(GenderParseError {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
        }
    }
}

/// One roster entry: a display name and a gender tag.
///
/// Immutable once constructed; the partitioner only ever clones and
/// rearranges these values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    /// Display name, as imported.
    pub name: String,
    /// Gender tag, already validated by ingestion.
    pub gender: Gender,
}

impl Person {
    /// Creates a person record.
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
        }
    }
}

/// The ordered input population.
///
/// May contain duplicate entries and is not required to be sorted; order
/// is whatever the ingestion layer produced. The partitioner treats a
/// roster as read-only.
///
/// # Examples
///
/// ```
/// use group_partition::roster::{Gender, Person, Roster};
///
/// let roster: Roster = [
///     Person::new("Ada", Gender::Female),
///     Person::new("Blaise", Gender::Male),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster.female_count(), 1);
/// assert_eq!(roster.male_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster(Vec<Person>);

impl Roster {
    /// Creates a roster from an already-collected list.
    pub fn new(people: Vec<Person>) -> Self {
        Self(people)
    }

    /// Number of people on the roster.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the roster has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the entries in roster order.
    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.0.iter()
    }

    /// The entries as a slice, in roster order.
    pub fn as_slice(&self) -> &[Person] {
        &self.0
    }

    /// Number of entries tagged with `gender`.
    pub fn count_of(&self, gender: Gender) -> usize {
        self.0.iter().filter(|p| p.gender == gender).count()
    }

    /// Number of female entries (the import screen's "girls" tally).
    pub fn female_count(&self) -> usize {
        self.count_of(Gender::Female)
    }

    /// Number of male entries (the import screen's "boys" tally).
    pub fn male_count(&self) -> usize {
        self.count_of(Gender::Male)
    }
}

impl FromIterator<Person> for Roster {
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Roster {
    type Item = Person;
    type IntoIter = std::vec::IntoIter<Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
