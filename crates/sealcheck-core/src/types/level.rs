//! Immutability levels and the comparators that relate them.
//!
//! Configuration may spell a level as a name (`"ReadonlyDeep"`, `"readonly_deep"`)
//! or as its legacy number (`4`). Both are decoded here, at the serde boundary,
//! so nothing past deserialization ever sees the mixed encoding.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Degree to which a type's mutation surface is sealed.
///
/// `Mutable < ReadonlyShallow < ReadonlyDeep < Immutable`. `Unknown` is out of band:
/// it has no rank and is deliberately not `Ord`, so comparisons must go through
/// [`ImmutabilityLevel::rank`] and an explicit policy for the unranked case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawLevel")]
pub enum ImmutabilityLevel {
    Unknown,
    Mutable,
    ReadonlyShallow,
    ReadonlyDeep,
    Immutable,
}

impl ImmutabilityLevel {
    /// Every ranked level, lowest first.
    pub const RANKED: [ImmutabilityLevel; 4] = [
        Self::Mutable,
        Self::ReadonlyShallow,
        Self::ReadonlyDeep,
        Self::Immutable,
    ];

    /// Position in the lattice, or `None` for `Unknown`.
    pub fn rank(self) -> Option<u8> {
        match self {
            Self::Unknown => None,
            Self::Mutable => Some(0),
            Self::ReadonlyShallow => Some(1),
            Self::ReadonlyDeep => Some(2),
            Self::Immutable => Some(3),
        }
    }

    /// The next level up, if there is one.
    pub fn successor(self) -> Option<Self> {
        match self {
            Self::Mutable => Some(Self::ReadonlyShallow),
            Self::ReadonlyShallow => Some(Self::ReadonlyDeep),
            Self::ReadonlyDeep => Some(Self::Immutable),
            Self::Immutable | Self::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        self.rank().is_some()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Mutable => "Mutable",
            Self::ReadonlyShallow => "ReadonlyShallow",
            Self::ReadonlyDeep => "ReadonlyDeep",
            Self::Immutable => "Immutable",
        }
    }

    /// Parse a level name, ignoring case, `_` and `-`.
    pub fn parse_name(name: &str) -> Option<Self> {
        match normalize(name).as_str() {
            "unknown" => Some(Self::Unknown),
            "mutable" => Some(Self::Mutable),
            "readonlyshallow" | "readonly" => Some(Self::ReadonlyShallow),
            "readonlydeep" => Some(Self::ReadonlyDeep),
            "immutable" => Some(Self::Immutable),
            _ => None,
        }
    }

    /// Legacy numeric encoding: `Mutable = 2` through `Immutable = 5`.
    pub fn from_number(value: i64) -> Option<Self> {
        match value {
            2 => Some(Self::Mutable),
            3 => Some(Self::ReadonlyShallow),
            4 => Some(Self::ReadonlyDeep),
            5 => Some(Self::Immutable),
            _ => None,
        }
    }
}

impl fmt::Display for ImmutabilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ImmutabilityLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Wire form of a level before decoding.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawLevel {
    Number(i64),
    Name(String),
}

impl TryFrom<RawLevel> for ImmutabilityLevel {
    type Error = String;

    fn try_from(raw: RawLevel) -> Result<Self, Self::Error> {
        match raw {
            RawLevel::Number(n) => Self::from_number(n)
                .ok_or_else(|| format!("unknown immutability level number {n} (expected 2-5)")),
            RawLevel::Name(name) => Self::parse_name(&name)
                .ok_or_else(|| format!("unknown immutability level '{name}'")),
        }
    }
}

/// Relation required between an actual and an expected level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "RawComparator")]
pub enum Comparator {
    Less,
    AtMost,
    Exactly,
    #[default]
    AtLeast,
    More,
}

impl Comparator {
    pub const ALL: [Comparator; 5] = [
        Self::Less,
        Self::AtMost,
        Self::Exactly,
        Self::AtLeast,
        Self::More,
    ];

    /// Whether `actual` relates to `expected` as this comparator requires.
    pub fn holds<T: PartialOrd>(self, actual: T, expected: T) -> bool {
        match self {
            Self::Less => actual < expected,
            Self::AtMost => actual <= expected,
            Self::Exactly => actual == expected,
            Self::AtLeast => actual >= expected,
            Self::More => actual > expected,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Less => "Less",
            Self::AtMost => "AtMost",
            Self::Exactly => "Exactly",
            Self::AtLeast => "AtLeast",
            Self::More => "More",
        }
    }

    pub fn parse_name(name: &str) -> Option<Self> {
        match normalize(name).as_str() {
            "less" => Some(Self::Less),
            "atmost" => Some(Self::AtMost),
            "exactly" => Some(Self::Exactly),
            "atleast" => Some(Self::AtLeast),
            "more" => Some(Self::More),
            _ => None,
        }
    }

    /// Legacy numeric encoding: `Less = -2` through `More = 2`.
    pub fn from_number(value: i64) -> Option<Self> {
        match value {
            -2 => Some(Self::Less),
            -1 => Some(Self::AtMost),
            0 => Some(Self::Exactly),
            1 => Some(Self::AtLeast),
            2 => Some(Self::More),
            _ => None,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Comparator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Wire form of a comparator before decoding.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawComparator {
    Number(i64),
    Name(String),
}

impl TryFrom<RawComparator> for Comparator {
    type Error = String;

    fn try_from(raw: RawComparator) -> Result<Self, Self::Error> {
        match raw {
            RawComparator::Number(n) => Self::from_number(n)
                .ok_or_else(|| format!("unknown comparator number {n} (expected -2..=2)")),
            RawComparator::Name(name) => {
                Self::parse_name(&name).ok_or_else(|| format!("unknown comparator '{name}'"))
            }
        }
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
