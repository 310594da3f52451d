//! Validation payload: which rule a preset or competition record broke, and on which field.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Field a violation is reported against. `Base` is used for rules spanning several fields.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Field {
    Season,
    Name,
    Format,
    NumTeams,
    NumTeamsPerGroup,
    NumAdvancesFromGroup,
    NumMatchesPerFixture,
    Base,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Season => "season",
            Field::Name => "name",
            Field::Format => "format",
            Field::NumTeams => "num_teams",
            Field::NumTeamsPerGroup => "num_teams_per_group",
            Field::NumAdvancesFromGroup => "num_advances_from_group",
            Field::NumMatchesPerFixture => "num_matches_per_fixture",
            Field::Base => "base",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad category of a violation.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A single field is missing, non-integer, out of range or unrecognised.
    Configuration,
    /// Fields look fine on their own but cannot describe a realizable tournament together.
    StructuralConstraint,
}

/// One broken rule.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Violation {
    Missing(Field),
    Blank(Field),
    NotInteger(Field),
    NotPositive(Field),
    TooSmall { field: Field, min: i64 },
    TooLarge { field: Field, max: i64 },
    UnknownFormat(String),
    /// Knockout team count that cannot form a full bracket. Reported at base, naming `field`.
    NotPowerOfTwo { field: Field, value: i64 },
    /// Group size does not divide the team count.
    UnevenGroups { num_teams: i64, teams_per_group: i64 },
    /// Group winners cannot form a full bracket.
    QualifiersNotPowerOfTwo { num_groups: i64, advances: i64 },
    /// Qualifier count is a power of two but too large to plan a bracket for.
    TooManyQualifiers { qualifiers: u64 },
}

impl Violation {
    /// Field the violation is reported against.
    pub fn field(&self) -> Field {
        match self {
            Violation::Missing(field)
            | Violation::Blank(field)
            | Violation::NotInteger(field)
            | Violation::NotPositive(field) => *field,
            Violation::TooSmall { field, .. } | Violation::TooLarge { field, .. } => *field,
            Violation::UnknownFormat(_) => Field::Format,
            Violation::NotPowerOfTwo { .. }
            | Violation::UnevenGroups { .. }
            | Violation::QualifiersNotPowerOfTwo { .. }
            | Violation::TooManyQualifiers { .. } => Field::Base,
        }
    }

    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::NotPowerOfTwo { .. }
            | Violation::UnevenGroups { .. }
            | Violation::QualifiersNotPowerOfTwo { .. }
            | Violation::TooManyQualifiers { .. } => ViolationKind::StructuralConstraint,
            _ => ViolationKind::Configuration,
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::Missing(_) => write!(f, "can't be blank"),
            Violation::Blank(_) => write!(f, "can't be blank"),
            Violation::NotInteger(_) => write!(f, "is not an integer"),
            Violation::NotPositive(_) => write!(f, "must be greater than 0"),
            Violation::TooSmall { min, .. } => {
                write!(f, "must be greater than or equal to {}", min)
            }
            Violation::TooLarge { max, .. } => write!(f, "must be less than or equal to {}", max),
            Violation::UnknownFormat(value) => write!(f, "'{}' is not a valid format", value),
            Violation::NotPowerOfTwo { field, value } => {
                write!(f, "{} must be a power of 2 (got {})", field, value)
            }
            Violation::UnevenGroups {
                num_teams,
                teams_per_group,
            } => write!(
                f,
                "{} teams cannot be split evenly into groups of {}",
                num_teams, teams_per_group
            ),
            Violation::QualifiersNotPowerOfTwo {
                num_groups,
                advances,
            } => write!(
                f,
                "{} groups with {} advancing gives {} qualifiers, which is not a power of 2",
                num_groups,
                advances,
                *num_groups as i128 * *advances as i128
            ),
            Violation::TooManyQualifiers { qualifiers } => write!(
                f,
                "{} qualifiers is more than a knockout bracket can hold (at most {})",
                qualifiers,
                1u64 << 31
            ),
        }
    }
}

/// Every violation found for one request, in the order the rules were checked.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// True if any violation is reported against `field`.
    pub fn has(&self, field: Field) -> bool {
        self.violations.iter().any(|v| v.field() == field)
    }

    /// Human-readable messages grouped by field (the payload shape callers render).
    pub fn messages(&self) -> BTreeMap<Field, Vec<String>> {
        let mut map: BTreeMap<Field, Vec<String>> = BTreeMap::new();
        for v in &self.violations {
            map.entry(v.field()).or_default().push(v.to_string());
        }
        map
    }

    /// `Ok(value)` if nothing was recorded, otherwise the collected errors.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{} {}", v.field(), v))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let messages = self.messages();
        let mut map = serializer.serialize_map(Some(messages.len()))?;
        for (field, list) in &messages {
            map.serialize_entry(field.as_str(), list)?;
        }
        map.end()
    }
}
