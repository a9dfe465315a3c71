//! Dependent (covered person) entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Relation of a dependent to the account owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Spouse,
    Child,
    Parent,
    Sibling,
    Other,
}

/// All valid relation values, in display order
pub const ALL_RELATIONS: &[Relation] = &[
    Relation::Spouse,
    Relation::Child,
    Relation::Parent,
    Relation::Sibling,
    Relation::Other,
];

impl Relation {
    /// Canonical wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Spouse => "spouse",
            Relation::Child => "child",
            Relation::Parent => "parent",
            Relation::Sibling => "sibling",
            Relation::Other => "other",
        }
    }

    /// Persian display label
    pub fn label_fa(&self) -> &'static str {
        match self {
            Relation::Spouse => "همسر",
            Relation::Child => "فرزند",
            Relation::Parent => "والدین",
            Relation::Sibling => "خواهر/برادر",
            Relation::Other => "سایر",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Relation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spouse" => Ok(Relation::Spouse),
            "child" => Ok(Relation::Child),
            "parent" => Ok(Relation::Parent),
            "sibling" => Ok(Relation::Sibling),
            "other" => Ok(Relation::Other),
            other => Err(DomainError::validation(format!(
                "Invalid relation '{}'",
                other
            ))),
        }
    }
}

/// Dependent as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub national_code: String,
    pub birth_date: NaiveDate,
    pub relation: Relation,
    /// Server-rendered Persian relation label
    #[serde(default)]
    pub relation_display: String,
    /// Age in years, computed server-side
    #[serde(default)]
    pub age: u32,
}

impl Person {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn relation_round_trips_wire_values() {
        for relation in ALL_RELATIONS {
            assert_eq!(Relation::from_str(relation.as_str()).unwrap(), *relation);
        }
    }

    #[test]
    fn unknown_relation_is_rejected() {
        assert!(Relation::from_str("cousin").is_err());
    }
}
