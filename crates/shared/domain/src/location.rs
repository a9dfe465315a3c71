//! Location hierarchy: State → City → County → Region → District → School.
//!
//! Each tier's option list is fetched filtered by the selected parent; the
//! tier-agnostic [`LocationNode`] view is what the cascade operates on.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// One level of the location hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    State,
    City,
    County,
    Region,
    District,
    School,
}

/// All tiers, root first
pub const ALL_TIERS: &[Tier] = &[
    Tier::State,
    Tier::City,
    Tier::County,
    Tier::Region,
    Tier::District,
    Tier::School,
];

impl Tier {
    /// Position within the hierarchy, root = 0.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The tier directly above, `None` for the root.
    pub fn parent(&self) -> Option<Tier> {
        match self {
            Tier::State => None,
            Tier::City => Some(Tier::State),
            Tier::County => Some(Tier::City),
            Tier::Region => Some(Tier::County),
            Tier::District => Some(Tier::Region),
            Tier::School => Some(Tier::District),
        }
    }

    /// The tier directly below, `None` for the leaf.
    pub fn child(&self) -> Option<Tier> {
        match self {
            Tier::State => Some(Tier::City),
            Tier::City => Some(Tier::County),
            Tier::County => Some(Tier::Region),
            Tier::Region => Some(Tier::District),
            Tier::District => Some(Tier::School),
            Tier::School => None,
        }
    }

    /// Collection segment in the locations API path.
    pub fn collection(&self) -> &'static str {
        match self {
            Tier::State => "states",
            Tier::City => "cities",
            Tier::County => "counties",
            Tier::Region => "regions",
            Tier::District => "districts",
            Tier::School => "schools",
        }
    }

    /// Query parameter naming the parent filter for this tier's option list.
    pub fn parent_param(&self) -> Option<&'static str> {
        match self {
            Tier::State => None,
            Tier::City => Some("state_id"),
            Tier::County => Some("city_id"),
            Tier::Region => Some("county_id"),
            Tier::District => Some("region_id"),
            Tier::School => Some("district_id"),
        }
    }

    /// Persian display label
    pub fn label_fa(&self) -> &'static str {
        match self {
            Tier::State => "استان",
            Tier::City => "شهر",
            Tier::County => "شهرستان",
            Tier::Region => "منطقه",
            Tier::District => "ناحیه",
            Tier::School => "مدرسه",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Tier::State => "state",
            Tier::City => "city",
            Tier::County => "county",
            Tier::Region => "region",
            Tier::District => "district",
            Tier::School => "school",
        };
        write!(f, "{}", name)
    }
}

/// School category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchoolType {
    Elementary,
    Middle,
    High,
    Combined,
}

impl SchoolType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchoolType::Elementary => "elementary",
            SchoolType::Middle => "middle",
            SchoolType::High => "high",
            SchoolType::Combined => "combined",
        }
    }

    /// Persian display label
    pub fn label_fa(&self) -> &'static str {
        match self {
            SchoolType::Elementary => "ابتدایی",
            SchoolType::Middle => "متوسطه اول",
            SchoolType::High => "متوسطه دوم",
            SchoolType::Combined => "ترکیبی",
        }
    }
}

impl std::str::FromStr for SchoolType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "elementary" => Ok(SchoolType::Elementary),
            "middle" => Ok(SchoolType::Middle),
            "high" => Ok(SchoolType::High),
            "combined" => Ok(SchoolType::Combined),
            other => Err(DomainError::validation(format!(
                "Invalid school type '{}'",
                other
            ))),
        }
    }
}

// =============================================================================
// Per-tier wire shapes
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    pub id: Uuid,
    pub name_fa: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: Uuid,
    pub state_id: Uuid,
    pub name_fa: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct County {
    pub id: Uuid,
    pub city_id: Uuid,
    pub name_fa: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub id: Uuid,
    pub county_id: Uuid,
    pub name_fa: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct District {
    pub id: Uuid,
    pub region_id: Uuid,
    pub name_fa: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    pub id: Uuid,
    pub district_id: Uuid,
    pub name_fa: String,
    pub code: String,
    pub school_type: SchoolType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Tier-agnostic view of a location, as consumed by the cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationNode {
    pub id: Uuid,
    pub name_fa: String,
    pub code: String,
    /// Absent for the root tier
    pub parent_id: Option<Uuid>,
}

impl From<State> for LocationNode {
    fn from(s: State) -> Self {
        Self {
            id: s.id,
            name_fa: s.name_fa,
            code: s.code,
            parent_id: None,
        }
    }
}

impl From<City> for LocationNode {
    fn from(c: City) -> Self {
        Self {
            id: c.id,
            name_fa: c.name_fa,
            code: c.code,
            parent_id: Some(c.state_id),
        }
    }
}

impl From<County> for LocationNode {
    fn from(c: County) -> Self {
        Self {
            id: c.id,
            name_fa: c.name_fa,
            code: c.code,
            parent_id: Some(c.city_id),
        }
    }
}

impl From<Region> for LocationNode {
    fn from(r: Region) -> Self {
        Self {
            id: r.id,
            name_fa: r.name_fa,
            code: r.code,
            parent_id: Some(r.county_id),
        }
    }
}

impl From<District> for LocationNode {
    fn from(d: District) -> Self {
        Self {
            id: d.id,
            name_fa: d.name_fa,
            code: d.code,
            parent_id: Some(d.region_id),
        }
    }
}

impl From<School> for LocationNode {
    fn from(s: School) -> Self {
        Self {
            id: s.id,
            name_fa: s.name_fa,
            code: s.code,
            parent_id: Some(s.district_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_child_links_are_consistent() {
        for tier in ALL_TIERS {
            if let Some(child) = tier.child() {
                assert_eq!(child.parent(), Some(*tier));
            }
            if let Some(parent) = tier.parent() {
                assert_eq!(parent.child(), Some(*tier));
            }
        }
        assert_eq!(Tier::State.parent(), None);
        assert_eq!(Tier::School.child(), None);
    }

    #[test]
    fn every_non_root_tier_has_a_parent_filter() {
        for tier in ALL_TIERS {
            assert_eq!(tier.parent_param().is_some(), tier.parent().is_some());
        }
    }
}
