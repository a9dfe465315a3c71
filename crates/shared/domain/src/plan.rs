//! Insurance plan and coverage entities.
//!
//! A plan owns its coverages; a coverage has no lifecycle of its own.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{MAX_COVERAGE_PERCENTAGE, MIN_COVERAGE_PERCENTAGE};
use crate::error::{DomainError, DomainResult};

/// Plan tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Basic,
    Standard,
    Premium,
}

impl PlanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Basic => "basic",
            PlanType::Standard => "standard",
            PlanType::Premium => "premium",
        }
    }

    /// Persian display label
    pub fn label_fa(&self) -> &'static str {
        match self {
            PlanType::Basic => "پایه",
            PlanType::Standard => "استاندارد",
            PlanType::Premium => "ویژه",
        }
    }
}

impl std::str::FromStr for PlanType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(PlanType::Basic),
            "standard" => Ok(PlanType::Standard),
            "premium" => Ok(PlanType::Premium),
            other => Err(DomainError::validation(format!(
                "Invalid plan type '{}'",
                other
            ))),
        }
    }
}

/// Benefit category of a coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageType {
    Outpatient,
    Hospitalization,
    Medication,
    Laboratory,
    Imaging,
    Dental,
    Ophthalmology,
    Physiotherapy,
}

/// All coverage types, in catalog order
pub const ALL_COVERAGE_TYPES: &[CoverageType] = &[
    CoverageType::Outpatient,
    CoverageType::Hospitalization,
    CoverageType::Medication,
    CoverageType::Laboratory,
    CoverageType::Imaging,
    CoverageType::Dental,
    CoverageType::Ophthalmology,
    CoverageType::Physiotherapy,
];

impl CoverageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverageType::Outpatient => "outpatient",
            CoverageType::Hospitalization => "hospitalization",
            CoverageType::Medication => "medication",
            CoverageType::Laboratory => "laboratory",
            CoverageType::Imaging => "imaging",
            CoverageType::Dental => "dental",
            CoverageType::Ophthalmology => "ophthalmology",
            CoverageType::Physiotherapy => "physiotherapy",
        }
    }

    /// Persian display label
    pub fn label_fa(&self) -> &'static str {
        match self {
            CoverageType::Outpatient => "درمان سرپایی",
            CoverageType::Hospitalization => "بستری",
            CoverageType::Medication => "دارو",
            CoverageType::Laboratory => "آزمایش",
            CoverageType::Imaging => "تصویربرداری",
            CoverageType::Dental => "دندانپزشکی",
            CoverageType::Ophthalmology => "چشم‌پزشکی",
            CoverageType::Physiotherapy => "فیزیوتراپی",
        }
    }
}

impl std::str::FromStr for CoverageType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_COVERAGE_TYPES
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| DomainError::validation(format!("Invalid coverage type '{}'", s)))
    }
}

/// Validate a coverage percentage before it is submitted.
///
/// Both bounds are inclusive; 0 and 100 are accepted.
pub fn validate_coverage_percentage(value: i64) -> DomainResult<()> {
    if (MIN_COVERAGE_PERCENTAGE..=MAX_COVERAGE_PERCENTAGE).contains(&value) {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "Coverage percentage must be between {} and {}",
            MIN_COVERAGE_PERCENTAGE, MAX_COVERAGE_PERCENTAGE
        )))
    }
}

/// Coverage as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coverage {
    pub id: Uuid,
    /// Owning plan; present in admin listings, omitted when nested in a plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<Uuid>,
    pub coverage_type: CoverageType,
    pub title_fa: String,
    pub description_fa: String,
    /// Reimbursement cap in rials
    pub coverage_amount: f64,
    pub coverage_percentage: u8,
    /// Uses per year; absent means unlimited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_usage_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Plan as returned by the API, with its owned coverages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: Uuid,
    pub name_fa: String,
    pub plan_type: PlanType,
    pub description_fa: String,
    /// Monthly premium in rials
    pub monthly_premium: f64,
    pub is_active: bool,
    #[serde(default)]
    pub coverages: Vec<Coverage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_bounds_are_inclusive() {
        assert!(validate_coverage_percentage(0).is_ok());
        assert!(validate_coverage_percentage(100).is_ok());
        assert!(validate_coverage_percentage(50).is_ok());
    }

    #[test]
    fn percentage_out_of_range_is_rejected() {
        assert!(validate_coverage_percentage(-1).is_err());
        assert!(validate_coverage_percentage(101).is_err());
    }
}
