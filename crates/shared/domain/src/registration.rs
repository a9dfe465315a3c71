//! Insurance registration entity and its status lifecycle.
//!
//! A registration is created by the owning user and always starts out
//! `pending`; every later status change is an admin mutation applied through
//! the API. The forward lifecycle is
//! `pending → {approved, rejected}`, `approved → {active, cancelled}`,
//! `active → {expired, cancelled}`. Admins may also move a registration to
//! any other status as a manual correction; such moves are classified as
//! overrides so callers can flag them for audit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Registration lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Pending,
    Approved,
    Rejected,
    Active,
    Expired,
    Cancelled,
}

/// The full six-state set, in lifecycle order
pub const ALL_STATUSES: &[RegistrationStatus] = &[
    RegistrationStatus::Pending,
    RegistrationStatus::Approved,
    RegistrationStatus::Rejected,
    RegistrationStatus::Active,
    RegistrationStatus::Expired,
    RegistrationStatus::Cancelled,
];

/// How a requested status change relates to the forward lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Follows the forward lifecycle
    Forward,
    /// Any other movement; allowed, but flagged for audit
    Override,
}

impl RegistrationStatus {
    /// Canonical wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "pending",
            RegistrationStatus::Approved => "approved",
            RegistrationStatus::Rejected => "rejected",
            RegistrationStatus::Active => "active",
            RegistrationStatus::Expired => "expired",
            RegistrationStatus::Cancelled => "cancelled",
        }
    }

    /// Persian display label
    pub fn label_fa(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "در انتظار بررسی",
            RegistrationStatus::Approved => "تایید شده",
            RegistrationStatus::Rejected => "رد شده",
            RegistrationStatus::Active => "فعال",
            RegistrationStatus::Expired => "منقضی شده",
            RegistrationStatus::Cancelled => "لغو شده",
        }
    }

    /// Persian description shown to the end user
    pub fn description_fa(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => {
                "ثبت‌نام شما در حال بررسی توسط مدیر سیستم است. لطفاً منتظر بمانید."
            }
            RegistrationStatus::Approved => {
                "ثبت‌نام شما تایید شده است. منتظر فعال‌سازی بیمه باشید."
            }
            RegistrationStatus::Rejected => {
                "متأسفانه ثبت‌نام شما رد شده است. برای اطلاعات بیشتر با پشتیبانی تماس بگیرید."
            }
            RegistrationStatus::Active => {
                "بیمه شما فعال است و می‌توانید از خدمات بیمه‌ای استفاده کنید."
            }
            RegistrationStatus::Expired => {
                "بیمه شما منقضی شده است. برای تمدید با پشتیبانی تماس بگیرید."
            }
            RegistrationStatus::Cancelled => "ثبت‌نام شما لغو شده است.",
        }
    }

    /// Statuses reachable from this one along the forward lifecycle.
    pub fn forward_targets(&self) -> &'static [RegistrationStatus] {
        match self {
            RegistrationStatus::Pending => {
                &[RegistrationStatus::Approved, RegistrationStatus::Rejected]
            }
            RegistrationStatus::Approved => {
                &[RegistrationStatus::Active, RegistrationStatus::Cancelled]
            }
            RegistrationStatus::Active => {
                &[RegistrationStatus::Expired, RegistrationStatus::Cancelled]
            }
            RegistrationStatus::Rejected
            | RegistrationStatus::Expired
            | RegistrationStatus::Cancelled => &[],
        }
    }

    /// Classify a requested change from this status.
    pub fn classify_transition(&self, to: RegistrationStatus) -> TransitionKind {
        if self.forward_targets().contains(&to) {
            TransitionKind::Forward
        } else {
            TransitionKind::Override
        }
    }
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RegistrationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_STATUSES
            .iter()
            .find(|status| status.as_str() == s)
            .copied()
            .ok_or_else(|| DomainError::validation(format!("Invalid status '{}'", s)))
    }
}

/// Registration as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub id: Uuid,
    pub user_id: Uuid,
    pub plan_id: Uuid,
    pub school_id: Uuid,
    pub status: RegistrationStatus,
    /// Server-side creation timestamp, kept verbatim for display
    pub registration_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn forward_lifecycle_edges() {
        use RegistrationStatus::*;
        assert_eq!(Pending.classify_transition(Approved), TransitionKind::Forward);
        assert_eq!(Pending.classify_transition(Rejected), TransitionKind::Forward);
        assert_eq!(Approved.classify_transition(Active), TransitionKind::Forward);
        assert_eq!(Approved.classify_transition(Cancelled), TransitionKind::Forward);
        assert_eq!(Active.classify_transition(Expired), TransitionKind::Forward);
        assert_eq!(Active.classify_transition(Cancelled), TransitionKind::Forward);
    }

    #[test]
    fn backward_moves_are_overrides() {
        use RegistrationStatus::*;
        assert_eq!(Active.classify_transition(Pending), TransitionKind::Override);
        assert_eq!(Rejected.classify_transition(Approved), TransitionKind::Override);
        assert_eq!(Cancelled.classify_transition(Active), TransitionKind::Override);
        // No-op moves are not part of the forward lifecycle either
        assert_eq!(Pending.classify_transition(Pending), TransitionKind::Override);
    }

    #[test]
    fn terminal_states_have_no_forward_targets() {
        use RegistrationStatus::*;
        assert!(Rejected.forward_targets().is_empty());
        assert!(Expired.forward_targets().is_empty());
        assert!(Cancelled.forward_targets().is_empty());
    }

    #[test]
    fn wire_values_round_trip() {
        for status in ALL_STATUSES {
            assert_eq!(
                RegistrationStatus::from_str(status.as_str()).unwrap(),
                *status
            );
        }
        assert!(RegistrationStatus::from_str("archived").is_err());
    }

    #[test]
    fn every_status_has_distinct_label_and_description() {
        let labels: std::collections::HashSet<_> =
            ALL_STATUSES.iter().map(|s| s.label_fa()).collect();
        let descriptions: std::collections::HashSet<_> =
            ALL_STATUSES.iter().map(|s| s.description_fa()).collect();
        assert_eq!(labels.len(), ALL_STATUSES.len());
        assert_eq!(descriptions.len(), ALL_STATUSES.len());
    }
}
