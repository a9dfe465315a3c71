//! Aggregate statistics endpoints for dashboards.

use std::collections::HashMap;

use serde::Deserialize;

use common::AppResult;

use crate::http::Http;

/// Top-line counts across the whole system.
#[derive(Debug, Clone, Deserialize)]
pub struct OverviewStats {
    pub total_users: u64,
    pub total_admins: u64,
    pub total_regular_users: u64,
    pub total_persons: u64,
    pub total_registrations: u64,
    pub total_schools: u64,
    pub total_plans: u64,
    pub active_registrations: u64,
    pub pending_registrations: u64,
}

/// Registration counts broken down by status, plan, and month.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationStats {
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
    pub active: u64,
    pub expired: u64,
    #[serde(default)]
    pub by_plan: Vec<serde_json::Value>,
    #[serde(default)]
    pub by_month: Vec<serde_json::Value>,
    /// Registrations created in the last 30 days
    pub recent_registrations: u64,
}

/// Dependent counts by relation and age band.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonStats {
    pub total: u64,
    #[serde(default)]
    pub by_relation: HashMap<String, u64>,
    pub average_per_user: f64,
    #[serde(default)]
    pub age_distribution: HashMap<String, u64>,
}

/// Plan catalog counts and popularity.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanStats {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
    #[serde(default)]
    pub by_type: HashMap<String, u64>,
    #[serde(default)]
    pub popularity: Vec<serde_json::Value>,
    pub average_premium: f64,
}

/// Client for the `/statistics` endpoint group.
pub struct StatisticsClient {
    http: Http,
}

impl StatisticsClient {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    pub async fn admin_overview(&self) -> AppResult<OverviewStats> {
        self.http.get("/statistics/admin/overview").await
    }

    pub async fn admin_registrations(&self) -> AppResult<RegistrationStats> {
        self.http.get("/statistics/admin/registrations").await
    }

    pub async fn admin_persons(&self) -> AppResult<PersonStats> {
        self.http.get("/statistics/admin/persons").await
    }

    pub async fn admin_plans(&self) -> AppResult<PlanStats> {
        self.http.get("/statistics/admin/plans").await
    }

    /// Per-account counts for the user dashboard; shape varies, kept loose.
    pub async fn user_overview(&self) -> AppResult<serde_json::Value> {
        self.http.get("/statistics/user/overview").await
    }
}
