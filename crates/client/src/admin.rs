//! Admin CRUD mirror: plans, coverages, the location hierarchy, schools,
//! and user accounts.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use common::{AppError, AppResult};
use domain::{
    City, County, Coverage, CoverageType, District, LocationNode, Person, Plan, PlanType,
    Region, School, SchoolType, State, Tier, User,
};

use crate::http::Http;
use crate::validate::validate_payload;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{11}$").unwrap());

// =============================================================================
// Payloads
// =============================================================================

/// New plan payload.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreatePlanRequest {
    #[validate(length(min = 2, max = 100, message = "Plan name must be 2-100 characters"))]
    pub name_fa: String,
    pub plan_type: PlanType,
    pub description_fa: String,
    #[validate(range(exclusive_min = 0.0, message = "Monthly premium must be positive"))]
    pub monthly_premium: f64,
}

/// Partial plan update.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdatePlanRequest {
    #[validate(length(min = 2, max = 100, message = "Plan name must be 2-100 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_fa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_type: Option<PlanType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_fa: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "Monthly premium must be positive"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_premium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// New coverage payload, owned by a plan.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateCoverageRequest {
    pub plan_id: Uuid,
    pub coverage_type: CoverageType,
    #[validate(length(min = 2, max = 100, message = "Coverage title must be 2-100 characters"))]
    pub title_fa: String,
    pub description_fa: String,
    #[validate(range(exclusive_min = 0.0, message = "Coverage amount must be positive"))]
    pub coverage_amount: f64,
    #[validate(range(min = 0, max = 100, message = "Coverage percentage must be between 0 and 100"))]
    pub coverage_percentage: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_usage_count: Option<u32>,
}

/// Partial coverage update.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateCoverageRequest {
    #[validate(length(min = 2, max = 100, message = "Coverage title must be 2-100 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_fa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_fa: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "Coverage amount must be positive"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_amount: Option<f64>,
    #[validate(range(min = 0, max = 100, message = "Coverage percentage must be between 0 and 100"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_percentage: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_usage_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Name and code of a location node (all tiers above School).
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LocationPayload {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name_fa: String,
    #[validate(length(min = 1, max = 20, message = "Code must be 1-20 characters"))]
    pub code: String,
}

/// New school payload; requires a resolved chain down to District.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateSchoolRequest {
    pub district_id: Uuid,
    #[validate(length(min = 2, max = 200, message = "School name must be 2-200 characters"))]
    pub name_fa: String,
    #[validate(length(min = 1, max = 20, message = "Code must be 1-20 characters"))]
    pub code: String,
    pub school_type: SchoolType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[validate(regex(path = *PHONE_RE, message = "Phone must be exactly 11 digits"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Partial school update.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateSchoolRequest {
    #[validate(length(min = 2, max = 200, message = "School name must be 2-200 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_fa: Option<String>,
    #[validate(length(min = 1, max = 20, message = "Code must be 1-20 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_type: Option<SchoolType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[validate(regex(path = *PHONE_RE, message = "Phone must be exactly 11 digits"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Account flags an admin may change.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

// =============================================================================
// Client
// =============================================================================

/// Client for the `/admin` endpoint group (registrations excepted; see
/// [`crate::registrations`]).
pub struct AdminClient {
    http: Http,
}

impl AdminClient {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    // -- Plans ---------------------------------------------------------------

    pub async fn plans(&self) -> AppResult<Vec<Plan>> {
        self.http.get("/admin/plans").await
    }

    pub async fn create_plan(&self, payload: &CreatePlanRequest) -> AppResult<Plan> {
        validate_payload(payload)?;
        self.http.post("/admin/plans", payload).await
    }

    pub async fn update_plan(&self, id: Uuid, payload: &UpdatePlanRequest) -> AppResult<Plan> {
        validate_payload(payload)?;
        self.http.put(&format!("/admin/plans/{}", id), payload).await
    }

    pub async fn delete_plan(&self, id: Uuid) -> AppResult<()> {
        self.http.delete(&format!("/admin/plans/{}", id)).await
    }

    // -- Coverages -----------------------------------------------------------

    pub async fn coverages(&self) -> AppResult<Vec<Coverage>> {
        self.http.get("/admin/coverages").await
    }

    pub async fn create_coverage(&self, payload: &CreateCoverageRequest) -> AppResult<Coverage> {
        validate_payload(payload)?;
        self.http.post("/admin/coverages", payload).await
    }

    pub async fn update_coverage(
        &self,
        id: Uuid,
        payload: &UpdateCoverageRequest,
    ) -> AppResult<Coverage> {
        validate_payload(payload)?;
        self.http
            .put(&format!("/admin/coverages/{}", id), payload)
            .await
    }

    pub async fn delete_coverage(&self, id: Uuid) -> AppResult<()> {
        self.http.delete(&format!("/admin/coverages/{}", id)).await
    }

    // -- Location hierarchy --------------------------------------------------

    /// Full option list of a tier (unfiltered admin view).
    pub async fn locations(&self, tier: Tier) -> AppResult<Vec<LocationNode>> {
        let path = format!("/admin/{}", tier.collection());
        let nodes = match tier {
            Tier::State => into_nodes(self.http.get::<Vec<State>>(&path).await?),
            Tier::City => into_nodes(self.http.get::<Vec<City>>(&path).await?),
            Tier::County => into_nodes(self.http.get::<Vec<County>>(&path).await?),
            Tier::Region => into_nodes(self.http.get::<Vec<Region>>(&path).await?),
            Tier::District => into_nodes(self.http.get::<Vec<District>>(&path).await?),
            Tier::School => into_nodes(self.http.get::<Vec<School>>(&path).await?),
        };
        Ok(nodes)
    }

    /// Create a node at any tier above School.
    ///
    /// Non-root tiers require the parent id; it is sent under the tier's
    /// parent-filter parameter name. Schools carry extra fields and go
    /// through [`create_school`](Self::create_school).
    pub async fn create_location(
        &self,
        tier: Tier,
        parent_id: Option<Uuid>,
        payload: &LocationPayload,
    ) -> AppResult<LocationNode> {
        validate_payload(payload)?;

        let mut body = json!({
            "name_fa": payload.name_fa,
            "code": payload.code,
        });
        match (tier.parent_param(), parent_id) {
            (None, _) => {}
            (Some(param), Some(id)) => {
                body[param] = json!(id.to_string());
            }
            (Some(param), None) => {
                return Err(AppError::validation(format!(
                    "Creating a {} requires a {}",
                    tier, param
                )));
            }
        }

        let path = format!("/admin/{}", tier.collection());
        let node = match tier {
            Tier::State => self.http.post::<_, State>(&path, &body).await?.into(),
            Tier::City => self.http.post::<_, City>(&path, &body).await?.into(),
            Tier::County => self.http.post::<_, County>(&path, &body).await?.into(),
            Tier::Region => self.http.post::<_, Region>(&path, &body).await?.into(),
            Tier::District => self.http.post::<_, District>(&path, &body).await?.into(),
            Tier::School => {
                return Err(AppError::validation(
                    "Schools carry extra fields; use create_school",
                ));
            }
        };
        Ok(node)
    }

    /// Rename or re-code an existing node at any tier above School.
    pub async fn update_location(
        &self,
        tier: Tier,
        id: Uuid,
        payload: &LocationPayload,
    ) -> AppResult<LocationNode> {
        validate_payload(payload)?;

        let path = format!("/admin/{}/{}", tier.collection(), id);
        let node = match tier {
            Tier::State => self.http.put::<_, State>(&path, payload).await?.into(),
            Tier::City => self.http.put::<_, City>(&path, payload).await?.into(),
            Tier::County => self.http.put::<_, County>(&path, payload).await?.into(),
            Tier::Region => self.http.put::<_, Region>(&path, payload).await?.into(),
            Tier::District => self.http.put::<_, District>(&path, payload).await?.into(),
            Tier::School => {
                return Err(AppError::validation(
                    "Schools carry extra fields; use update_school",
                ));
            }
        };
        Ok(node)
    }

    /// Delete a node; children cascade server-side.
    pub async fn delete_location(&self, tier: Tier, id: Uuid) -> AppResult<()> {
        self.http
            .delete(&format!("/admin/{}/{}", tier.collection(), id))
            .await
    }

    // -- Schools -------------------------------------------------------------

    pub async fn schools(&self) -> AppResult<Vec<School>> {
        self.http.get("/admin/schools").await
    }

    pub async fn create_school(&self, payload: &CreateSchoolRequest) -> AppResult<School> {
        validate_payload(payload)?;
        self.http.post("/admin/schools", payload).await
    }

    pub async fn update_school(
        &self,
        id: Uuid,
        payload: &UpdateSchoolRequest,
    ) -> AppResult<School> {
        validate_payload(payload)?;
        self.http
            .put(&format!("/admin/schools/{}", id), payload)
            .await
    }

    pub async fn delete_school(&self, id: Uuid) -> AppResult<()> {
        self.http.delete(&format!("/admin/schools/{}", id)).await
    }

    // -- Accounts and dependents ---------------------------------------------

    pub async fn users(&self) -> AppResult<Vec<User>> {
        self.http.get("/admin/users").await
    }

    pub async fn update_user(&self, id: Uuid, payload: &UpdateUserRequest) -> AppResult<User> {
        self.http.put(&format!("/admin/users/{}", id), payload).await
    }

    /// Every dependent across all accounts.
    pub async fn persons(&self) -> AppResult<Vec<Person>> {
        self.http.get("/admin/persons").await
    }
}

fn into_nodes<T: Into<LocationNode>>(items: Vec<T>) -> Vec<LocationNode> {
    items.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_percentage_bounds_are_accepted() {
        for percentage in [0, 100] {
            let payload = CreateCoverageRequest {
                plan_id: Uuid::new_v4(),
                coverage_type: CoverageType::Dental,
                title_fa: "دندانپزشکی".to_string(),
                description_fa: "پوشش خدمات دندانپزشکی".to_string(),
                coverage_amount: 5_000_000.0,
                coverage_percentage: percentage,
                max_usage_count: Some(2),
            };
            assert!(validate_payload(&payload).is_ok());
        }
    }

    #[test]
    fn out_of_range_percentage_is_rejected_before_submission() {
        for percentage in [-1, 101] {
            let payload = CreateCoverageRequest {
                plan_id: Uuid::new_v4(),
                coverage_type: CoverageType::Dental,
                title_fa: "دندانپزشکی".to_string(),
                description_fa: "پوشش خدمات دندانپزشکی".to_string(),
                coverage_amount: 5_000_000.0,
                coverage_percentage: percentage,
                max_usage_count: None,
            };
            assert!(validate_payload(&payload).is_err());
        }
    }

    #[test]
    fn free_plans_are_rejected() {
        let payload = CreatePlanRequest {
            name_fa: "طرح پایه".to_string(),
            plan_type: PlanType::Basic,
            description_fa: "پوشش پایه".to_string(),
            monthly_premium: 0.0,
        };
        assert!(validate_payload(&payload).is_err());
    }
}
