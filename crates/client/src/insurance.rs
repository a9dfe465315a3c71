//! User-facing plan browsing and registration endpoints.

use serde::Serialize;
use uuid::Uuid;

use common::AppResult;
use domain::{Plan, Registration};

use crate::http::Http;

#[derive(Debug, Serialize)]
struct RegistrationRequest {
    plan_id: Uuid,
    school_id: Uuid,
}

/// Client for the `/insurance` endpoint group.
pub struct InsuranceClient {
    http: Http,
}

impl InsuranceClient {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    /// Active plans with their coverages.
    pub async fn plans(&self) -> AppResult<Vec<Plan>> {
        self.http.get("/insurance/plans").await
    }

    pub async fn plan(&self, id: Uuid) -> AppResult<Plan> {
        self.http.get(&format!("/insurance/plans/{}", id)).await
    }

    /// Submit a registration; the server creates it in `pending` status.
    pub async fn register(&self, plan_id: Uuid, school_id: Uuid) -> AppResult<Registration> {
        self.http
            .post("/insurance/register", &RegistrationRequest { plan_id, school_id })
            .await
    }

    /// The caller's own registrations.
    pub async fn registrations(&self) -> AppResult<Vec<Registration>> {
        self.http.get("/insurance/registrations").await
    }

    pub async fn registration(&self, id: Uuid) -> AppResult<Registration> {
        self.http
            .get(&format!("/insurance/registrations/{}", id))
            .await
    }
}
