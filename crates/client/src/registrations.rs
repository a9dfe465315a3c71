//! Admin-side registration review and status transitions.
//!
//! The API is the single source of truth for a registration's status: after
//! a successful transition the service re-fetches the record instead of
//! mutating a local copy, and a rejected transition leaves the previously
//! fetched status untouched. Any movement outside the forward lifecycle is
//! allowed (manual correction capability) but logged for audit.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use common::AppResult;
use domain::{Registration, RegistrationStatus, TransitionKind};

use crate::http::Http;

/// Status transition payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: RegistrationStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Remote registration operations needed by the review service.
#[async_trait]
pub trait RegistrationsApi: Send + Sync {
    /// All registrations, newest first.
    async fn list(&self) -> AppResult<Vec<Registration>>;

    /// One registration by id.
    async fn get(&self, id: Uuid) -> AppResult<Registration>;

    /// Persist a status transition.
    async fn put_status(&self, id: Uuid, update: &StatusUpdate) -> AppResult<()>;
}

/// Client for the `/admin/registrations` endpoint group.
pub struct AdminRegistrationsClient {
    http: Http,
}

impl AdminRegistrationsClient {
    pub fn new(http: Http) -> Self {
        Self { http }
    }
}

#[async_trait]
impl RegistrationsApi for AdminRegistrationsClient {
    async fn list(&self) -> AppResult<Vec<Registration>> {
        self.http.get("/admin/registrations").await
    }

    async fn get(&self, id: Uuid) -> AppResult<Registration> {
        self.http.get(&format!("/admin/registrations/{}", id)).await
    }

    async fn put_status(&self, id: Uuid, update: &StatusUpdate) -> AppResult<()> {
        let _: Registration = self
            .http
            .put(&format!("/admin/registrations/{}/status", id), update)
            .await?;
        Ok(())
    }
}

/// Review service applying status transitions through the API.
pub struct RegistrationAdmin {
    api: Arc<dyn RegistrationsApi>,
}

impl RegistrationAdmin {
    pub fn new(api: Arc<dyn RegistrationsApi>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> AppResult<Vec<Registration>> {
        self.api.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Registration> {
        self.api.get(id).await
    }

    /// Transition a registration and return the server's updated copy.
    ///
    /// Dates are optional and independent of the chosen status. On failure
    /// the error carries the API's detail and no local state changes.
    pub async fn set_status(
        &self,
        id: Uuid,
        status: RegistrationStatus,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> AppResult<Registration> {
        let current = self.api.get(id).await?;

        if current.status.classify_transition(status) == TransitionKind::Override {
            tracing::warn!(
                "Registration {} status override: {} -> {}",
                id,
                current.status,
                status
            );
        }

        self.api
            .put_status(
                id,
                &StatusUpdate {
                    status,
                    start_date,
                    end_date,
                },
            )
            .await?;

        // The API may apply side effects the client cannot see; re-fetch
        // instead of trusting the payload we sent.
        self.api.get(id).await
    }
}
