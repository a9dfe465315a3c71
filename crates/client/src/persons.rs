//! Dependent (covered person) management endpoints.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::{Person, Relation};

use crate::http::Http;
use crate::validate::validate_payload;

static NATIONAL_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").unwrap());

/// New dependent payload.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreatePersonRequest {
    #[validate(length(min = 2, max = 100, message = "First name must be 2-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, max = 100, message = "Last name must be 2-100 characters"))]
    pub last_name: String,
    #[validate(regex(path = *NATIONAL_CODE_RE, message = "National code must be exactly 10 digits"))]
    pub national_code: String,
    pub birth_date: NaiveDate,
    pub relation: Relation,
}

/// Partial dependent update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdatePersonRequest {
    #[validate(length(min = 2, max = 100, message = "First name must be 2-100 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[validate(length(min = 2, max = 100, message = "Last name must be 2-100 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[validate(regex(path = *NATIONAL_CODE_RE, message = "National code must be exactly 10 digits"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
}

/// Client for the `/persons` endpoint group.
pub struct PersonsClient {
    http: Http,
}

impl PersonsClient {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    /// The caller's own dependents.
    pub async fn list(&self) -> AppResult<Vec<Person>> {
        self.http.get("/persons/").await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Person> {
        self.http.get(&format!("/persons/{}", id)).await
    }

    pub async fn create(&self, payload: &CreatePersonRequest) -> AppResult<Person> {
        validate_payload(payload)?;
        self.http.post("/persons/", payload).await
    }

    pub async fn update(&self, id: Uuid, payload: &UpdatePersonRequest) -> AppResult<Person> {
        validate_payload(payload)?;
        self.http.put(&format!("/persons/{}", id), payload).await
    }

    /// Delete a dependent. Confirmation happens at the call site; the
    /// dependent is removed independently of the owning account.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.http.delete(&format!("/persons/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_rejects_short_national_code() {
        let payload = CreatePersonRequest {
            first_name: "Ali".to_string(),
            last_name: "Karimi".to_string(),
            national_code: "12345".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2015, 3, 21).unwrap(),
            relation: Relation::Child,
        };
        assert!(validate_payload(&payload).is_err());
    }

    #[test]
    fn empty_update_is_valid() {
        assert!(validate_payload(&UpdatePersonRequest::default()).is_ok());
    }
}
