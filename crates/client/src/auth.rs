//! Identity and session bootstrap endpoints.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use validator::Validate;

use common::AppResult;
use domain::{NationalId, User};

use crate::http::Http;
use crate::session::TokenPair;
use crate::validate::validate_payload;

static NATIONAL_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{11}$").unwrap());

/// Account registration payload.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(regex(path = *NATIONAL_ID_RE, message = "National id must be exactly 10 digits"))]
    pub national_id: String,
    #[validate(email(message = "Invalid email address"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[validate(length(min = 2, max = 100, message = "First name must be 2-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 2, max = 100, message = "Last name must be 2-100 characters"))]
    pub last_name: String,
    #[validate(regex(path = *PHONE_RE, message = "Phone must be exactly 11 digits"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    national_id: &'a str,
    password: &'a str,
}

/// Client for the `/auth` endpoint group.
pub struct AuthClient {
    http: Http,
}

impl AuthClient {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    /// Register a new account; the API logs the account in immediately.
    pub async fn register(&self, payload: &RegisterRequest) -> AppResult<TokenPair> {
        validate_payload(payload)?;
        self.http.post("/auth/register", payload).await
    }

    /// Login with national id and password.
    pub async fn login(&self, national_id: &str, password: &str) -> AppResult<TokenPair> {
        let national_id = NationalId::new(national_id)?;
        self.http
            .post(
                "/auth/login",
                &LoginRequest {
                    national_id: national_id.as_str(),
                    password,
                },
            )
            .await
    }

    /// Exchange the refresh token for a fresh pair.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair> {
        self.http
            .post_query(
                "/auth/refresh",
                &[("refresh_token", refresh_token.to_string())],
            )
            .await
    }

    /// Profile of the authenticated account, including the admin flag.
    pub async fn me(&self) -> AppResult<User> {
        self.http.get("/auth/me").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_register() -> RegisterRequest {
        RegisterRequest {
            national_id: "0012345678".to_string(),
            email: Some("sara@example.com".to_string()),
            first_name: "Sara".to_string(),
            last_name: "Ahmadi".to_string(),
            phone: Some("09121234567".to_string()),
            password: "correct horse".to_string(),
        }
    }

    #[test]
    fn valid_registration_payload_passes() {
        assert!(validate_payload(&valid_register()).is_ok());
    }

    #[test]
    fn short_password_is_rejected() {
        let mut payload = valid_register();
        payload.password = "1234567".to_string();
        assert!(validate_payload(&payload).is_err());
    }

    #[test]
    fn non_numeric_national_id_is_rejected() {
        let mut payload = valid_register();
        payload.national_id = "00123x5678".to_string();
        assert!(validate_payload(&payload).is_err());
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let mut payload = valid_register();
        payload.email = None;
        payload.phone = None;
        assert!(validate_payload(&payload).is_ok());
    }
}
