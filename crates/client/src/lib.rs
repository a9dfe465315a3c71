//! Typed client for the school supplemental insurance API.
//!
//! One resource client per endpoint group, sharing a single HTTP transport
//! with bearer-token injection from the session store. The cascade resolver
//! and the registration review service sit on trait seams so tests can
//! drive them without a live API.

pub mod admin;
pub mod auth;
pub mod cascade;
pub mod documents;
pub mod http;
pub mod insurance;
pub mod locations;
pub mod persons;
pub mod registrations;
pub mod session;
pub mod statistics;
pub mod validate;

use std::sync::Arc;

use common::{AppResult, PortalConfig};

use crate::admin::AdminClient;
use crate::auth::AuthClient;
use crate::cascade::CascadeResolver;
use crate::documents::DocumentsClient;
use crate::http::Http;
use crate::insurance::InsuranceClient;
use crate::locations::LocationsClient;
use crate::persons::PersonsClient;
use crate::registrations::{AdminRegistrationsClient, RegistrationAdmin};
use crate::session::Session;
use crate::statistics::StatisticsClient;

/// Everything a portal command needs, wired from configuration.
pub struct Portal {
    pub session: Session,
    pub auth: AuthClient,
    pub locations: LocationsClient,
    pub insurance: InsuranceClient,
    pub persons: PersonsClient,
    pub documents: DocumentsClient,
    pub admin: AdminClient,
    pub registrations: RegistrationAdmin,
    pub statistics: StatisticsClient,
    http: Http,
}

impl Portal {
    /// Wire the resource clients against a shared transport and session.
    pub fn new(config: &PortalConfig) -> AppResult<Self> {
        let session = Session::load(&config.session);
        let http = Http::new(&config.api, session.tokens())?;

        Ok(Self {
            auth: AuthClient::new(http.clone()),
            locations: LocationsClient::new(http.clone()),
            insurance: InsuranceClient::new(http.clone()),
            persons: PersonsClient::new(http.clone()),
            documents: DocumentsClient::new(http.clone()),
            admin: AdminClient::new(http.clone()),
            registrations: RegistrationAdmin::new(Arc::new(AdminRegistrationsClient::new(
                http.clone(),
            ))),
            statistics: StatisticsClient::new(http.clone()),
            session,
            http,
        })
    }

    /// A cascade resolver backed by the live locations endpoint.
    pub fn cascade(&self) -> CascadeResolver {
        CascadeResolver::new(Arc::new(LocationsClient::new(self.http.clone())))
    }
}
