//! Domain layer - Core entities, enumerations, and protocol state.
//!
//! This crate contains pure domain logic with no transport dependencies:
//! the entity mirrors of the insurance API, the cascading location-selection
//! reducer, and the registration status lifecycle.

pub mod cascade;
pub mod constants;
pub mod document;
pub mod error;
pub mod location;
pub mod national_id;
pub mod person;
pub mod plan;
pub mod registration;
pub mod user;

pub use cascade::{CascadeState, FetchRequest, FetchStatus, TierState};
pub use constants::*;
pub use document::{
    file_extension, mime_for_file_name, validate_upload, Document, DocumentType,
    DocumentWithUser, ALL_DOCUMENT_TYPES,
};
pub use error::{DomainError, DomainResult};
pub use location::{
    City, County, District, LocationNode, Region, School, SchoolType, State, Tier, ALL_TIERS,
};
pub use national_id::NationalId;
pub use person::{Person, Relation, ALL_RELATIONS};
pub use plan::{
    validate_coverage_percentage, Coverage, CoverageType, Plan, PlanType, ALL_COVERAGE_TYPES,
};
pub use registration::{
    Registration, RegistrationStatus, TransitionKind, ALL_STATUSES,
};
pub use user::{User, UserRole};
