//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing. Enumerated
//! values (statuses, relations, document types) are passed as their wire
//! strings and parsed by the domain layer.

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use domain::Tier;

/// School supplemental insurance portal
#[derive(Parser, Debug)]
#[command(name = "portal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// API base URL (overrides PORTAL_API_URL)
    #[arg(long, global = true, env = "PORTAL_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Account and session management
    Auth(AuthArgs),

    /// Browse insurance plans
    Plans(PlansArgs),

    /// Register for a plan at a school
    Register(RegisterArgs),

    /// Your insurance registrations
    Registrations(RegistrationsArgs),

    /// Manage dependents
    Persons(PersonsArgs),

    /// Manage supporting documents
    Documents(DocumentsArgs),

    /// Browse the location hierarchy
    Locations(LocationsArgs),

    /// Administration (admin accounts only)
    Admin(AdminArgs),
}

// =============================================================================
// Auth
// =============================================================================

#[derive(Parser, Debug)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub action: AuthAction,
}

#[derive(Subcommand, Debug)]
pub enum AuthAction {
    /// Login with national id and password
    Login {
        #[arg(long)]
        national_id: String,
        #[arg(long)]
        password: String,
    },
    /// Register a new account
    Register {
        #[arg(long)]
        national_id: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        password: String,
    },
    /// Drop the stored session
    Logout,
    /// Show the authenticated profile
    Me,
    /// Exchange the refresh token for a fresh pair
    Refresh,
}

// =============================================================================
// Plans & registration
// =============================================================================

#[derive(Parser, Debug)]
pub struct PlansArgs {
    #[command(subcommand)]
    pub action: PlansAction,
}

#[derive(Subcommand, Debug)]
pub enum PlansAction {
    /// List available plans
    List,
    /// Show one plan with its coverages
    Show { id: Uuid },
}

/// Arguments for the registration flow; the location chain is resolved
/// top-down and each value must belong to its parent's option list.
#[derive(Parser, Debug)]
pub struct RegisterArgs {
    /// Plan to register for
    #[arg(long)]
    pub plan: Uuid,
    #[arg(long)]
    pub state: Uuid,
    #[arg(long)]
    pub city: Uuid,
    #[arg(long)]
    pub county: Uuid,
    #[arg(long)]
    pub region: Uuid,
    #[arg(long)]
    pub district: Uuid,
    #[arg(long)]
    pub school: Uuid,
}

#[derive(Parser, Debug)]
pub struct RegistrationsArgs {
    #[command(subcommand)]
    pub action: RegistrationsAction,
}

#[derive(Subcommand, Debug)]
pub enum RegistrationsAction {
    /// List your registrations
    List,
    /// Show one registration with its status description
    Show { id: Uuid },
}

// =============================================================================
// Dependents
// =============================================================================

#[derive(Parser, Debug)]
pub struct PersonsArgs {
    #[command(subcommand)]
    pub action: PersonsAction,
}

#[derive(Subcommand, Debug)]
pub enum PersonsAction {
    /// List your dependents
    List,
    /// Add a dependent
    Add {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        national_code: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: String,
        /// spouse, child, parent, sibling, or other
        #[arg(long)]
        relation: String,
    },
    /// Update a dependent
    Update {
        id: Uuid,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        national_code: Option<String>,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: Option<String>,
        #[arg(long)]
        relation: Option<String>,
    },
    /// Delete a dependent
    Delete {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

// =============================================================================
// Documents
// =============================================================================

#[derive(Parser, Debug)]
pub struct DocumentsArgs {
    #[command(subcommand)]
    pub action: DocumentsAction,
}

#[derive(Subcommand, Debug)]
pub enum DocumentsAction {
    /// List your documents
    List,
    /// Upload a document (max 10 MB; PDF, JPG, PNG, DOC, DOCX, ZIP, RAR)
    Upload {
        /// Path of the file to upload
        #[arg(long)]
        file: std::path::PathBuf,
        /// Document type (national_id, birth_certificate, ...)
        #[arg(long = "type")]
        document_type: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Attach to a registration
        #[arg(long)]
        registration: Option<Uuid>,
        /// Attach to a dependent
        #[arg(long)]
        person: Option<Uuid>,
    },
    /// Download a document's file
    Download {
        id: Uuid,
        /// Output path (defaults to the stored file name)
        #[arg(long)]
        output: Option<std::path::PathBuf>,
    },
    /// Delete a document
    Delete {
        id: Uuid,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

// =============================================================================
// Locations
// =============================================================================

#[derive(Parser, Debug)]
pub struct LocationsArgs {
    #[command(subcommand)]
    pub action: LocationsAction,
}

#[derive(Subcommand, Debug)]
pub enum LocationsAction {
    /// List states
    States,
    /// List cities of a state
    Cities {
        #[arg(long)]
        state: Uuid,
    },
    /// List counties of a city
    Counties {
        #[arg(long)]
        city: Uuid,
    },
    /// List regions of a county
    Regions {
        #[arg(long)]
        county: Uuid,
    },
    /// List districts of a region
    Districts {
        #[arg(long)]
        region: Uuid,
    },
    /// List schools of a district
    Schools {
        #[arg(long)]
        district: Uuid,
    },
}

// =============================================================================
// Admin
// =============================================================================

/// Location tiers manageable through the generic admin CRUD. Schools carry
/// extra fields and have their own subcommand.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LocationTier {
    State,
    City,
    County,
    Region,
    District,
}

impl From<LocationTier> for Tier {
    fn from(tier: LocationTier) -> Self {
        match tier {
            LocationTier::State => Tier::State,
            LocationTier::City => Tier::City,
            LocationTier::County => Tier::County,
            LocationTier::Region => Tier::Region,
            LocationTier::District => Tier::District,
        }
    }
}

#[derive(Parser, Debug)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub action: AdminAction,
}

#[derive(Subcommand, Debug)]
pub enum AdminAction {
    /// Plan catalog management
    Plans {
        #[command(subcommand)]
        action: AdminPlansAction,
    },
    /// Coverage catalog management
    Coverages {
        #[command(subcommand)]
        action: AdminCoveragesAction,
    },
    /// Location hierarchy management (tiers above School)
    Locations {
        #[command(subcommand)]
        action: AdminLocationsAction,
    },
    /// School management
    Schools {
        #[command(subcommand)]
        action: AdminSchoolsAction,
    },
    /// Registration review and status transitions
    Registrations {
        #[command(subcommand)]
        action: AdminRegistrationsAction,
    },
    /// User account management
    Users {
        #[command(subcommand)]
        action: AdminUsersAction,
    },
    /// Dependents across all accounts
    Persons {
        #[command(subcommand)]
        action: AdminPersonsAction,
    },
    /// Document review
    Documents {
        #[command(subcommand)]
        action: AdminDocumentsAction,
    },
    /// Dashboard statistics
    Stats {
        #[command(subcommand)]
        action: AdminStatsAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminPlansAction {
    List,
    Create {
        #[arg(long)]
        name: String,
        /// basic, standard, or premium
        #[arg(long = "type")]
        plan_type: String,
        #[arg(long)]
        description: String,
        /// Monthly premium in rials
        #[arg(long)]
        premium: f64,
    },
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "type")]
        plan_type: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        premium: Option<f64>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        id: Uuid,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminCoveragesAction {
    List,
    Create {
        #[arg(long)]
        plan: Uuid,
        /// outpatient, hospitalization, medication, ...
        #[arg(long = "type")]
        coverage_type: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Reimbursement cap in rials
        #[arg(long)]
        amount: f64,
        /// Percentage reimbursed (0-100)
        #[arg(long)]
        percentage: i64,
        /// Uses per year (unlimited when omitted)
        #[arg(long)]
        max_usage: Option<u32>,
    },
    Update {
        id: Uuid,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        amount: Option<f64>,
        #[arg(long)]
        percentage: Option<i64>,
        #[arg(long)]
        max_usage: Option<u32>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        id: Uuid,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminLocationsAction {
    List {
        tier: LocationTier,
    },
    Create {
        tier: LocationTier,
        #[arg(long)]
        name: String,
        #[arg(long)]
        code: String,
        /// Parent node id (required for every tier except state)
        #[arg(long)]
        parent: Option<Uuid>,
    },
    Update {
        tier: LocationTier,
        id: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long)]
        code: String,
    },
    Delete {
        tier: LocationTier,
        id: Uuid,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminSchoolsAction {
    List,
    /// Create a school; the district chain is validated top-down
    Create {
        #[arg(long)]
        state: Uuid,
        #[arg(long)]
        city: Uuid,
        #[arg(long)]
        county: Uuid,
        #[arg(long)]
        region: Uuid,
        #[arg(long)]
        district: Uuid,
        #[arg(long)]
        name: String,
        #[arg(long)]
        code: String,
        /// elementary, middle, high, or combined
        #[arg(long = "type")]
        school_type: String,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    Update {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        code: Option<String>,
        #[arg(long = "type")]
        school_type: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    Delete {
        id: Uuid,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminRegistrationsAction {
    List,
    Show {
        id: Uuid,
    },
    /// Transition a registration's status
    SetStatus {
        id: Uuid,
        /// pending, approved, rejected, active, expired, or cancelled
        #[arg(long)]
        status: String,
        /// Coverage start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,
        /// Coverage end date (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminUsersAction {
    List,
    /// Enable or disable an account, or change its admin flag
    Update {
        id: Uuid,
        #[arg(long)]
        active: Option<bool>,
        #[arg(long)]
        admin: Option<bool>,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminPersonsAction {
    /// List every account's dependents
    List,
}

#[derive(Subcommand, Debug)]
pub enum AdminDocumentsAction {
    /// List every user's documents
    List,
    /// Mark a document verified
    Verify { id: Uuid },
    /// Remove the verified mark
    Unverify { id: Uuid },
}

#[derive(Subcommand, Debug)]
pub enum AdminStatsAction {
    Overview,
    Registrations,
    Persons,
    Plans,
}
