//! Admin commands.
//!
//! Every subcommand runs behind a single capability check: the profile is
//! fetched once and must carry the admin flag before any admin output is
//! produced. An API-side 403 surfaces as the same access-denied notice.

use std::str::FromStr;

use chrono::NaiveDate;

use client::admin::{
    CreateCoverageRequest, CreatePlanRequest, CreateSchoolRequest, LocationPayload,
    UpdateCoverageRequest, UpdatePlanRequest, UpdateSchoolRequest, UpdateUserRequest,
};
use client::session::require_admin;
use client::Portal;
use common::{AppError, AppResult};
use domain::{
    validate_coverage_percentage, CoverageType, PlanType, RegistrationStatus, SchoolType, Tier,
};

use crate::cli::args::{
    AdminAction, AdminCoveragesAction, AdminDocumentsAction, AdminLocationsAction,
    AdminPersonsAction, AdminPlansAction, AdminRegistrationsAction, AdminSchoolsAction,
    AdminStatsAction, AdminUsersAction,
};
use crate::output;
use crate::prompt::confirm_unless;

fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::validation("Dates must be in YYYY-MM-DD format"))
}

/// Execute an admin subcommand
pub async fn execute(action: AdminAction, portal: &Portal) -> AppResult<()> {
    let profile = portal.auth.me().await?;
    require_admin(&profile)?;

    match action {
        AdminAction::Plans { action } => plans(action, portal).await,
        AdminAction::Coverages { action } => coverages(action, portal).await,
        AdminAction::Locations { action } => locations(action, portal).await,
        AdminAction::Schools { action } => schools(action, portal).await,
        AdminAction::Registrations { action } => registrations(action, portal).await,
        AdminAction::Users { action } => users(action, portal).await,
        AdminAction::Persons { action } => persons(action, portal).await,
        AdminAction::Documents { action } => documents(action, portal).await,
        AdminAction::Stats { action } => stats(action, portal).await,
    }
}

async fn plans(action: AdminPlansAction, portal: &Portal) -> AppResult<()> {
    match action {
        AdminPlansAction::List => {
            let plans = portal.admin.plans().await?;
            output::print_plans(&plans);
        }
        AdminPlansAction::Create {
            name,
            plan_type,
            description,
            premium,
        } => {
            let plan = portal
                .admin
                .create_plan(&CreatePlanRequest {
                    name_fa: name,
                    plan_type: PlanType::from_str(&plan_type)?,
                    description_fa: description,
                    monthly_premium: premium,
                })
                .await?;
            println!("Created plan {} ({})", plan.name_fa, plan.id);
        }
        AdminPlansAction::Update {
            id,
            name,
            plan_type,
            description,
            premium,
            active,
        } => {
            let payload = UpdatePlanRequest {
                name_fa: name,
                plan_type: plan_type.as_deref().map(PlanType::from_str).transpose()?,
                description_fa: description,
                monthly_premium: premium,
                is_active: active,
            };
            let plan = portal.admin.update_plan(id, &payload).await?;
            println!("Updated plan {}", plan.name_fa);
        }
        AdminPlansAction::Delete { id, yes } => {
            if !confirm_unless(yes, "Delete this plan and its coverages?")? {
                println!("Cancelled.");
                return Ok(());
            }
            portal.admin.delete_plan(id).await?;
            println!("Deleted.");
        }
    }
    Ok(())
}

async fn coverages(action: AdminCoveragesAction, portal: &Portal) -> AppResult<()> {
    match action {
        AdminCoveragesAction::List => {
            let coverages = portal.admin.coverages().await?;
            output::print_coverages(&coverages);
        }
        AdminCoveragesAction::Create {
            plan,
            coverage_type,
            title,
            description,
            amount,
            percentage,
            max_usage,
        } => {
            validate_coverage_percentage(percentage)?;
            let coverage = portal
                .admin
                .create_coverage(&CreateCoverageRequest {
                    plan_id: plan,
                    coverage_type: CoverageType::from_str(&coverage_type)?,
                    title_fa: title,
                    description_fa: description,
                    coverage_amount: amount,
                    coverage_percentage: percentage,
                    max_usage_count: max_usage,
                })
                .await?;
            println!("Created coverage {} ({})", coverage.title_fa, coverage.id);
        }
        AdminCoveragesAction::Update {
            id,
            title,
            description,
            amount,
            percentage,
            max_usage,
            active,
        } => {
            if let Some(percentage) = percentage {
                validate_coverage_percentage(percentage)?;
            }
            let payload = UpdateCoverageRequest {
                title_fa: title,
                description_fa: description,
                coverage_amount: amount,
                coverage_percentage: percentage,
                max_usage_count: max_usage,
                is_active: active,
            };
            let coverage = portal.admin.update_coverage(id, &payload).await?;
            println!("Updated coverage {}", coverage.title_fa);
        }
        AdminCoveragesAction::Delete { id, yes } => {
            if !confirm_unless(yes, "Delete this coverage?")? {
                println!("Cancelled.");
                return Ok(());
            }
            portal.admin.delete_coverage(id).await?;
            println!("Deleted.");
        }
    }
    Ok(())
}

async fn locations(action: AdminLocationsAction, portal: &Portal) -> AppResult<()> {
    match action {
        AdminLocationsAction::List { tier } => {
            let nodes = portal.admin.locations(tier.into()).await?;
            output::print_locations(&nodes);
        }
        AdminLocationsAction::Create {
            tier,
            name,
            code,
            parent,
        } => {
            let node = portal
                .admin
                .create_location(
                    tier.into(),
                    parent,
                    &LocationPayload {
                        name_fa: name,
                        code,
                    },
                )
                .await?;
            println!("Created {} ({})", node.name_fa, node.id);
        }
        AdminLocationsAction::Update {
            tier,
            id,
            name,
            code,
        } => {
            let node = portal
                .admin
                .update_location(
                    tier.into(),
                    id,
                    &LocationPayload {
                        name_fa: name,
                        code,
                    },
                )
                .await?;
            println!("Updated {}", node.name_fa);
        }
        AdminLocationsAction::Delete { tier, id, yes } => {
            if !confirm_unless(yes, "Delete this location and everything under it?")? {
                println!("Cancelled.");
                return Ok(());
            }
            portal.admin.delete_location(tier.into(), id).await?;
            println!("Deleted.");
        }
    }
    Ok(())
}

async fn schools(action: AdminSchoolsAction, portal: &Portal) -> AppResult<()> {
    match action {
        AdminSchoolsAction::List => {
            let schools = portal.admin.schools().await?;
            output::print_schools(&schools);
        }
        AdminSchoolsAction::Create {
            state,
            city,
            county,
            region,
            district,
            name,
            code,
            school_type,
            address,
            phone,
        } => {
            // School creation needs the chain resolved through District;
            // each id is checked against its parent's option list.
            let mut cascade = portal.cascade();
            cascade.load_states().await?;
            let chain = [
                (Tier::State, state),
                (Tier::City, city),
                (Tier::County, county),
                (Tier::Region, region),
                (Tier::District, district),
            ];
            for (tier, id) in chain {
                cascade.select(tier, Some(id)).await?;
            }
            if !cascade.is_complete_through(Tier::District) {
                return Err(AppError::validation("District selection is required"));
            }

            let school = portal
                .admin
                .create_school(&CreateSchoolRequest {
                    district_id: district,
                    name_fa: name,
                    code,
                    school_type: SchoolType::from_str(&school_type)?,
                    address,
                    phone,
                })
                .await?;
            println!("Created school {} ({})", school.name_fa, school.id);
        }
        AdminSchoolsAction::Update {
            id,
            name,
            code,
            school_type,
            address,
            phone,
        } => {
            let payload = UpdateSchoolRequest {
                name_fa: name,
                code,
                school_type: school_type.as_deref().map(SchoolType::from_str).transpose()?,
                address,
                phone,
            };
            let school = portal.admin.update_school(id, &payload).await?;
            println!("Updated school {}", school.name_fa);
        }
        AdminSchoolsAction::Delete { id, yes } => {
            if !confirm_unless(yes, "Delete this school?")? {
                println!("Cancelled.");
                return Ok(());
            }
            portal.admin.delete_school(id).await?;
            println!("Deleted.");
        }
    }
    Ok(())
}

async fn registrations(action: AdminRegistrationsAction, portal: &Portal) -> AppResult<()> {
    match action {
        AdminRegistrationsAction::List => {
            let registrations = portal.registrations.list().await?;
            output::print_registrations(&registrations);
        }
        AdminRegistrationsAction::Show { id } => {
            let registration = portal.registrations.get(id).await?;
            output::print_registration_detail(&registration);
        }
        AdminRegistrationsAction::SetStatus {
            id,
            status,
            start_date,
            end_date,
        } => {
            let updated = portal
                .registrations
                .set_status(
                    id,
                    RegistrationStatus::from_str(&status)?,
                    start_date.as_deref().map(parse_date).transpose()?,
                    end_date.as_deref().map(parse_date).transpose()?,
                )
                .await?;
            println!(
                "Registration {} is now {}",
                updated.id,
                updated.status.label_fa()
            );
        }
    }
    Ok(())
}

async fn users(action: AdminUsersAction, portal: &Portal) -> AppResult<()> {
    match action {
        AdminUsersAction::List => {
            let users = portal.admin.users().await?;
            output::print_users(&users);
        }
        AdminUsersAction::Update { id, active, admin } => {
            let user = portal
                .admin
                .update_user(
                    id,
                    &UpdateUserRequest {
                        is_active: active,
                        is_admin: admin,
                    },
                )
                .await?;
            println!(
                "Updated {}: admin={}, active={}",
                user.full_name(),
                user.is_admin,
                user.is_active
            );
        }
    }
    Ok(())
}

async fn persons(action: AdminPersonsAction, portal: &Portal) -> AppResult<()> {
    match action {
        AdminPersonsAction::List => {
            let persons = portal.admin.persons().await?;
            output::print_persons(&persons);
        }
    }
    Ok(())
}

async fn documents(action: AdminDocumentsAction, portal: &Portal) -> AppResult<()> {
    match action {
        AdminDocumentsAction::List => {
            let list = portal.documents.admin_list().await?;
            output::print_documents_with_users(&list.documents, list.total);
        }
        AdminDocumentsAction::Verify { id } => {
            let document = portal.documents.verify(id).await?;
            println!("Verified {}", document.title);
        }
        AdminDocumentsAction::Unverify { id } => {
            let document = portal.documents.unverify(id).await?;
            println!("Removed verification from {}", document.title);
        }
    }
    Ok(())
}

async fn stats(action: AdminStatsAction, portal: &Portal) -> AppResult<()> {
    match action {
        AdminStatsAction::Overview => {
            let stats = portal.statistics.admin_overview().await?;
            output::print_overview(&stats);
        }
        AdminStatsAction::Registrations => {
            let stats = portal.statistics.admin_registrations().await?;
            output::print_registration_stats(&stats);
        }
        AdminStatsAction::Persons => {
            let stats = portal.statistics.admin_persons().await?;
            output::print_person_stats(&stats);
        }
        AdminStatsAction::Plans => {
            let stats = portal.statistics.admin_plans().await?;
            output::print_plan_stats(&stats);
        }
    }
    Ok(())
}
