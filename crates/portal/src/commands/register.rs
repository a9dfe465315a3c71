//! Insurance registration flow.
//!
//! Resolves the school through the cascade top-down so every id is checked
//! against its parent's option list; submission is blocked until the chain
//! through School is complete.

use client::Portal;
use common::{AppError, AppResult};
use domain::Tier;

use crate::cli::args::RegisterArgs;

/// Execute the registration flow
pub async fn execute(args: RegisterArgs, portal: &Portal) -> AppResult<()> {
    let mut cascade = portal.cascade();
    cascade.load_states().await?;

    let chain = [
        (Tier::State, args.state),
        (Tier::City, args.city),
        (Tier::County, args.county),
        (Tier::Region, args.region),
        (Tier::District, args.district),
        (Tier::School, args.school),
    ];
    for (tier, id) in chain {
        cascade.select(tier, Some(id)).await?;
    }

    if !cascade.is_complete_through(Tier::School) {
        return Err(AppError::validation("School selection is required"));
    }
    let school_id = cascade
        .selection(Tier::School)
        .ok_or_else(|| AppError::validation("School selection is required"))?;

    let registration = portal.insurance.register(args.plan, school_id).await?;

    println!("ثبت‌نام با موفقیت انجام شد");
    println!(
        "Registration {} is {}",
        registration.id,
        registration.status.label_fa()
    );
    println!("{}", registration.status.description_fa());
    Ok(())
}
