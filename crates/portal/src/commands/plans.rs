//! Plan browsing commands.

use client::Portal;
use common::AppResult;

use crate::cli::args::PlansAction;
use crate::output;

/// Execute a plans subcommand
pub async fn execute(action: PlansAction, portal: &Portal) -> AppResult<()> {
    match action {
        PlansAction::List => {
            let plans = portal.insurance.plans().await?;
            output::print_plans(&plans);
            Ok(())
        }
        PlansAction::Show { id } => {
            let plan = portal.insurance.plan(id).await?;
            output::print_plan_detail(&plan);
            Ok(())
        }
    }
}
