//! Registration listing commands (user-facing).

use client::Portal;
use common::AppResult;

use crate::cli::args::RegistrationsAction;
use crate::output;

/// Execute a registrations subcommand
pub async fn execute(action: RegistrationsAction, portal: &Portal) -> AppResult<()> {
    match action {
        RegistrationsAction::List => {
            let registrations = portal.insurance.registrations().await?;
            output::print_registrations(&registrations);
            Ok(())
        }
        RegistrationsAction::Show { id } => {
            let registration = portal.insurance.registration(id).await?;
            output::print_registration_detail(&registration);
            Ok(())
        }
    }
}
