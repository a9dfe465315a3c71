//! Location hierarchy browsing commands.

use client::Portal;
use common::AppResult;
use domain::LocationNode;

use crate::cli::args::LocationsAction;
use crate::output;

/// Execute a locations subcommand
pub async fn execute(action: LocationsAction, portal: &Portal) -> AppResult<()> {
    match action {
        LocationsAction::States => {
            let nodes: Vec<LocationNode> = portal
                .locations
                .states()
                .await?
                .into_iter()
                .map(Into::into)
                .collect();
            output::print_locations(&nodes);
        }
        LocationsAction::Cities { state } => {
            let nodes: Vec<LocationNode> = portal
                .locations
                .cities(state)
                .await?
                .into_iter()
                .map(Into::into)
                .collect();
            output::print_locations(&nodes);
        }
        LocationsAction::Counties { city } => {
            let nodes: Vec<LocationNode> = portal
                .locations
                .counties(city)
                .await?
                .into_iter()
                .map(Into::into)
                .collect();
            output::print_locations(&nodes);
        }
        LocationsAction::Regions { county } => {
            let nodes: Vec<LocationNode> = portal
                .locations
                .regions(county)
                .await?
                .into_iter()
                .map(Into::into)
                .collect();
            output::print_locations(&nodes);
        }
        LocationsAction::Districts { region } => {
            let nodes: Vec<LocationNode> = portal
                .locations
                .districts(region)
                .await?
                .into_iter()
                .map(Into::into)
                .collect();
            output::print_locations(&nodes);
        }
        LocationsAction::Schools { district } => {
            let schools = portal.locations.schools(district).await?;
            output::print_schools(&schools);
        }
    }
    Ok(())
}
