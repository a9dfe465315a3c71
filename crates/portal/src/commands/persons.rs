//! Dependent management commands.

use std::str::FromStr;

use chrono::NaiveDate;

use client::persons::{CreatePersonRequest, UpdatePersonRequest};
use client::Portal;
use common::{AppError, AppResult};
use domain::Relation;

use crate::cli::args::PersonsAction;
use crate::output;
use crate::prompt::confirm_unless;

fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::validation("Dates must be in YYYY-MM-DD format"))
}

/// Execute a persons subcommand
pub async fn execute(action: PersonsAction, portal: &Portal) -> AppResult<()> {
    match action {
        PersonsAction::List => {
            let persons = portal.persons.list().await?;
            output::print_persons(&persons);
            Ok(())
        }
        PersonsAction::Add {
            first_name,
            last_name,
            national_code,
            birth_date,
            relation,
        } => {
            let payload = CreatePersonRequest {
                first_name,
                last_name,
                national_code,
                birth_date: parse_date(&birth_date)?,
                relation: Relation::from_str(&relation)?,
            };
            let person = portal.persons.create(&payload).await?;
            println!("Added {} ({})", person.full_name(), person.relation.label_fa());
            Ok(())
        }
        PersonsAction::Update {
            id,
            first_name,
            last_name,
            national_code,
            birth_date,
            relation,
        } => {
            let payload = UpdatePersonRequest {
                first_name,
                last_name,
                national_code,
                birth_date: birth_date.as_deref().map(parse_date).transpose()?,
                relation: relation.as_deref().map(Relation::from_str).transpose()?,
            };
            let person = portal.persons.update(id, &payload).await?;
            println!("Updated {}", person.full_name());
            Ok(())
        }
        PersonsAction::Delete { id, yes } => {
            if !confirm_unless(yes, "Delete this dependent?")? {
                println!("Cancelled.");
                return Ok(());
            }
            portal.persons.delete(id).await?;
            println!("Deleted.");
            Ok(())
        }
    }
}
