//! Document management commands.

use std::path::PathBuf;
use std::str::FromStr;

use client::documents::UploadRequest;
use client::Portal;
use common::AppResult;
use domain::DocumentType;

use crate::cli::args::DocumentsAction;
use crate::output;
use crate::prompt::confirm_unless;

/// Execute a documents subcommand
pub async fn execute(action: DocumentsAction, portal: &Portal) -> AppResult<()> {
    match action {
        DocumentsAction::List => {
            let list = portal.documents.list().await?;
            output::print_documents(&list);
            Ok(())
        }
        DocumentsAction::Upload {
            file,
            document_type,
            title,
            description,
            registration,
            person,
        } => {
            let request = UploadRequest {
                file_path: file,
                document_type: DocumentType::from_str(&document_type)?,
                title,
                description,
                registration_id: registration,
                person_id: person,
            };
            let document = portal.documents.upload(&request).await?;
            println!(
                "Uploaded {} ({:.2} MB) as {}",
                document.file_name,
                document.file_size_mb,
                document.document_type.label_fa()
            );
            Ok(())
        }
        DocumentsAction::Download { id, output } => {
            let document = portal.documents.get(id).await?;
            let bytes = portal.documents.download(id).await?;
            let path = output.unwrap_or_else(|| PathBuf::from(&document.file_name));
            tokio::fs::write(&path, bytes).await?;
            println!("Saved {}", path.display());
            Ok(())
        }
        DocumentsAction::Delete { id, yes } => {
            if !confirm_unless(yes, "Delete this document?")? {
                println!("Cancelled.");
                return Ok(());
            }
            portal.documents.delete(id).await?;
            println!("Deleted.");
            Ok(())
        }
    }
}
