//! Document upload and lifecycle endpoints.
//!
//! Size and MIME-type constraints are enforced before any network call is
//! made; an invalid file never leaves the machine.

use std::path::PathBuf;

use reqwest::multipart;
use serde::Deserialize;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{
    mime_for_file_name, validate_upload, Document, DocumentType, DocumentWithUser,
};

use crate::http::Http;

/// Upload parameters; the file is read from disk at submission time.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_path: PathBuf,
    pub document_type: DocumentType,
    pub title: String,
    pub description: Option<String>,
    pub registration_id: Option<Uuid>,
    pub person_id: Option<Uuid>,
}

/// Paged list of the caller's documents.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentList {
    pub documents: Vec<Document>,
    pub total: u64,
}

/// Admin listing with owner details.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentWithUserList {
    pub documents: Vec<DocumentWithUser>,
    pub total: u64,
}

/// Client for the `/documents` endpoint group.
pub struct DocumentsClient {
    http: Http,
}

impl DocumentsClient {
    pub fn new(http: Http) -> Self {
        Self { http }
    }

    /// Upload a supporting document.
    ///
    /// # Errors
    /// Returns a validation error without touching the network when the
    /// title is empty, the file exceeds 10 MB, or its type is outside the
    /// allow-list.
    pub async fn upload(&self, request: &UploadRequest) -> AppResult<Document> {
        if request.title.trim().is_empty() {
            return Err(AppError::validation("لطفاً عنوان مدرک را وارد کنید"));
        }

        let file_name = request
            .file_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| AppError::validation("Invalid file name"))?
            .to_string();

        let mime_type = mime_for_file_name(&file_name).ok_or_else(|| {
            AppError::validation("فرمت فایل مجاز نیست. فرمت‌های مجاز: PDF, JPG, PNG, DOC, DOCX, ZIP, RAR")
        })?;

        let metadata = tokio::fs::metadata(&request.file_path).await?;
        validate_upload(&file_name, metadata.len(), mime_type)?;

        let bytes = tokio::fs::read(&request.file_path).await?;

        let file_part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime_type)
            .map_err(|e| AppError::internal(format!("Invalid MIME type: {}", e)))?;

        let mut form = multipart::Form::new()
            .part("file", file_part)
            .text("document_type", request.document_type.as_str())
            .text("title", request.title.clone());

        if let Some(description) = &request.description {
            form = form.text("description", description.clone());
        }
        if let Some(registration_id) = request.registration_id {
            form = form.text("registration_id", registration_id.to_string());
        }
        if let Some(person_id) = request.person_id {
            form = form.text("person_id", person_id.to_string());
        }

        self.http.post_multipart("/documents/upload", form).await
    }

    /// The caller's own documents.
    pub async fn list(&self) -> AppResult<DocumentList> {
        self.http.get("/documents/").await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Document> {
        self.http.get(&format!("/documents/{}", id)).await
    }

    /// Raw file content.
    pub async fn download(&self, id: Uuid) -> AppResult<Vec<u8>> {
        self.http
            .get_bytes(&format!("/documents/{}/download", id))
            .await
    }

    /// Delete a document. Confirmation happens at the call site.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.http.delete(&format!("/documents/{}", id)).await
    }

    /// Mark a document verified (admin only).
    pub async fn verify(&self, id: Uuid) -> AppResult<Document> {
        self.http.patch(&format!("/documents/{}/verify", id)).await
    }

    /// Remove the verified mark (admin only).
    pub async fn unverify(&self, id: Uuid) -> AppResult<Document> {
        self.http
            .patch(&format!("/documents/{}/unverify", id))
            .await
    }

    /// Every user's documents with owner details (admin only).
    pub async fn admin_list(&self) -> AppResult<DocumentWithUserList> {
        self.http.get("/documents/admin/all").await
    }
}
