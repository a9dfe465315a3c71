//! Uploaded document entity and upload preconditions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    is_allowed_extension, is_allowed_mime_type, MAX_DOCUMENT_SIZE_BYTES,
};
use crate::error::{DomainError, DomainResult};

/// Kind of supporting document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    NationalId,
    BirthCertificate,
    MarriageCertificate,
    EmploymentLetter,
    InsuranceRequest,
    MedicalRecords,
    Other,
}

/// All document types, in form order
pub const ALL_DOCUMENT_TYPES: &[DocumentType] = &[
    DocumentType::NationalId,
    DocumentType::BirthCertificate,
    DocumentType::MarriageCertificate,
    DocumentType::EmploymentLetter,
    DocumentType::InsuranceRequest,
    DocumentType::MedicalRecords,
    DocumentType::Other,
];

impl DocumentType {
    /// Canonical wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::NationalId => "national_id",
            DocumentType::BirthCertificate => "birth_certificate",
            DocumentType::MarriageCertificate => "marriage_certificate",
            DocumentType::EmploymentLetter => "employment_letter",
            DocumentType::InsuranceRequest => "insurance_request",
            DocumentType::MedicalRecords => "medical_records",
            DocumentType::Other => "other",
        }
    }

    /// Persian display label
    pub fn label_fa(&self) -> &'static str {
        match self {
            DocumentType::NationalId => "کارت ملی",
            DocumentType::BirthCertificate => "شناسنامه",
            DocumentType::MarriageCertificate => "سند ازدواج",
            DocumentType::EmploymentLetter => "حکم کارگزینی",
            DocumentType::InsuranceRequest => "فرم درخواست بیمه",
            DocumentType::MedicalRecords => "مدارک پزشکی",
            DocumentType::Other => "سایر",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DocumentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_DOCUMENT_TYPES
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| DomainError::validation(format!("Invalid document type '{}'", s)))
    }
}

/// Document as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub document_type: DocumentType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub file_name: String,
    pub file_size: u64,
    pub file_size_mb: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<Uuid>,
}

/// Document with owner details, as returned by the admin listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentWithUser {
    #[serde(flatten)]
    pub document: Document,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
}

/// File extension (without the dot, lowercased) of a file name.
pub fn file_extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
}

/// MIME type implied by a file name's extension, for allow-listed types.
pub fn mime_for_file_name(file_name: &str) -> Option<&'static str> {
    match file_extension(file_name)?.as_str() {
        "pdf" => Some("application/pdf"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "doc" => Some("application/msword"),
        "docx" => {
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        }
        "zip" => Some("application/zip"),
        "rar" => Some("application/x-rar-compressed"),
        _ => None,
    }
}

/// Validate an upload before any network call is made.
///
/// # Errors
/// Rejects files over 10 MB, files without an accepted extension, and MIME
/// types outside the allow-list.
pub fn validate_upload(file_name: &str, file_size: u64, mime_type: &str) -> DomainResult<()> {
    if file_size > MAX_DOCUMENT_SIZE_BYTES {
        return Err(DomainError::validation(
            "حجم فایل نباید بیشتر از 10 مگابایت باشد",
        ));
    }

    let extension_ok = file_extension(file_name)
        .map(|ext| is_allowed_extension(&ext))
        .unwrap_or(false);

    if !extension_ok || !is_allowed_mime_type(mime_type) {
        return Err(DomainError::validation(
            "فرمت فایل مجاز نیست. فرمت‌های مجاز: PDF, JPG, PNG, DOC, DOCX, ZIP, RAR",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_ten_megabytes_is_accepted() {
        assert!(validate_upload("scan.pdf", MAX_DOCUMENT_SIZE_BYTES, "application/pdf").is_ok());
    }

    #[test]
    fn oversized_file_is_rejected() {
        let err = validate_upload("scan.pdf", MAX_DOCUMENT_SIZE_BYTES + 1, "application/pdf");
        assert!(err.is_err());
    }

    #[test]
    fn disallowed_mime_type_is_rejected() {
        assert!(validate_upload("movie.pdf", 1024, "video/mp4").is_err());
    }

    #[test]
    fn disallowed_extension_is_rejected() {
        assert!(validate_upload("script.exe", 1024, "application/pdf").is_err());
        assert!(validate_upload("noextension", 1024, "application/pdf").is_err());
    }

    #[test]
    fn mime_is_derived_from_extension() {
        assert_eq!(mime_for_file_name("Photo.JPG"), Some("image/jpeg"));
        assert_eq!(mime_for_file_name("letter.docx"), Some(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ));
        assert_eq!(mime_for_file_name("archive.tar.gz"), None);
    }
}
