//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Identity
// =============================================================================

/// Exact length of a national id / national code
pub const NATIONAL_ID_LENGTH: usize = 10;

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Exact length of a mobile phone number
pub const PHONE_LENGTH: usize = 11;

// =============================================================================
// Coverage
// =============================================================================

/// Lower bound of a coverage percentage (inclusive)
pub const MIN_COVERAGE_PERCENTAGE: i64 = 0;

/// Upper bound of a coverage percentage (inclusive)
pub const MAX_COVERAGE_PERCENTAGE: i64 = 100;

// =============================================================================
// Documents
// =============================================================================

/// Maximum accepted upload size in bytes (10 MB)
pub const MAX_DOCUMENT_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types accepted for document upload
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "image/jpeg",
    "image/jpg",
    "image/png",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/zip",
    "application/x-rar-compressed",
];

/// File extensions accepted for document upload
pub const ALLOWED_EXTENSIONS: &[&str] =
    &["pdf", "jpg", "jpeg", "png", "doc", "docx", "zip", "rar"];

/// Check if a MIME type is in the upload allow-list
pub fn is_allowed_mime_type(mime: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&mime)
}

/// Check if a file extension (without the dot, any case) is accepted
pub fn is_allowed_extension(ext: &str) -> bool {
    let ext = ext.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str())
}

// =============================================================================
// Authentication
// =============================================================================

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Token type identifier returned by the API
pub const TOKEN_TYPE_BEARER: &str = "bearer";
