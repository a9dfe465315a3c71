//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User roles derived from the account's admin flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Check if this role can access a required role
    pub fn can_access(&self, required: UserRole) -> bool {
        match self {
            UserRole::Admin => true,
            UserRole::User => matches!(required, UserRole::User),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::User => write!(f, "user"),
        }
    }
}

/// User account as returned by the API.
///
/// The portal never holds an authoritative copy; this struct mirrors the
/// profile payload and is re-fetched after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub national_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub is_admin: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl User {
    /// Role implied by the admin flag.
    pub fn role(&self) -> UserRole {
        if self.is_admin {
            UserRole::Admin
        } else {
            UserRole::User
        }
    }

    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_flag_maps_to_role() {
        let mut user = User {
            id: Uuid::new_v4(),
            national_id: "0012345678".to_string(),
            email: None,
            first_name: "Sara".to_string(),
            last_name: "Ahmadi".to_string(),
            phone: None,
            is_admin: false,
            is_active: true,
        };
        assert_eq!(user.role(), UserRole::User);
        assert!(!user.role().can_access(UserRole::Admin));

        user.is_admin = true;
        assert!(user.role().is_admin());
        assert!(user.role().can_access(UserRole::User));
    }
}
