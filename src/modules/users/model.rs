//! User data models and DTOs.
//!
//! [`User`] is the stored document, including the bcrypt hash and the email
//! verification token. It is never serialized to clients directly;
//! responses and the admin listing use [`PublicUser`], which carries no
//! credential material.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// Closed set of roles a session credential can carry. Tokens with any
/// other role string fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Administrator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Administrator => "administrator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user document in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    /// bcrypt hash, never the plaintext.
    pub password: String,
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_token: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// Client-facing projection of a [`User`].
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PublicUser {
    pub id: String,
    pub email: String,
    pub verified: bool,
    pub role: Role,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            email: user.email,
            verified: user.verified,
            role: user.role,
        }
    }
}

/// DTO for admin user creation. The password is hashed before storage; role
/// and verified default to a fresh regular account when absent.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub role: Option<Role>,
    pub verified: Option<bool>,
}

/// DTO for self-service profile updates. Only the fields present are
/// written back.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    pub id: String,
    #[validate(email)]
    pub email: Option<String>,
}

/// DTO for changing the account password. The old password is verified
/// before the new hash is stored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ChangePasswordDto {
    pub user_id: String,
    #[validate(length(min = 1))]
    pub old_password: String,
    #[validate(length(min = 8))]
    pub new_password: String,
}

/// `?id=` query parameter used by the delete endpoints.
#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct IdQuery {
    pub id: String,
}
