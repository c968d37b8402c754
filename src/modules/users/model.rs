use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role stored inside a user document under the `role` key.
///
/// Documents are schemaless, so any user may lack the key entirely or carry
/// an unrecognized value; both read back as [`UserRole::Unset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Surveyor,
    #[default]
    Unset,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Surveyor => "surveyor",
            UserRole::Unset => "unset",
        }
    }

    /// Parses a stored role string, treating anything unrecognized as unset.
    pub fn parse(value: &str) -> Self {
        match value {
            "admin" => UserRole::Admin,
            "surveyor" => UserRole::Surveyor,
            _ => UserRole::Unset,
        }
    }
}

/// Response body for the admin status check.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminStatus {
    pub admin: bool,
}

/// Response body for the surveyor status check.
#[derive(Debug, Serialize, ToSchema)]
pub struct SurveyorStatus {
    pub surveyor: bool,
}
