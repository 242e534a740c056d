use serde::Serialize;

use crate::auth::Claims;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Identity of the caller as carried by their token.
#[derive(Debug, Serialize)]
pub struct IdentityDto {
    pub id: i32,
    pub username: String,
    pub role: String,
}

impl From<Claims> for IdentityDto {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.user_id,
            username: claims.username,
            role: claims.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}
