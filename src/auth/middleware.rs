use thiserror::Error;

use super::token::{Claims, TokenService, TokenValidation};

const BEARER_PREFIX: &str = "Bearer ";

/// Returned for every authorization failure. Carries no reason on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unauthorized")]
pub struct Unauthorized;

/// Resolves an `Authorization` header value to the caller's claims.
pub fn authorize(header: Option<&str>, tokens: &TokenService) -> Result<Claims, Unauthorized> {
    let token = header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or(Unauthorized)?;

    match tokens.validate(token) {
        TokenValidation::Valid(claims) => Ok(claims),
        TokenValidation::Invalid => Err(Unauthorized),
    }
}
