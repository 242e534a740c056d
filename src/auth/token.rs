//! Signed, time-limited bearer tokens (HS256 JWT).

use anyhow::{Context, Result};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{AuthConfig, ConfigError};

/// Identity and expiry carried inside a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub username: String,
    pub role: String,
    /// Absolute expiry, Unix seconds.
    pub exp: i64,
}

/// Outcome of validating a token. Failures carry no reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValidation {
    Valid(Claims),
    Invalid,
}

pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_seconds: i64,
}

impl TokenService {
    /// Builds the service from configuration. A missing secret is fatal.
    pub fn from_config(config: &AuthConfig) -> Result<Self, ConfigError> {
        let secret = config.secret()?;

        if config.token_ttl_seconds == 0 {
            return Err(ConfigError::ZeroTtl);
        }
        let ttl_seconds = i64::try_from(config.token_ttl_seconds).map_err(|_| {
            ConfigError::Invalid(format!(
                "token_ttl_seconds out of range: {}",
                config.token_ttl_seconds
            ))
        })?;

        Ok(Self::new(secret.as_bytes(), ttl_seconds))
    }

    fn new(secret: &[u8], ttl_seconds: i64) -> Self {
        // Expiry is checked here against a single clock with no leeway, so the
        // library check is turned off.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl_seconds,
        }
    }

    #[must_use]
    pub const fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    pub fn issue(&self, user_id: i32, username: &str, role: &str) -> Result<String> {
        self.issue_at(user_id, username, role, now())
    }

    pub fn issue_at(&self, user_id: i32, username: &str, role: &str, now: i64) -> Result<String> {
        let claims = Claims {
            user_id,
            username: username.to_string(),
            role: role.to_string(),
            exp: now.saturating_add(self.ttl_seconds),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .context("Failed to sign token")
    }

    #[must_use]
    pub fn validate(&self, token: &str) -> TokenValidation {
        self.validate_at(token, now())
    }

    /// Valid only if the signature checks out and `exp > now`.
    #[must_use]
    pub fn validate_at(&self, token: &str, now: i64) -> TokenValidation {
        match decode::<Claims>(token, &self.decoding, &self.validation) {
            Ok(data) if data.claims.exp > now => TokenValidation::Valid(data.claims),
            Ok(data) => {
                debug!(exp = data.claims.exp, now, "Rejected expired token");
                TokenValidation::Invalid
            }
            Err(e) => {
                debug!(error = %e, "Rejected token");
                TokenValidation::Invalid
            }
        }
    }
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_760_000_000;

    fn service() -> TokenService {
        TokenService::new(b"test-secret", 3600)
    }

    #[test]
    fn issued_token_validates_with_same_identity() {
        let tokens = service();
        let token = tokens.issue_at(7, "alice", "operator", NOW).unwrap();

        let TokenValidation::Valid(claims) = tokens.validate_at(&token, NOW) else {
            panic!("token should validate");
        };
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, "operator");
        assert_eq!(claims.exp, NOW + 3600);
    }

    #[test]
    fn issue_uses_wall_clock() {
        let tokens = service();
        let token = tokens.issue(1, "admin", "admin").unwrap();
        assert!(matches!(tokens.validate(&token), TokenValidation::Valid(_)));
    }

    #[test]
    fn expiry_is_exclusive() {
        let tokens = service();
        let token = tokens.issue_at(1, "admin", "admin", NOW).unwrap();
        let exp = NOW + 3600;

        assert!(matches!(
            tokens.validate_at(&token, exp - 1),
            TokenValidation::Valid(_)
        ));
        assert_eq!(tokens.validate_at(&token, exp), TokenValidation::Invalid);
        assert_eq!(tokens.validate_at(&token, exp + 60), TokenValidation::Invalid);
    }

    #[test]
    fn tampered_signature_is_invalid() {
        let tokens = service();
        let token = tokens.issue_at(1, "admin", "admin", NOW).unwrap();

        let sig_start = token.rfind('.').unwrap() + 1;
        let mut bytes = token.into_bytes();
        bytes[sig_start] = if bytes[sig_start] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert_eq!(tokens.validate_at(&tampered, NOW), TokenValidation::Invalid);
    }

    #[test]
    fn token_from_other_secret_is_invalid() {
        let other = TokenService::new(b"another-secret", 3600);
        let token = other.issue_at(1, "admin", "admin", NOW).unwrap();

        assert_eq!(service().validate_at(&token, NOW), TokenValidation::Invalid);
    }

    #[test]
    fn other_algorithm_is_invalid() {
        let claims = Claims {
            user_id: 1,
            username: "admin".to_string(),
            role: "admin".to_string(),
            exp: NOW + 60,
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(service().validate_at(&token, NOW), TokenValidation::Invalid);
    }

    #[test]
    fn garbage_is_invalid() {
        let tokens = service();
        for token in ["", "garbage", "a.b.c", "..."] {
            assert_eq!(tokens.validate_at(token, NOW), TokenValidation::Invalid);
        }
    }

    #[test]
    fn from_config_requires_secret() {
        let config = AuthConfig::default();
        assert!(matches!(
            TokenService::from_config(&config),
            Err(ConfigError::MissingSecret)
        ));

        let config = AuthConfig {
            jwt_secret: Some("s".to_string()),
            token_ttl_seconds: 90,
        };
        let tokens = TokenService::from_config(&config).unwrap();
        assert_eq!(tokens.ttl_seconds(), 90);
    }
}
