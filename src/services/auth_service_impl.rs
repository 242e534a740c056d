//! `SeaORM` implementation of the `AuthService` trait.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use tokio::task;
use tracing::{info, warn};

use crate::auth::{TokenService, password};
use crate::db::Store;
use crate::models::User;
use crate::services::auth_service::{AuthError, AuthService, LoginResult, UserSummary};

pub struct SeaOrmAuthService {
    store: Store,
    tokens: Arc<TokenService>,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store, tokens: Arc<TokenService>) -> Self {
        Self { store, tokens }
    }
}

/// Runs `verify` exactly once whether or not the account exists, so an
/// unknown username costs the same as a wrong password. Returns the user only
/// on a match.
fn check_password<F>(account: Option<(User, String)>, plaintext: &str, verify: F) -> Option<User>
where
    F: FnOnce(&str, &str) -> bool,
{
    let (user, stored) = match account {
        Some((user, stored)) => (Some(user), stored),
        None => (None, password::UNMATCHABLE_HASH.to_string()),
    };

    let matches = verify(plaintext, &stored);
    user.filter(|_| matches)
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AuthError> {
        let account = self
            .store
            .get_user_with_password(username)
            .await
            .map_err(|e| AuthError::Database(format!("{e:#}")))?;
        let known = account.is_some();

        // Argon2 verify is CPU-bound.
        let plaintext = password.to_string();
        let user = task::spawn_blocking(move || {
            check_password(account, &plaintext, password::verify)
        })
        .await
        .context("Password verification task panicked")?;

        let Some(user) = user else {
            if known {
                warn!(username, "Login failed: wrong password");
            } else {
                warn!(username, "Login failed: unknown user");
            }
            metrics::counter!("auth_logins_total", "outcome" => "failure").increment(1);
            return Err(AuthError::InvalidCredentials);
        };

        let token = self
            .tokens
            .issue(user.id, &user.username, user.role.as_str())?;

        info!(username = %user.username, role = %user.role, "Login succeeded");
        metrics::counter!("auth_logins_total", "outcome" => "success").increment(1);

        Ok(LoginResult {
            token,
            user: UserSummary {
                id: user.id,
                username: user.username,
                role: user.role,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn operator() -> User {
        User {
            id: 2,
            username: "operator".to_string(),
            role: Role::Operator,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn unknown_account_still_verifies_against_placeholder() {
        let mut checked = None;

        let user = check_password(None, "operator123", |plaintext, stored| {
            checked = Some((plaintext.to_string(), stored.to_string()));
            true
        });

        assert!(user.is_none());
        assert_eq!(
            checked,
            Some((
                "operator123".to_string(),
                password::UNMATCHABLE_HASH.to_string()
            ))
        );
    }

    #[test]
    fn known_account_uses_its_stored_hash() {
        let mut checked = None;

        let user = check_password(
            Some((operator(), "aa:bb".to_string())),
            "operator123",
            |_, stored| {
                checked = Some(stored.to_string());
                true
            },
        );

        assert_eq!(user, Some(operator()));
        assert_eq!(checked.as_deref(), Some("aa:bb"));
    }

    #[test]
    fn wrong_password_yields_no_user() {
        let user = check_password(Some((operator(), "aa:bb".to_string())), "x", |_, _| false);
        assert!(user.is_none());
    }
}
