use chrono::{DateTime, Local, TimeZone, Utc};
use thiserror::Error;
use tracing::{info, instrument};

use crate::{
    auth::jwt::generate_session_token,
    config::Config,
    model::{
        role::Role,
        user::{User, UserStatus},
    },
};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("username and password must not be empty")]
    MissingCredentials,

    #[error("failed to issue session token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// A signed-in dashboard user. The gateway sends [`Session::token`] as a
/// bearer token on every request.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    username: String,
    role: Role,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Session {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Profile shown in the page header. The display name is the local part
    /// of the login, e.g. `admin` for `admin@company.com`.
    pub fn user(&self) -> User {
        let name = self
            .username
            .split_once('@')
            .map_or(self.username.as_str(), |(local, _)| local);

        User {
            id: self.username.clone(),
            name: name.to_string(),
            email: self.username.clone(),
            role: self.role,
            status: if self.is_expired() {
                UserStatus::Inactive
            } else {
                UserStatus::Active
            },
            last_login: self
                .issued_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %I:%M %p")
                .to_string(),
        }
    }
}

/// Issues sessions for the dashboard login screen.
///
/// There is no credential store behind the dashboard: any non-empty username
/// and password pair is accepted and signed in as [`Role::Admin`].
#[derive(Clone)]
pub struct SessionManager {
    secret: String,
    ttl: usize,
}

impl SessionManager {
    pub fn new(secret: impl Into<String>, ttl: usize) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.jwt_secret.clone(), config.session_ttl)
    }

    #[instrument(name = "dashboard_login", skip(self, password), fields(username = %username))]
    pub fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            info!("Validation failed: empty username or password");
            return Err(AuthError::MissingCredentials);
        }

        let issued_at = Utc::now();
        let (token, claims) =
            generate_session_token(username.to_string(), Role::Admin, &self.secret, self.ttl)?;

        let expires_at = Utc
            .timestamp_opt(claims.exp as i64, 0)
            .single()
            .unwrap_or_else(Utc::now);

        info!(expires_at = %expires_at, "Session issued");

        Ok(Session {
            token,
            username: claims.sub,
            role: claims.role,
            issued_at,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::verify_token;

    #[test]
    fn any_non_empty_credentials_sign_in() {
        let manager = SessionManager::new("secret", 3600);
        let session = manager.login(" admin@company.com ", "whatever").unwrap();

        assert_eq!(session.username(), "admin@company.com");
        assert_eq!(session.role(), Role::Admin);
        assert!(!session.is_expired());

        let claims = verify_token(session.token(), "secret").unwrap();
        assert_eq!(claims.sub, "admin@company.com");
    }

    #[test]
    fn session_user_profile() {
        let session = SessionManager::new("secret", 3600)
            .login("jennifer.garcia@company.com", "pw")
            .unwrap();
        let user = session.user();

        assert_eq!(user.name, "jennifer.garcia");
        assert_eq!(user.email, "jennifer.garcia@company.com");
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.status, UserStatus::Active);
    }

    #[test]
    fn blank_credentials_are_rejected() {
        let manager = SessionManager::new("secret", 3600);
        assert!(matches!(
            manager.login("   ", "pw"),
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            manager.login("admin", ""),
            Err(AuthError::MissingCredentials)
        ));
    }
}
