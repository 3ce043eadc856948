//! Repository credentials
//!
//! Credentials are resolved once, up front, and passed into the
//! client explicitly. Nothing below this module reads the process
//! environment, so a missing variable fails before any network
//! traffic happens.

use crate::error::{RepoError, Result};

/// Credential sources supported
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Basic authentication (username/password)
    Basic { username: String, password: String },

    /// Environment variable references (CI/CD friendly)
    Env {
        username_var: String,
        password_var: String,
    },
}

impl Credentials {
    /// Create basic auth credentials
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Create environment variable credentials
    pub fn from_env(username_var: impl Into<String>, password_var: impl Into<String>) -> Self {
        Credentials::Env {
            username_var: username_var.into(),
            password_var: password_var.into(),
        }
    }

    /// Resolve credentials to actual values
    pub fn resolve(&self) -> Result<ResolvedCredentials> {
        match self {
            Credentials::Basic { username, password } => Ok(ResolvedCredentials {
                username: username.clone(),
                password: password.clone(),
            }),
            Credentials::Env {
                username_var,
                password_var,
            } => {
                let username = std::env::var(username_var).map_err(|_| RepoError::AuthFailed {
                    message: format!("Environment variable {} not set", username_var),
                })?;
                let password = std::env::var(password_var).map_err(|_| RepoError::AuthFailed {
                    message: format!("Environment variable {} not set", password_var),
                })?;
                Ok(ResolvedCredentials { username, password })
            }
        }
    }
}

/// Resolved basic-auth credentials ready for use
#[derive(Debug, Clone)]
pub struct ResolvedCredentials {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_resolve() {
        let resolved = Credentials::basic("user", "pass").resolve().unwrap();
        assert_eq!(resolved.username, "user");
        assert_eq!(resolved.password, "pass");
    }

    #[test]
    fn test_env_resolve() {
        // SAFETY: Test runs in single thread, no concurrent access to env vars
        unsafe {
            std::env::set_var("CHARTSHIP_TEST_USER", "ci-bot");
            std::env::set_var("CHARTSHIP_TEST_TOKEN", "s3cret");
        }

        let resolved = Credentials::from_env("CHARTSHIP_TEST_USER", "CHARTSHIP_TEST_TOKEN")
            .resolve()
            .unwrap();
        assert_eq!(resolved.username, "ci-bot");
        assert_eq!(resolved.password, "s3cret");

        // SAFETY: Test runs in single thread, no concurrent access to env vars
        unsafe {
            std::env::remove_var("CHARTSHIP_TEST_USER");
            std::env::remove_var("CHARTSHIP_TEST_TOKEN");
        }
    }

    #[test]
    fn test_env_resolve_unset_is_fatal() {
        let err = Credentials::from_env("CHARTSHIP_UNSET_USER", "CHARTSHIP_UNSET_TOKEN")
            .resolve()
            .unwrap_err();
        assert!(matches!(err, RepoError::AuthFailed { .. }));
    }
}
