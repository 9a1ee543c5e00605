//! Login session orchestration.
//!
//! Wires the pluggable credential check to the persisted login record.
//! The "authentication" here is a mocked placeholder by design; the service
//! only cares that some [`Authenticator`] said yes.

use crate::domain::{AppError, Authenticator, LoginRecord, Result};
use crate::infrastructure::LoginStore;

/// Login, logout and current-session lookup.
pub struct SessionService<A> {
    store: LoginStore,
    auth: A,
}

impl<A: Authenticator> SessionService<A> {
    #[must_use]
    pub const fn new(store: LoginStore, auth: A) -> Self {
        Self { store, auth }
    }

    /// Attempt a login and persist the session record on success.
    ///
    /// # Errors
    /// Returns a validation error for empty fields, `InvalidCredentials`
    /// when the authenticator declines, or a storage error.
    pub fn login(&self, username: &str, password: &str) -> Result<LoginRecord> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() {
            return Err(AppError::validation("username", "must not be empty"));
        }
        if password.is_empty() {
            return Err(AppError::validation("password", "must not be empty"));
        }

        if !self.auth.authenticate(username, password) {
            tracing::info!(username, "login rejected");
            return Err(AppError::InvalidCredentials);
        }

        let record = LoginRecord::new(username);
        self.store.save(&record)?;
        tracing::info!(username, "login saved");
        Ok(record)
    }

    /// Drop the persisted session. Returns whether one existed.
    ///
    /// # Errors
    /// Returns a storage error if the record cannot be removed.
    pub fn logout(&self) -> Result<bool> {
        let removed = self.store.clear()?;
        if removed {
            tracing::info!("login cleared");
        }
        Ok(removed)
    }

    /// The live session, if any. A corrupt or inactive record reads as
    /// logged out.
    ///
    /// # Errors
    /// Returns a storage error if the record cannot be read.
    pub fn current(&self) -> Result<Option<LoginRecord>> {
        Ok(self.store.load()?.filter(LoginRecord::is_active))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::StaticAuthenticator;
    use tempfile::tempdir;

    fn service(dir: &std::path::Path) -> SessionService<StaticAuthenticator> {
        SessionService::new(
            LoginStore::new(dir.join("session.json")),
            StaticAuthenticator::new("admin", "password"),
        )
    }

    #[test]
    fn test_login_persists_record() {
        let dir = tempdir().unwrap();
        let svc = service(dir.path());

        let record = svc.login("admin", "password").unwrap();
        assert!(record.is_logged_in);
        assert_eq!(record.username, "admin");

        let current = svc.current().unwrap().unwrap();
        assert_eq!(current.username, "admin");
    }

    #[test]
    fn test_login_trims_whitespace() {
        let dir = tempdir().unwrap();
        let svc = service(dir.path());
        let record = svc.login("  admin  ", " password ").unwrap();
        assert_eq!(record.username, "admin");
    }

    #[test]
    fn test_login_rejects_empty_fields() {
        let dir = tempdir().unwrap();
        let svc = service(dir.path());
        assert!(matches!(
            svc.login("", "password"),
            Err(AppError::Validation { .. })
        ));
        assert!(matches!(
            svc.login("admin", "   "),
            Err(AppError::Validation { .. })
        ));
        assert!(svc.current().unwrap().is_none());
    }

    #[test]
    fn test_login_rejects_bad_credentials() {
        let dir = tempdir().unwrap();
        let svc = service(dir.path());
        assert!(matches!(
            svc.login("admin", "hunter2"),
            Err(AppError::InvalidCredentials)
        ));
        assert!(svc.current().unwrap().is_none());
    }

    #[test]
    fn test_current_surfaces_unreadable_store() {
        let dir = tempdir().unwrap();
        // A directory where the record file should be: reads fail with IO,
        // which must reach the caller instead of reading as logged-out.
        std::fs::create_dir(dir.path().join("session.json")).unwrap();

        let svc = service(dir.path());
        assert!(matches!(svc.current(), Err(AppError::Io { .. })));
    }

    #[test]
    fn test_logout_clears_session() {
        let dir = tempdir().unwrap();
        let svc = service(dir.path());

        svc.login("admin", "password").unwrap();
        assert!(svc.logout().unwrap());
        assert!(svc.current().unwrap().is_none());
        // Second logout finds nothing to remove.
        assert!(!svc.logout().unwrap());
    }
}
