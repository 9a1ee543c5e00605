//! The shipped credential check for the mocked login.

use crate::domain::Authenticator;

/// Compares against a single configured credential pair.
///
/// This is a demo stand-in, not real authentication; it exists so the core
/// stays free of embedded secrets and a real backend could slot in behind
/// the same trait.
pub struct StaticAuthenticator {
    username: String,
    password: String,
}

impl StaticAuthenticator {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_configured_pair_only() {
        let auth = StaticAuthenticator::new("admin", "password");
        assert!(auth.authenticate("admin", "password"));
        assert!(!auth.authenticate("admin", "wrong"));
        assert!(!auth.authenticate("root", "password"));
        assert!(!auth.authenticate("", ""));
    }
}
