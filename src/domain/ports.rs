//! Capability traits for the collaborators the core talks to.
//!
//! The timer and session logic stay free of terminal, notification and
//! credential details; adapters in the infrastructure layer implement these.

/// Synchronous yes/no query presented to the user.
pub trait ConfirmationPrompt {
    /// Ask the question and block until an answer is available.
    fn confirm(&mut self, question: &str) -> bool;
}

/// Best-effort completion alert. Implementations must swallow backend
/// failures; a missing notification must never stop the timer.
pub trait AlertSink {
    fn alert(&mut self, message: &str);
}

/// Pluggable credential check.
pub trait Authenticator {
    fn authenticate(&self, username: &str, password: &str) -> bool;
}
