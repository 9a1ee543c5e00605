//! Application layer - use cases and orchestration.
//!
//! This layer glues the timer state machine to settings edits and the
//! mocked login session.

pub mod session;
pub mod settings;

pub use session::SessionService;
pub use settings::{parse_minutes, SaveOutcome, SettingsForm};
