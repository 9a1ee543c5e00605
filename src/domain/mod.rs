//! Domain layer - core timer logic and types.
//!
//! This layer contains the state machine, domain models and error types
//! without any external dependencies (terminal, filesystem, etc.).

pub mod error;
pub mod models;
pub mod ports;
pub mod timer;

pub use error::{AppError, Result};
pub use models::{DurationTable, LoginRecord, Mode};
pub use ports::{AlertSink, Authenticator, ConfirmationPrompt};
pub use timer::{format_mm_ss, Completion, ModeSwitch, PomodoroTimer, Tick};
