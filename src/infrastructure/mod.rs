//! Infrastructure layer - external adapters (terminal, filesystem, alerts).
//!
//! This layer handles all I/O operations and external dependencies.

pub mod auth;
pub mod config;
pub mod login_store;
pub mod notifier;
pub mod terminal;

pub use auth::StaticAuthenticator;
pub use config::{ensure_config_exists, load_config, save_config, AppConfig};
pub use login_store::LoginStore;
pub use notifier::DesktopNotifier;
