//! Best-effort completion alerts.

use std::io::Write;

use notify_rust::Notification;

use crate::domain::AlertSink;

/// Desktop notification plus terminal bell.
///
/// Either backend may be missing (headless session, no notification daemon);
/// failures are logged and swallowed so the mode advance is never blocked.
#[derive(Default)]
pub struct DesktopNotifier;

impl AlertSink for DesktopNotifier {
    fn alert(&mut self, message: &str) {
        // Terminal bell first - it works even without a notification daemon.
        print!("\x07");
        let _ = std::io::stdout().flush();

        let result = Notification::new()
            .summary("focustime")
            .body(message)
            .show();

        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to send desktop notification");
        }
    }
}
