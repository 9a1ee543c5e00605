//! Domain models for the timer and the persisted login session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Result};

/// Classic Pomodoro defaults, in whole minutes.
pub const DEFAULT_POMODORO_MINUTES: u32 = 25;
pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;

/// Number of completed work sessions between long breaks.
pub const SESSIONS_PER_LONG_BREAK: u32 = 4;

/// One of the three timer phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Focused work phase.
    Pomodoro,
    /// Short rest between work sessions.
    ShortBreak,
    /// Longer rest after every fourth session.
    LongBreak,
}

impl Mode {
    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pomodoro => "Pomodoro",
            Self::ShortBreak => "Short break",
            Self::LongBreak => "Long break",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pomodoro" | "work" => Ok(Self::Pomodoro),
            "short" | "short-break" => Ok(Self::ShortBreak),
            "long" | "long-break" => Ok(Self::LongBreak),
            _ => Err(format!("Unknown mode: {s}. Use: pomodoro, short, long")),
        }
    }
}

/// Configured duration for each mode, in whole seconds.
///
/// Built only from validated positive minutes, so every stored value is a
/// positive multiple of 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationTable {
    pomodoro_secs: u32,
    short_break_secs: u32,
    long_break_secs: u32,
}

impl Default for DurationTable {
    fn default() -> Self {
        Self {
            pomodoro_secs: DEFAULT_POMODORO_MINUTES * 60,
            short_break_secs: DEFAULT_SHORT_BREAK_MINUTES * 60,
            long_break_secs: DEFAULT_LONG_BREAK_MINUTES * 60,
        }
    }
}

impl DurationTable {
    /// Build a table from whole-minute values.
    ///
    /// # Errors
    /// Returns a validation error if any value is zero or too large to hold
    /// as seconds. This is the single gate through which user input reaches
    /// the timer.
    pub fn from_minutes(pomodoro: u32, short_break: u32, long_break: u32) -> Result<Self> {
        fn to_secs(field: &str, minutes: u32) -> Result<u32> {
            if minutes == 0 {
                return Err(AppError::validation(field, "must be a positive integer"));
            }
            minutes
                .checked_mul(60)
                .ok_or_else(|| AppError::validation(field, format!("too large: {minutes}")))
        }

        Ok(Self {
            pomodoro_secs: to_secs("pomodoro minutes", pomodoro)?,
            short_break_secs: to_secs("short break minutes", short_break)?,
            long_break_secs: to_secs("long break minutes", long_break)?,
        })
    }

    /// Duration in seconds for the given mode.
    #[must_use]
    pub const fn secs_for(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Pomodoro => self.pomodoro_secs,
            Mode::ShortBreak => self.short_break_secs,
            Mode::LongBreak => self.long_break_secs,
        }
    }

    /// Duration in whole minutes for the given mode.
    #[must_use]
    pub const fn minutes_for(&self, mode: Mode) -> u32 {
        self.secs_for(mode) / 60
    }
}

/// The persisted login record.
///
/// Field names and the ISO-8601 timestamp match the JSON blob the app has
/// always written, so existing session files keep loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRecord {
    /// Whether a user is currently logged in.
    pub is_logged_in: bool,
    /// Name of the logged-in user.
    pub username: String,
    /// When the login happened.
    pub login_time: DateTime<Utc>,
}

impl LoginRecord {
    /// Create a fresh record for a successful login.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            is_logged_in: true,
            username: username.into(),
            login_time: Utc::now(),
        }
    }

    /// A record only counts as a live session when both flag and name are set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_logged_in && !self.username.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_durations() {
        let table = DurationTable::default();
        assert_eq!(table.secs_for(Mode::Pomodoro), 25 * 60);
        assert_eq!(table.secs_for(Mode::ShortBreak), 5 * 60);
        assert_eq!(table.secs_for(Mode::LongBreak), 15 * 60);
    }

    #[test]
    fn test_from_minutes_rejects_zero() {
        assert!(DurationTable::from_minutes(0, 5, 15).is_err());
        assert!(DurationTable::from_minutes(25, 0, 15).is_err());
        assert!(DurationTable::from_minutes(25, 5, 0).is_err());
        assert!(DurationTable::from_minutes(1, 1, 1).is_ok());
    }

    #[test]
    fn test_from_minutes_rejects_overflow() {
        // u32::MAX * 60 does not fit in seconds; must error, not wrap.
        assert!(DurationTable::from_minutes(u32::MAX, 1, 1).is_err());
        assert!(DurationTable::from_minutes(1, u32::MAX, 1).is_err());
        assert!(DurationTable::from_minutes(1, 1, u32::MAX / 60 + 1).is_err());
        let largest = u32::MAX / 60;
        let table = DurationTable::from_minutes(largest, 1, 1).unwrap();
        assert_eq!(table.secs_for(Mode::Pomodoro), largest * 60);
    }

    #[test]
    fn test_minutes_roundtrip() {
        let table = DurationTable::from_minutes(30, 7, 20).unwrap();
        assert_eq!(table.minutes_for(Mode::Pomodoro), 30);
        assert_eq!(table.minutes_for(Mode::ShortBreak), 7);
        assert_eq!(table.minutes_for(Mode::LongBreak), 20);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("pomodoro".parse::<Mode>(), Ok(Mode::Pomodoro));
        assert_eq!("short".parse::<Mode>(), Ok(Mode::ShortBreak));
        assert_eq!("long-break".parse::<Mode>(), Ok(Mode::LongBreak));
        assert!("nap".parse::<Mode>().is_err());
    }

    #[test]
    fn test_login_record_json_shape() {
        let record = LoginRecord::new("admin");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"isLoggedIn\":true"));
        assert!(json.contains("\"username\":\"admin\""));
        assert!(json.contains("\"loginTime\""));
    }

    #[test]
    fn test_login_record_active() {
        let mut record = LoginRecord::new("admin");
        assert!(record.is_active());
        record.is_logged_in = false;
        assert!(!record.is_active());
        record.is_logged_in = true;
        record.username.clear();
        assert!(!record.is_active());
    }
}
