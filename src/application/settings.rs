//! The settings store: editing and saving the three mode durations.
//!
//! Values are edited in whole minutes and stored in the timer as seconds.
//! All user input funnels through validation here; the timer itself never
//! sees a non-positive duration from this path.

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, DurationTable, Mode, PomodoroTimer, Result};

/// Editable view of the duration table, in whole minutes.
///
/// Opening settings produces this form; the stored seconds are exact
/// multiples of 60 by construction, so the division is lossless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsForm {
    pub pomodoro_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
}

impl SettingsForm {
    /// Current durations, ready for editing.
    #[must_use]
    pub const fn current(durations: &DurationTable) -> Self {
        Self {
            pomodoro_minutes: durations.minutes_for(Mode::Pomodoro),
            short_break_minutes: durations.minutes_for(Mode::ShortBreak),
            long_break_minutes: durations.minutes_for(Mode::LongBreak),
        }
    }
}

/// What a successful save did.
#[derive(Debug, Clone, Copy)]
pub struct SaveOutcome {
    /// The table now installed in the timer.
    pub durations: DurationTable,
    /// Whether the active mode's remaining time was rebased.
    pub rebased: bool,
}

/// Validate the minute values and install them in the timer wholesale.
///
/// If the active mode's duration changed, the remaining time is rebased
/// immediately, even mid-countdown. Cancelling an edit is simply not
/// calling this; nothing mutates until validation passes.
///
/// # Errors
/// Returns a validation error for any zero minute value.
pub fn save(
    timer: &mut PomodoroTimer,
    pomodoro_minutes: u32,
    short_break_minutes: u32,
    long_break_minutes: u32,
) -> Result<SaveOutcome> {
    let durations =
        DurationTable::from_minutes(pomodoro_minutes, short_break_minutes, long_break_minutes)?;
    let rebased = timer.apply_durations(durations);
    tracing::info!(
        pomodoro = pomodoro_minutes,
        short_break = short_break_minutes,
        long_break = long_break_minutes,
        rebased,
        "settings saved"
    );
    Ok(SaveOutcome { durations, rebased })
}

/// Parse a minute field typed by the user.
///
/// # Errors
/// Returns a validation error for non-numeric input; the zero check happens
/// in [`save`].
pub fn parse_minutes(field: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| AppError::validation(field, format!("not a whole number: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_shows_whole_minutes() {
        let table = DurationTable::from_minutes(30, 7, 20).unwrap();
        let form = SettingsForm::current(&table);
        assert_eq!(form.pomodoro_minutes, 30);
        assert_eq!(form.short_break_minutes, 7);
        assert_eq!(form.long_break_minutes, 20);
    }

    #[test]
    fn test_save_replaces_table_wholesale() {
        let mut timer = PomodoroTimer::new(DurationTable::default());
        let outcome = save(&mut timer, 50, 10, 30).unwrap();
        assert_eq!(&outcome.durations, timer.durations());
        assert_eq!(timer.durations().minutes_for(Mode::Pomodoro), 50);
        assert_eq!(timer.durations().minutes_for(Mode::ShortBreak), 10);
        assert_eq!(timer.durations().minutes_for(Mode::LongBreak), 30);
    }

    #[test]
    fn test_save_rebases_running_countdown() {
        let mut timer = PomodoroTimer::new(DurationTable::default());
        timer.start();
        timer.tick();

        let outcome = save(&mut timer, 30, 5, 15).unwrap();
        assert!(outcome.rebased);
        assert_eq!(timer.remaining_secs(), 1800);
        assert!(timer.is_running());
    }

    #[test]
    fn test_save_rejects_zero_minutes() {
        let mut timer = PomodoroTimer::new(DurationTable::default());
        timer.start();
        timer.tick();
        let remaining = timer.remaining_secs();

        assert!(save(&mut timer, 0, 5, 15).is_err());
        // A rejected save leaves the timer untouched.
        assert_eq!(timer.remaining_secs(), remaining);
        assert_eq!(timer.durations().minutes_for(Mode::Pomodoro), 25);
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("pomodoro minutes", "25").unwrap(), 25);
        assert_eq!(parse_minutes("pomodoro minutes", " 7 ").unwrap(), 7);
        assert!(parse_minutes("pomodoro minutes", "abc").is_err());
        assert!(parse_minutes("pomodoro minutes", "-5").is_err());
        assert!(parse_minutes("pomodoro minutes", "2.5").is_err());
    }
}
