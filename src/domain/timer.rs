//! The Pomodoro countdown state machine.
//!
//! Pure logic: operations mutate the owned state and report what happened
//! as values. Scheduling the one-second tick, rendering and alerts all live
//! in the adapter driving this type.

use crate::domain::models::SESSIONS_PER_LONG_BREAK;
use crate::domain::ports::ConfirmationPrompt;
use crate::domain::{DurationTable, Mode};

/// Outcome of one tick while the countdown is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The countdown moved down by one second.
    Counted { remaining_secs: u32 },
    /// The countdown hit zero on a previous tick; this tick fires the
    /// completion and the automatic mode advance, exactly once.
    Completed(Completion),
}

/// A finished countdown and the mode the machine advanced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub finished: Mode,
    pub next: Mode,
    pub session_count: u32,
}

/// Result of a manual mode switch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSwitch {
    Switched,
    /// The user declined the running-timer confirmation; nothing changed.
    Declined,
}

/// The timer state: current mode, remaining time, running flag, session
/// counter and the configured durations. One instance per process.
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    mode: Mode,
    remaining_secs: u32,
    running: bool,
    session_count: u32,
    durations: DurationTable,
}

impl PomodoroTimer {
    /// Start idle in Pomodoro mode with a full countdown and session #1.
    #[must_use]
    pub fn new(durations: DurationTable) -> Self {
        Self {
            mode: Mode::Pomodoro,
            remaining_secs: durations.secs_for(Mode::Pomodoro),
            running: false,
            session_count: 1,
            durations,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub const fn session_count(&self) -> u32 {
        self.session_count
    }

    #[must_use]
    pub const fn durations(&self) -> &DurationTable {
        &self.durations
    }

    /// Begin counting down. No-op while already running, so the caller can
    /// never end up with two tick drivers.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        tracing::debug!(mode = %self.mode, remaining = self.remaining_secs, "timer started");
        true
    }

    /// Stop counting, preserving the remaining time exactly.
    pub fn pause(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        tracing::debug!(remaining = self.remaining_secs, "timer paused");
        true
    }

    /// Stop and restore the full duration of the active mode.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining_secs = self.durations.secs_for(self.mode);
        tracing::debug!(mode = %self.mode, "timer reset");
    }

    /// Advance the countdown by one second. Returns `None` when idle.
    pub fn tick(&mut self) -> Option<Tick> {
        if !self.running {
            return None;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            Some(Tick::Counted {
                remaining_secs: self.remaining_secs,
            })
        } else {
            self.running = false;
            Some(Tick::Completed(self.auto_advance()))
        }
    }

    /// Switch mode on user request. While running this asks for confirmation
    /// first; declining leaves mode, remaining time and running flag all
    /// untouched.
    pub fn set_mode(&mut self, mode: Mode, prompt: &mut dyn ConfirmationPrompt) -> ModeSwitch {
        if self.running && !prompt.confirm("Timer is running. Switch mode and reset?") {
            return ModeSwitch::Declined;
        }
        self.apply_mode(mode);
        ModeSwitch::Switched
    }

    /// Replace the duration table wholesale. If the active mode's duration
    /// changed, the remaining time is rebased to the new duration immediately,
    /// without stopping a running countdown. Returns whether a rebase happened.
    pub fn apply_durations(&mut self, durations: DurationTable) -> bool {
        let before = self.durations.secs_for(self.mode);
        self.durations = durations;
        let after = self.durations.secs_for(self.mode);
        if before == after {
            return false;
        }
        self.remaining_secs = after;
        tracing::debug!(mode = %self.mode, remaining = after, "duration change rebased countdown");
        true
    }

    /// Render the remaining time as `MM:SS`.
    #[must_use]
    pub fn display(&self) -> String {
        format_mm_ss(self.remaining_secs)
    }

    /// Completion path: count the session if a Pomodoro just finished, then
    /// pick the next mode. Every fourth completed session earns a long break;
    /// either break leads back to work. Manual switches never come through
    /// here, so the confirmation prompt is bypassed by construction.
    fn auto_advance(&mut self) -> Completion {
        let finished = self.mode;
        let next = if finished == Mode::Pomodoro {
            self.session_count += 1;
            if self.session_count % SESSIONS_PER_LONG_BREAK == 0 {
                Mode::LongBreak
            } else {
                Mode::ShortBreak
            }
        } else {
            Mode::Pomodoro
        };
        self.apply_mode(next);
        tracing::debug!(finished = %finished, next = %next, session = self.session_count, "countdown complete");
        Completion {
            finished,
            next,
            session_count: self.session_count,
        }
    }

    fn apply_mode(&mut self, mode: Mode) {
        self.running = false;
        self.mode = mode;
        self.remaining_secs = self.durations.secs_for(mode);
    }
}

/// Format seconds as `MM:SS`, both fields zero-padded. Minutes are not
/// folded into hours: 3600 seconds renders as `60:00`.
#[must_use]
pub fn format_mm_ss(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
