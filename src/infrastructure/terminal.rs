//! Terminal UI pieces for the interactive timer.
//!
//! A dedicated reader thread turns stdin lines into channel messages; the
//! interactive loop in `main` consumes them between ticks. The confirmation
//! prompt reads from the same channel, so answering it blocks the loop the
//! way a modal dialog would.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::application::SettingsForm;
use crate::domain::{ConfirmationPrompt, LoginRecord, Mode, PomodoroTimer};

/// Spawn the stdin reader thread. The receiver is the interactive loop's
/// only event source; the thread exits when stdin closes or the receiver
/// is dropped.
#[must_use]
pub fn spawn_input_thread() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Yes/no prompt answered by the next input line.
pub struct LinePrompt<'a> {
    rx: &'a mpsc::Receiver<String>,
}

impl<'a> LinePrompt<'a> {
    #[must_use]
    pub const fn new(rx: &'a mpsc::Receiver<String>) -> Self {
        Self { rx }
    }
}

impl ConfirmationPrompt for LinePrompt<'_> {
    fn confirm(&mut self, question: &str) -> bool {
        print!("{} {} ", question.yellow(), "[y/N]".dimmed());
        let _ = io::stdout().flush();
        match self.rx.recv() {
            Ok(answer) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            // Input channel gone; treat as declined.
            Err(_) => false,
        }
    }
}

/// Color accent for a mode label.
fn mode_badge(mode: Mode) -> colored::ColoredString {
    match mode {
        Mode::Pomodoro => mode.label().red().bold(),
        Mode::ShortBreak => mode.label().green().bold(),
        Mode::LongBreak => mode.label().blue().bold(),
    }
}

/// Redraw the countdown line in place.
pub fn render_countdown(timer: &PomodoroTimer) {
    let state = if timer.is_running() { "▶" } else { "⏸" };
    print!(
        "\r[{}] {}  {} session #{}   ",
        mode_badge(timer.mode()),
        timer.display().bold(),
        state,
        timer.session_count()
    );
    let _ = io::stdout().flush();
}

/// Move off the countdown line before printing a full-width message.
pub fn end_countdown_line() {
    println!();
}

/// Table of the current durations, in minutes.
#[must_use]
pub fn settings_table(form: &SettingsForm) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Mode", "Minutes"]);
    table.add_row(vec![
        Mode::Pomodoro.label(),
        &form.pomodoro_minutes.to_string(),
    ]);
    table.add_row(vec![
        Mode::ShortBreak.label(),
        &form.short_break_minutes.to_string(),
    ]);
    table.add_row(vec![
        Mode::LongBreak.label(),
        &form.long_break_minutes.to_string(),
    ]);
    table.to_string()
}

/// Table of the timer state and login session.
#[must_use]
pub fn status_table(timer: &PomodoroTimer, login: Option<&LoginRecord>) -> String {
    let login_line = login.map_or_else(
        || "logged out".to_string(),
        |record| {
            format!(
                "{} (since {})",
                record.username,
                record.login_time.format("%Y-%m-%d %H:%M UTC")
            )
        },
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.add_row(vec!["Mode", timer.mode().label()]);
    table.add_row(vec!["Remaining", &timer.display()]);
    table.add_row(vec![
        "State",
        if timer.is_running() { "running" } else { "idle" },
    ]);
    table.add_row(vec!["Session", &format!("#{}", timer.session_count())]);
    table.add_row(vec!["Login", &login_line]);
    table.to_string()
}

/// Command summary for the interactive loop.
pub fn print_help() {
    println!("{}", "Commands".bold());
    println!("  start                  begin the countdown");
    println!("  pause                  stop, keeping the remaining time");
    println!("  reset                  restore the full duration");
    println!("  mode <pomodoro|short|long>");
    println!("                         switch phase (asks while running)");
    println!("  settings               show the configured durations");
    println!("  set <work> <short> <long>");
    println!("                         save durations in minutes");
    println!("  login <user> <pass>    mock login");
    println!("  logout                 clear the login session");
    println!("  status                 timer and session overview");
    println!("  help                   this summary");
    println!("  quit                   exit");
}
