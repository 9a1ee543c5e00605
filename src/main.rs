//! focustime - a terminal Pomodoro timer with a mocked login session.
//!
//! The countdown cycles through work and break phases, advancing on its own
//! when a phase completes; every fourth finished work session earns the long
//! break. A small JSON record under the data directory plays the role of a
//! login session.
//!
//! Quick start:
//!   focustime run                       # interactive timer
//!   focustime status                    # durations + login overview
//!   focustime login admin password      # mocked login
//!   focustime config set -p 50          # 50-minute work sessions

mod application;
mod cli;
mod domain;
mod infrastructure;

use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{settings, SessionService, SettingsForm};
use cli::{Cli, Commands, ConfigAction};
use domain::{AlertSink, Completion, ConfirmationPrompt, Mode, ModeSwitch, PomodoroTimer, Tick};
use infrastructure::terminal::{self, LinePrompt};
use infrastructure::{AppConfig, DesktopNotifier, LoginStore, StaticAuthenticator};

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(cli: Cli) -> domain::Result<()> {
    infrastructure::ensure_config_exists()?;
    let config = infrastructure::load_config()?;

    match cli.command {
        Commands::Run => cmd_run(config)?,
        Commands::Status => cmd_status(&config)?,
        Commands::Login { username, password } => cmd_login(&config, &username, &password)?,
        Commands::Logout => cmd_logout(&config)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(&config),
            ConfigAction::Set {
                pomodoro,
                short_break,
                long_break,
            } => cmd_config_set(config, pomodoro, short_break, long_break)?,
        },
        Commands::Paths => cmd_paths(&config),
    }

    Ok(())
}

/// Whether the interactive loop keeps going.
#[derive(PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The interactive timer: a single event loop fed by the stdin reader
/// thread, ticking once per second while the countdown runs.
fn cmd_run(mut config: AppConfig) -> domain::Result<()> {
    let mut timer = PomodoroTimer::new(config.duration_table()?);
    let sessions = session_service(&config);
    let mut alert = DesktopNotifier;

    println!("{}", "🍅 focustime".bold());
    match sessions.current()? {
        Some(record) => println!("Logged in as {}", record.username.cyan()),
        None => println!("Not logged in"),
    }
    println!(
        "{} / {} / {} minutes - type {} for commands\n",
        timer.durations().minutes_for(Mode::Pomodoro),
        timer.durations().minutes_for(Mode::ShortBreak),
        timer.durations().minutes_for(Mode::LongBreak),
        "help".bold()
    );
    terminal::render_countdown(&timer);

    // The loop only starts once the reader thread is wired up; there is
    // nothing to poll for.
    let rx = terminal::spawn_input_thread();

    loop {
        let line = if timer.is_running() {
            // One logical tick driver: the receive timeout is the interval.
            match rx.recv_timeout(Duration::from_secs(1)) {
                Ok(line) => Some(line),
                Err(RecvTimeoutError::Timeout) => {
                    if let Some(tick) = timer.tick() {
                        handle_tick(tick, &timer, &mut alert);
                    }
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        } else {
            // Idle: nothing to tick, block until the next command.
            rx.recv().ok()
        };

        let Some(line) = line else { break };
        if handle_command(&line, &mut timer, &sessions, &mut config, &rx) == Flow::Quit {
            break;
        }
    }

    println!();
    Ok(())
}

/// React to one second of countdown progress.
fn handle_tick(tick: Tick, timer: &PomodoroTimer, alert: &mut DesktopNotifier) {
    match tick {
        Tick::Counted { .. } => terminal::render_countdown(timer),
        Tick::Completed(done) => {
            terminal::end_countdown_line();
            let message = completion_message(&done, timer);
            println!("🔔 {message}");
            // Best-effort: the notifier swallows backend failures.
            alert.alert(&message);
            terminal::render_countdown(timer);
        }
    }
}

/// The alert text for a finished countdown.
fn completion_message(done: &Completion, timer: &PomodoroTimer) -> String {
    let next_minutes = timer.durations().minutes_for(done.next);
    if done.finished == Mode::Pomodoro {
        format!(
            "Work session complete! Time for a {next_minutes}-minute {}. (session #{})",
            done.next.label().to_lowercase(),
            done.session_count
        )
    } else {
        format!("Break is over! Starting {next_minutes}-minute work session.")
    }
}

/// Dispatch one line from the interactive loop. Errors are shown, never
/// fatal; only `quit` or a closed stdin end the loop.
fn handle_command(
    line: &str,
    timer: &mut PomodoroTimer,
    sessions: &SessionService<StaticAuthenticator>,
    config: &mut AppConfig,
    rx: &mpsc::Receiver<String>,
) -> Flow {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = words.split_first() else {
        terminal::render_countdown(timer);
        return Flow::Continue;
    };

    match command {
        "start" => {
            timer.start();
            terminal::render_countdown(timer);
        }
        "pause" => {
            timer.pause();
            terminal::render_countdown(timer);
        }
        "reset" => {
            timer.reset();
            terminal::render_countdown(timer);
        }
        "mode" => cmd_switch_mode(args, timer, rx),
        "settings" => {
            println!("{}", terminal::settings_table(&SettingsForm::current(timer.durations())));
            terminal::render_countdown(timer);
        }
        "set" => {
            cmd_save_settings(args, timer, config);
            terminal::render_countdown(timer);
        }
        "login" => {
            cmd_repl_login(args, sessions);
            terminal::render_countdown(timer);
        }
        "logout" => {
            let mut prompt = LinePrompt::new(rx);
            if prompt.confirm("Are you sure you want to logout?") {
                match sessions.logout() {
                    Ok(true) => println!("{} Logged out", "✓".green()),
                    Ok(false) => println!("No login session to clear"),
                    Err(e) => eprintln!("{} {e}", "Error:".red()),
                }
            }
            terminal::render_countdown(timer);
        }
        "status" => {
            match sessions.current() {
                Ok(login) => println!("{}", terminal::status_table(timer, login.as_ref())),
                Err(e) => eprintln!("{} {e}", "Error:".red()),
            }
            terminal::render_countdown(timer);
        }
        "help" => {
            terminal::print_help();
            terminal::render_countdown(timer);
        }
        "quit" | "exit" => return Flow::Quit,
        other => {
            println!("Unknown command: {other} (try {})", "help".bold());
            terminal::render_countdown(timer);
        }
    }

    Flow::Continue
}

/// `mode <pomodoro|short|long>`: manual phase switch, confirmed while running.
fn cmd_switch_mode(args: &[&str], timer: &mut PomodoroTimer, rx: &mpsc::Receiver<String>) {
    let Some(name) = args.first() else {
        println!("Usage: mode <pomodoro|short|long>");
        terminal::render_countdown(timer);
        return;
    };

    match name.parse::<Mode>() {
        Ok(mode) => {
            let mut prompt = LinePrompt::new(rx);
            match timer.set_mode(mode, &mut prompt) {
                ModeSwitch::Switched => println!("Switched to {}", mode.label().bold()),
                ModeSwitch::Declined => println!("Mode unchanged"),
            }
        }
        Err(e) => println!("{e}"),
    }
    terminal::render_countdown(timer);
}

/// `set <work> <short> <long>`: validated settings save, persisted to the
/// config file so the durations survive the next run.
fn cmd_save_settings(args: &[&str], timer: &mut PomodoroTimer, config: &mut AppConfig) {
    let &[pomodoro, short_break, long_break] = args else {
        println!("Usage: set <work> <short> <long>  (minutes)");
        return;
    };

    let (pomodoro, short_break, long_break) = match parse_settings_args(pomodoro, short_break, long_break) {
        Ok(values) => values,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            return;
        }
    };

    match settings::save(timer, pomodoro, short_break, long_break) {
        Ok(outcome) => {
            config.durations.pomodoro_minutes = pomodoro;
            config.durations.short_break_minutes = short_break;
            config.durations.long_break_minutes = long_break;
            if let Err(e) = infrastructure::save_config(config) {
                tracing::warn!(error = %e, "settings applied but not persisted");
            }
            if outcome.rebased {
                println!("{} Durations saved; countdown rebased", "✓".green());
            } else {
                println!("{} Durations saved", "✓".green());
            }
        }
        Err(e) => eprintln!("{} {e}", "Error:".red()),
    }
}

fn parse_settings_args(pomodoro: &str, short_break: &str, long_break: &str) -> domain::Result<(u32, u32, u32)> {
    Ok((
        settings::parse_minutes("pomodoro minutes", pomodoro)?,
        settings::parse_minutes("short break minutes", short_break)?,
        settings::parse_minutes("long break minutes", long_break)?,
    ))
}

/// `login <user> <pass>` inside the interactive loop.
fn cmd_repl_login(args: &[&str], sessions: &SessionService<StaticAuthenticator>) {
    let &[username, password] = args else {
        println!("Usage: login <username> <password>");
        return;
    };

    match sessions.login(username, password) {
        Ok(record) => println!("{} Welcome, {}!", "✓".green(), record.username.cyan()),
        Err(e) => eprintln!("{} {e}", "Error:".red()),
    }
}

/// Show timer configuration and login session.
fn cmd_status(config: &AppConfig) -> domain::Result<()> {
    let timer = PomodoroTimer::new(config.duration_table()?);
    let login = session_service(config).current()?;
    println!("{}", terminal::status_table(&timer, login.as_ref()));
    Ok(())
}

/// One-shot login command.
fn cmd_login(config: &AppConfig, username: &str, password: &str) -> domain::Result<()> {
    let record = session_service(config).login(username, password)?;
    println!("{} Welcome, {}!", "✓".green().bold(), record.username.cyan());
    Ok(())
}

/// One-shot logout command. Running it is the confirmation.
fn cmd_logout(config: &AppConfig) -> domain::Result<()> {
    if session_service(config).logout()? {
        println!("{} Logged out", "✓".green().bold());
    } else {
        println!("No login session to clear");
    }
    Ok(())
}

/// Print the configured durations.
fn cmd_config_show(config: &AppConfig) {
    let form = SettingsForm {
        pomodoro_minutes: config.durations.pomodoro_minutes,
        short_break_minutes: config.durations.short_break_minutes,
        long_break_minutes: config.durations.long_break_minutes,
    };
    println!("{}", terminal::settings_table(&form));
}

/// Update durations in the config file, leaving omitted fields alone.
fn cmd_config_set(
    mut config: AppConfig,
    pomodoro: Option<u32>,
    short_break: Option<u32>,
    long_break: Option<u32>,
) -> domain::Result<()> {
    if pomodoro.is_none() && short_break.is_none() && long_break.is_none() {
        println!("Nothing to change (use --pomodoro/--short-break/--long-break)");
        return Ok(());
    }

    if let Some(minutes) = pomodoro {
        config.durations.pomodoro_minutes = minutes;
    }
    if let Some(minutes) = short_break {
        config.durations.short_break_minutes = minutes;
    }
    if let Some(minutes) = long_break {
        config.durations.long_break_minutes = minutes;
    }

    // Same validation gate as the interactive save.
    config.duration_table()?;
    infrastructure::save_config(&config)?;

    cmd_config_show(&config);
    Ok(())
}

/// Show the data files in use.
fn cmd_paths(config: &AppConfig) {
    println!("{}", "📂 focustime data".bold());
    println!();
    println!("  data dir: {}", config.data_dir().display());
    println!("  config:   {}", config.config_file_path().display());
    println!("  session:  {}", config.session_file_path().display());
}

/// Build the session service from the configured storage path and
/// credential pair.
fn session_service(config: &AppConfig) -> SessionService<StaticAuthenticator> {
    SessionService::new(
        LoginStore::new(config.session_file_path()),
        StaticAuthenticator::new(&config.auth.username, &config.auth.password),
    )
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
