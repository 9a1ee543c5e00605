//! CLI interface using clap.
//!
//! Provides command-line arguments and subcommands for the tool.

use clap::{Parser, Subcommand};

/// focustime - terminal Pomodoro timer with a mocked login session.
#[derive(Parser, Debug)]
#[command(name = "focustime")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive timer.
    Run,

    /// Show the timer configuration and login session.
    Status,

    /// Log in with the mocked credentials.
    Login {
        /// Username to log in as.
        username: String,

        /// Password for the mocked check.
        password: String,
    },

    /// Clear the stored login session.
    Logout,

    /// Show or change the configured mode durations.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show the data files in use.
    Paths,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the configured durations.
    Show,

    /// Update durations (minutes) and save the config file.
    Set {
        /// Pomodoro duration in minutes.
        #[arg(short, long)]
        pomodoro: Option<u32>,

        /// Short break duration in minutes.
        #[arg(short, long)]
        short_break: Option<u32>,

        /// Long break duration in minutes.
        #[arg(short, long)]
        long_break: Option<u32>,
    },
}
