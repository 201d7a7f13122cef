//! Command-line configuration for gitday
//!
//! Flags declared here are global: they are accepted before or after any
//! subcommand and override the matching values from the settings file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::period::Period;

/// gitday - what did I work on today?
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gitday")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run (defaults to `today`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the settings file
    ///
    /// Defaults to ~/.gitday.toml. A missing file means built-in defaults.
    #[arg(short, long, env = "GITDAY_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Only include commits by this author (name or email pattern)
    #[arg(long, env = "GITDAY_AUTHOR", global = true)]
    pub author: Option<String>,

    /// Generate an AI summary of the collected commits
    #[arg(long, default_value = "false", global = true)]
    pub summary: bool,

    /// Show at most three commits per repository
    #[arg(long, default_value = "false", global = true)]
    pub compact: bool,

    /// Disable colored terminal output
    #[arg(long, default_value = "false", global = true)]
    pub no_color: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so reports on stdout stay clean.
    #[arg(short, long, default_value = "false", global = true)]
    pub verbose: bool,

    /// Quiet mode - only warnings and errors are logged
    #[arg(short, long, default_value = "false", global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show commits since local midnight
    Today,

    /// Show commits since Monday 00:00
    Week,

    /// Write the report as Markdown
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Period to export
        #[arg(long, value_enum, default_value_t = Period::Today)]
        period: Period,
    },

    /// Summarize and save the report under ~/.gitday/logs
    Log {
        /// Period to log
        #[arg(long, value_enum, default_value_t = Period::Today)]
        period: Period,
    },

    /// Send the report to a chat webhook
    Send {
        /// Post to the configured Slack incoming webhook
        #[arg(long)]
        slack: bool,

        /// Period to send
        #[arg(long, value_enum, default_value_t = Period::Today)]
        period: Period,
    },

    /// Write a starter settings file
    Init {
        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// The subcommand to run, `today` when none was given
    #[must_use]
    pub fn subcommand(&self) -> Command {
        self.command.clone().unwrap_or(Command::Today)
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file exists but could not be read
    #[error("Failed to read settings file {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),

    /// The settings file is not valid TOML for [`crate::settings::Settings`]
    #[error("Invalid settings file {0}: {1}")]
    Parse(PathBuf, #[source] toml::de::Error),

    /// Writing the settings file failed
    #[error("Failed to write settings file {0}: {1}")]
    Write(PathBuf, #[source] std::io::Error),

    /// No home directory to derive a default path from
    #[error("Could not determine the home directory")]
    HomeNotFound,

    /// `send --slack` without a configured webhook
    #[error("slack.webhook_url is not set in the settings file")]
    MissingWebhook,
}
