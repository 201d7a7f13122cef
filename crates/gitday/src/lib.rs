// Copyright (c) 2026 - present kso1204
// SPDX-License-Identifier: MIT

//! gitday: a daily report of your git activity
//!
//! This crate is the command-line surface of gitday. It resolves settings,
//! turns a reporting period into a time window, drives the scanner and
//! collector from `gitday-git`, renders the result for a terminal or as
//! Markdown, and optionally asks a `gitday-ai` provider for a summary.

pub mod commands;
pub mod config;
pub mod notify;
pub mod output;
pub mod period;
pub mod settings;

pub use config::{Cli, Command, ConfigError};
pub use period::{Period, TimeWindow};
pub use settings::Settings;
