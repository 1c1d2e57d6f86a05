//! CLI argument definitions for the profile form driver.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "profile-form",
    version,
    about = "Validate Japanese profile form input (name, katakana reading, gender, age)",
    long_about = "Drive the profile form from the command line.\n\n\
                  Applies input events exactly as the form does: names reject digits\n\
                  and ASCII symbols, readings must be full-width katakana, and full-width digits\n\
                  in the age are converted to half-width before they are checked."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include field values (personal data) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the form fields and their validation rules.
    Fields,

    /// Apply a single value to a blank form and show the result.
    Check(CheckArgs),

    /// Apply a script of input events and show the final form state.
    Replay(ReplayArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Field control name (lastName, firstName, lastNameKana, firstNameKana, gender, age).
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Raw input value.
    #[arg(value_name = "VALUE", default_value = "")]
    pub value: String,

    /// Control type the value came from.
    #[arg(long = "control", value_enum, default_value = "text")]
    pub control: ControlArg,
}

#[derive(Parser)]
pub struct ReplayArgs {
    /// Event script: a JSON array or JSON Lines of {field, value, control}.
    #[arg(value_name = "EVENTS")]
    pub events: PathBuf,

    /// Submit after the last event. Exits with status 1 if the form is not ready.
    #[arg(long = "submit")]
    pub submit: bool,

    /// Print the final state as JSON instead of tables.
    #[arg(long = "json", conflicts_with = "plain")]
    pub json: bool,

    /// Print the final state as plain text lines instead of tables.
    #[arg(long = "plain")]
    pub plain: bool,
}

/// CLI control type choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ControlArg {
    Text,
    Number,
    Radio,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
