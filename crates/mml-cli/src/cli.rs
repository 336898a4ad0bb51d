//! CLI argument definitions for the portal.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use mml_model::DocumentType;

#[derive(Parser)]
#[command(
    name = "mml",
    version,
    about = "Mines and Minerals Laws portal - registration, library, and consultancy core",
    long_about = "Operator console for the Mines and Minerals Laws portal.\n\n\
                  Inspects the category catalog and the seeded document library,\n\
                  and runs a scripted end-to-end demo of the registration,\n\
                  subscription, and consultancy flows against the in-memory store."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Allow account emails and contact details in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the user categories with their tiers and fees.
    Categories,

    /// List the seeded document library.
    Documents(DocumentsArgs),

    /// Run the scripted end-to-end demo scenario.
    Demo(DemoArgs),
}

#[derive(Parser)]
pub struct DocumentsArgs {
    /// Restrict the listing to one document bucket.
    #[arg(long = "type", value_enum, value_name = "TYPE")]
    pub doc_type: Option<DocTypeArg>,
}

#[derive(Parser)]
pub struct DemoArgs {
    /// Pause store calls to imitate network latency.
    #[arg(long = "simulate-latency")]
    pub simulate_latency: bool,
}

/// CLI document bucket choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DocTypeArg {
    BareAct,
    Notification,
    Circular,
    GovernmentOrder,
    Judgement,
}

impl From<DocTypeArg> for DocumentType {
    fn from(arg: DocTypeArg) -> Self {
        match arg {
            DocTypeArg::BareAct => DocumentType::BareAct,
            DocTypeArg::Notification => DocumentType::Notification,
            DocTypeArg::Circular => DocumentType::Circular,
            DocTypeArg::GovernmentOrder => DocumentType::GovernmentOrder,
            DocTypeArg::Judgement => DocumentType::Judgement,
        }
    }
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
