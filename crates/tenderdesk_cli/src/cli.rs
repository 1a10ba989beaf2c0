//! Command-line structure for `tenderdesk`.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tender tracking from the terminal.
#[derive(Parser)]
#[command(name = "tenderdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv); logs go to stderr unless
    /// `logging.dir` is set in the config file
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database path, overrides the config file
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Insert the sample tender list into an empty database
    Seed,

    /// List tenders with search, status filter and sort
    List {
        /// Case-insensitive text matched against title and client
        #[arg(short, long, default_value = "")]
        search: String,

        /// all|active|pending|won|lost
        #[arg(long, default_value = "all")]
        status: String,

        /// deadline|value|risk
        #[arg(long, default_value = "deadline")]
        sort: String,
    },

    /// Show one tender with its documents
    Show { id: i64 },

    /// Create a tender
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        client: String,
        #[arg(long)]
        value: f64,
        /// YYYY-MM-DD
        #[arg(long)]
        deadline: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Change a tender's status
    Status { id: i64, status: String },

    /// Delete a tender with its documents and stored files
    Delete { id: i64 },

    /// Attach a document file to a tender
    Attach { id: i64, path: PathBuf },

    /// Dashboard metrics and breakdowns
    Stats,

    /// Show version
    Version,
}
