use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::core::time::DateRange;
use crate::core::types::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "tidewatch",
    version,
    about = "Ocean hazard hotspots and social post triage"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (TOML). Default: config/tidewatch.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database path (overrides config)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormatArg>,

    /// Output file (default: stdout)
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Increase verbosity (debug, trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Append logs to this file as well as stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Cluster recent reports into hotspots
    Hotspots {
        /// Lookback window
        #[arg(long, value_enum, default_value = "24h")]
        date_range: DateRangeArg,
    },
    /// Classify a text snippet without storing it
    Classify {
        /// Text to classify
        text: String,
        #[arg(long)]
        platform: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Create and list hazard reports
    Reports {
        #[command(subcommand)]
        action: ReportsCommand,
    },
    /// Ingest and list social media posts
    Posts {
        #[command(subcommand)]
        action: PostsCommand,
    },
    /// Insert sample reports and posts
    Seed,
}

#[derive(Subcommand, Debug)]
pub enum ReportsCommand {
    /// Create a report from a JSON body (file, or stdin when omitted)
    Add {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List reports, newest first
    List {
        #[arg(long, value_enum)]
        date_range: Option<DateRangeArg>,
        /// Hazard type or ALL
        #[arg(long)]
        hazard_type: Option<String>,
        /// Severity or ALL
        #[arg(long)]
        severity: Option<String>,
        #[arg(long)]
        verified: Option<bool>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PostsCommand {
    /// Classify a post from a JSON body and store it if relevant
    Add {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List posts, newest first (at most 100)
    List {
        #[arg(long)]
        platform: Option<String>,
        /// Hazard type or ALL
        #[arg(long)]
        hazard_type: Option<String>,
        #[arg(long)]
        is_relevant: Option<bool>,
        #[arg(long, value_enum)]
        date_range: Option<DateRangeArg>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum DateRangeArg {
    #[value(name = "1h")]
    Hour,
    #[value(name = "24h")]
    Day,
    #[value(name = "7d")]
    Week,
    #[value(name = "30d")]
    Month,
}

impl From<DateRangeArg> for DateRange {
    fn from(value: DateRangeArg) -> Self {
        match value {
            DateRangeArg::Hour => DateRange::LastHour,
            DateRangeArg::Day => DateRange::LastDay,
            DateRangeArg::Week => DateRange::LastWeek,
            DateRangeArg::Month => DateRange::LastMonth,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormatArg {
    Json,
    Jsonl,
    Markdown,
    Csv,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(value: OutputFormatArg) -> Self {
        match value {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Jsonl => OutputFormat::Jsonl,
            OutputFormatArg::Markdown => OutputFormat::Markdown,
            OutputFormatArg::Csv => OutputFormat::Csv,
        }
    }
}
