//! CLI argument definitions for the `backoffice` binary.

use std::path::PathBuf;

use backoffice_model::{Domain, StatusFilter};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "backoffice",
    version,
    about = "Content back-office - manage site content from the terminal",
    long_about = "Manage the content domains of a multi-tenant site (banners, blog posts,\n\
                  careers, FAQs, ...) through its GraphQL API.\n\n\
                  Sign in with `backoffice login --email you@example.com`, or pass --demo\n\
                  to work against built-in sample data."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Work against built-in sample data instead of the API.
    #[arg(long, global = true)]
    pub demo: bool,

    /// Answer yes to every confirmation prompt.
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Tenant to scope reads and writes to (overrides the config file).
    #[arg(long = "application-id", value_name = "ID", global = true)]
    pub application_id: Option<String>,

    /// Config file (default: platform config directory).
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Sign in with a one-time code sent by email.
    Login(LoginArgs),

    /// Forget the stored session.
    Logout,

    /// Show the signed-in user.
    Whoami,

    /// Print the effective settings, or write them to the config file.
    Config(ConfigArgs),

    /// List the content domains.
    Domains,

    /// List the records of a domain.
    List(ListArgs),

    /// Show one record.
    Show(RecordArgs),

    /// Show derived counts for a domain.
    Stats(FilterArgs),

    /// Flip a record between active and inactive.
    Toggle(RecordArgs),

    /// Delete one record.
    Delete(RecordArgs),

    /// Delete several records; failures do not stop the rest.
    BulkDelete(IdsArgs),

    /// Renumber records in the given order, starting at 0.
    Reorder(IdsArgs),

    /// Export a domain as CSV.
    Export(ExportArgs),

    /// Create a record from a JSON input object.
    Create(CreateArgs),

    /// Update a record from a JSON input object; only given fields change.
    Update(UpdateArgs),

    /// Show metrics across every domain.
    Dashboard(DashboardArgs),
}

#[derive(Args)]
pub struct LoginArgs {
    /// Account email address.
    #[arg(long)]
    pub email: String,

    /// Code from the email; prompted for when omitted.
    #[arg(long)]
    pub code: Option<String>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the effective settings (file, environment and flags) to the config file.
    #[arg(long)]
    pub save: bool,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Content domain, e.g. blog-posts or faqs.
    #[arg(value_name = "DOMAIN")]
    pub domain: Domain,

    /// Case-insensitive text search.
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Keep only active or inactive records.
    #[arg(long, default_value = "any")]
    pub status: StatusFilter,

    /// Keep only one category (department, industry, ...).
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Show at most this many rows.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Args)]
pub struct RecordArgs {
    #[arg(value_name = "DOMAIN")]
    pub domain: Domain,

    #[arg(value_name = "ID")]
    pub id: String,
}

#[derive(Args)]
pub struct IdsArgs {
    #[arg(value_name = "DOMAIN")]
    pub domain: Domain,

    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output file, or `-` for stdout (default: <domain>-<date>.csv).
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct InputArgs {
    /// Input object as inline JSON.
    #[arg(long, value_name = "JSON", conflicts_with = "file")]
    pub json: Option<String>,

    /// Read the input object from a JSON file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct CreateArgs {
    #[arg(value_name = "DOMAIN")]
    pub domain: Domain,

    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args)]
pub struct UpdateArgs {
    #[arg(value_name = "DOMAIN")]
    pub domain: Domain,

    #[arg(value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args)]
pub struct DashboardArgs {
    /// Print the metrics as JSON.
    #[arg(long)]
    pub json: bool,
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
