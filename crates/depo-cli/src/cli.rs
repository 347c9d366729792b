//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use depo_ingest::MediaType;
use std::path::PathBuf;

/// Depo - Extract key facts, exhibits and objections from deposition transcripts.
#[derive(Debug, Parser)]
#[command(name = "depo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Sectioned CSV
    Csv,
    /// Quiet format (counts only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a transcript and display the findings
    Analyze(AnalyzeArgs),

    /// Print the normalized text of a transcript
    Extract(ExtractArgs),

    /// Print the response schema sent to the extraction service
    Schema,

    /// Re-export a previously saved analysis
    Export(ExportArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Declared document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MediaTypeArg {
    /// application/pdf
    Pdf,
    /// text/plain
    Text,
}

/// Where and how to export a result.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Directory for export files (defaults to the current directory)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Write transcript_analysis.json
    #[arg(long)]
    pub json: bool,

    /// Write transcript_analysis.csv
    #[arg(long)]
    pub csv: bool,

    /// Copy the JSON result to the clipboard
    #[arg(long)]
    pub copy: bool,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Transcript file (.pdf or .txt)
    pub input: PathBuf,

    /// Override the type inferred from the file extension
    #[arg(short, long, value_enum)]
    pub media_type: Option<MediaTypeArg>,

    /// API key for the extraction service (defaults to GEMINI_API_KEY, then API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Use the contents of FILE as the service reply instead of calling out
    #[arg(long, value_name = "FILE")]
    pub mock_response: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Transcript file (.pdf or .txt)
    pub input: PathBuf,

    /// Override the type inferred from the file extension
    #[arg(short, long, value_enum)]
    pub media_type: Option<MediaTypeArg>,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Saved analysis (transcript_analysis.json)
    pub input: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Csv => crate::config::OutputFormat::Csv,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<MediaTypeArg> for MediaType {
    fn from(arg: MediaTypeArg) -> Self {
        match arg {
            MediaTypeArg::Pdf => MediaType::Pdf,
            MediaTypeArg::Text => MediaType::PlainText,
        }
    }
}
