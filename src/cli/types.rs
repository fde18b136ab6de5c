use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "tocer")]
#[command(about = "Generate a table of contents from a structured content tree", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Entity tree to scan (JSON file)
    #[arg(short, long, value_name = "FILE")]
    pub entity: PathBuf,

    /// Generation settings (YAML file; defaults apply when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Output format for the generated outline
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Base URL prefixed to links when the TOC is not relative
    #[arg(short, long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Skip the generation cache
    #[arg(long, default_value_t = false)]
    pub no_cache: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Nested list markup
    Html,
    /// Outline and rewrites as JSON
    Json,
}
