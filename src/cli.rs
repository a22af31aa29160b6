use clap::Parser;

use crate::config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

/// Generate randomized JSON test payloads from a field schema
#[derive(Parser, Debug, Clone)]
#[command(name = "fixturegen", version, about, long_about = None)]
pub struct Cli {
    /// Schema file (YAML or JSON), or a directory of schema files
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Number of documents to generate per schema
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Path to the settings file
    #[arg(short, long, env = "FIXTUREGEN_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Seed for reproducible output
    #[arg(long, env = "FIXTUREGEN_SEED")]
    pub seed: Option<u64>,

    /// Maximum object-list nesting depth
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Reject schemas with duplicate field names
    #[arg(long)]
    pub strict: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, env = "FIXTUREGEN_LOG")]
    pub log_level: Option<String>,
}
