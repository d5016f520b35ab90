use clap::Parser;
use std::path::PathBuf;

/// Print kernel32 constants and ABI record layouts
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// TOML configuration file; `kernel32-abi.toml` in the working directory
    /// is used when present
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Constants to print instead of the full report
    #[arg(value_name = "CONSTANT")]
    pub names: Vec<String>,
}
