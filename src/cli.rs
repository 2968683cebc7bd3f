use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition
#[derive(Parser)]
#[command(
    name = "d3d12-wrapgen",
    version,
    about = "Generate idiomatic Rust wrappers from raw bindgen D3D12/DXGI declarations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a bitflags! container from a pasted flags typedef
    Flags {
        /// Print detection diagnostics while parsing
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate a #[repr(iN)] enum from a pasted enum typedef
    Enum {
        /// Print detection diagnostics while parsing
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate a newtype wrapper with accessors from a pasted struct or union
    Struct {
        /// Print detection diagnostics while parsing
        #[arg(short, long)]
        verbose: bool,
        /// Path to a TOML config naming the wrapper seed files
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
