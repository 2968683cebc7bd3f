use anyhow::Result;
use std::path::Path;

use d3d12_wrapgen::cli::{Cli, Commands};
use d3d12_wrapgen::config::Config;
use d3d12_wrapgen::console;
use d3d12_wrapgen::pipeline::Pipeline;
use d3d12_wrapgen::registry::TypeRegistry;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Flags { verbose } => run_flags(verbose)?,
        Commands::Enum { verbose } => run_enum(verbose)?,
        Commands::Struct { verbose, config } => run_struct(verbose, config.as_deref())?,
    }

    Ok(())
}

/// Run the flags command
fn run_flags(verbose: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let mut reader = stdin.lock();

    println!("Paste flags definition from bindings.rs:");
    let block = console::read_block(&mut reader)?;
    println!("Enter prefix that should be stripped from flag variants:");
    let prefix = console::read_line(&mut reader)?;

    let pipeline = Pipeline::new(verbose);
    let source = pipeline.run_flags(&block, &prefix)?;
    println!("{}", source);

    Ok(())
}

/// Run the enum command
fn run_enum(verbose: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let mut reader = stdin.lock();

    println!("Paste enum definition from bindings.rs:");
    let block = console::read_block(&mut reader)?;
    println!("Enter prefix that should be stripped from enum variants:");
    let prefix = console::read_line(&mut reader)?;

    let pipeline = Pipeline::new(verbose);
    let source = pipeline.run_enum(&block, &prefix)?;
    println!("{}", source);

    Ok(())
}

/// Run the struct command
fn run_struct(verbose: bool, config_path: Option<&Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default_config(),
    };

    // The registry is built once, before any input is parsed
    let registry = TypeRegistry::from_seed_files(&config)?;
    if verbose {
        println!("Loaded {} wrapper types from seed files", registry.len());
    }

    let stdin = std::io::stdin();
    let mut reader = stdin.lock();

    println!("Paste struct definition from bindings.rs:");
    let block = console::read_block(&mut reader)?;

    let pipeline = Pipeline::new(verbose);
    let source = pipeline.run_struct(&block, &registry)?;
    println!("{}", source);

    Ok(())
}
