use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use brcheck_core::{BracketRegistry, ConfigError, ConfigFile, Diagnostic, check};
use clap::Parser;
use thiserror::Error;

/// A configurable bracket matching checker
#[derive(Parser, Debug)]
#[command(name = "brcheck", version, about)]
struct Args {
    /// JSON file describing the bracket pairs to enforce
    config: PathBuf,

    /// File to check
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let registry = match load_registry(&args.config) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("{}: {e}", args.config.display());
            return ExitCode::from(2);
        }
    };

    match check_file(&args.file, &registry) {
        Ok(()) => {
            println!("check passed: all brackets are balanced");
            ExitCode::SUCCESS
        }
        Err(CheckError::Io(e)) => {
            eprintln!("{}: {e}", args.file.display());
            ExitCode::from(3)
        }
        Err(CheckError::Diagnostic(diagnostic)) => {
            eprintln!("{}: {diagnostic}", args.file.display());
            ExitCode::from(1)
        }
    }
}

fn load_registry(path: &Path) -> Result<BracketRegistry, LoadError> {
    let raw = fs::read_to_string(path)?;
    let config: ConfigFile = serde_json::from_str(&raw)?;
    Ok(BracketRegistry::from_specs(&config.bracket)?)
}

fn check_file(path: &Path, registry: &BracketRegistry) -> Result<(), CheckError> {
    let content = fs::read_to_string(path)?;
    check(&content, registry)?;
    Ok(())
}

#[derive(Debug, Error)]
enum LoadError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
enum CheckError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Diagnostic(#[from] Diagnostic),
}
