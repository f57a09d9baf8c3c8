use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use pixcrypt_core::PixcryptError;

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub type CliResult<T> = Result<T, PixcryptError>;

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    let result = match args.command {
        Commands::Encrypt(args) => args.run(),
        Commands::Decrypt(args) => args.run(),
        Commands::Interactive(args) => args.run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ Error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
