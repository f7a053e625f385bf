#[cfg(test)]
#[macro_use]
extern crate assert_matches;

mod commands;
mod errors;
mod trace;

use crate::errors::{Error, ExitCode};
use clap::{Parser, Subcommand, ValueEnum};
use gas_oracle_configuration::LogConfig;
use gas_oracle_types::ChainName;
use std::{
    io::{stdout, Write},
    path::PathBuf,
    process::exit,
};

/// Result returning gas oracle cli `Error`
pub(crate) type Result<T> = std::result::Result<T, Error>;

/// Output format
#[derive(ValueEnum, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Format {
    /// Pretty printed JSON
    Json,
    /// YAML
    Yaml,
}

/// What to compute
#[derive(Subcommand, Clone, Debug)]
pub(crate) enum Command {
    /// Storage gas oracle configs of every configured chain
    All,
    /// Remote gas data configs, keyed by domain, to set on one local chain
    Local {
        /// The local chain
        #[clap(long)]
        chain: ChainName,
    },
    /// A single token exchange rate from two token values
    Rate {
        /// The local chain
        #[clap(long)]
        local: ChainName,
        /// Value of the local native token, as a decimal string
        #[clap(long)]
        local_value: String,
        /// The remote chain
        #[clap(long)]
        remote: ChainName,
        /// Value of the remote native token, as a decimal string
        #[clap(long)]
        remote_value: String,
    },
}

/// Command line args
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {
    /// Path to a gas oracle inputs file
    #[clap(long, value_name = "PATH")]
    inputs: Option<PathBuf>,

    /// Built-in chain registry to use when no inputs file is given
    #[clap(long, default_value = "mainnet")]
    environment: String,

    /// Output format
    #[clap(long, value_enum, default_value = "json")]
    format: Format,

    #[clap(subcommand)]
    command: Command,
}

fn write_output(writer: &mut impl Write, message: &str) -> Result<()> {
    writer
        .write_all(message.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|error| Error::BadOutput(error.to_string()))
}

fn fail(error: Error) -> ! {
    eprintln!("Failed: {}", error);
    exit(error.exit_code() as i32)
}

fn run(args: &Args) -> Result<String> {
    let inputs = args.inputs.as_ref().map(commands::load_inputs).transpose()?;

    let log = inputs
        .as_ref()
        .map(|inputs| inputs.logging)
        .unwrap_or_else(LogConfig::default);
    trace::start_tracing(log)?;

    tracing::debug!(command = ?args.command, "Executing");
    let output = commands::execute(&args.command, inputs.as_ref(), &args.environment)?;
    output.render(&args.format)
}

/// Gas oracle cli entry point
fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(output) => match write_output(&mut stdout().lock(), &output) {
            Ok(()) => exit(ExitCode::Ok as i32),
            Err(error) => fail(error),
        },
        Err(error) => fail(error),
    }
}
