mod commands;
mod input_output;
mod logging;
mod spanning_args;

use clap::Parser;
use commands::Commands;

/// wslice: build word vocabularies, and tokenize text with them.
#[derive(clap::Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    logging: logging::LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.init()?;

    args.command.run()
}
