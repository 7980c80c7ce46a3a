mod commands;
mod disk_cache;
mod input_output;
mod logging;
mod responses;
mod tokenizer_mode;
mod vocab_source;

use clap::Parser;
use commands::Commands;

/// wordrank: an `o200k_base` BPE tokenizer.
#[derive(clap::Parser, Debug)]
#[command(name = "wordrank", version)]
pub struct Args {
    #[command(flatten)]
    logging: logging::LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging(2)?;

    args.command.run()
}
