use clap::Parser;
use phishml_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging before any command runs.
    logging::init(cli.log_target());

    if let Err(err) = cli.run().await {
        eprintln!("phishml error: {:#}", err);
        std::process::exit(1);
    }
}
