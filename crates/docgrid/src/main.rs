mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let result = cli
        .source()
        .and_then(|source| commands::render::run(&source, &cli.options()));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
