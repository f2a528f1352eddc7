use clap::Parser;
use std::io::{self, IsTerminal};
use std::process;
use tracing::{error, Level};

mod cli;
mod walk;

use cli::{Cli, OutputFormat};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, !cli.no_color && io::stderr().is_terminal());

    let use_color = !cli.no_color && io::stdout().is_terminal();
    let options = cli.walk_options();

    let result = walk::handle_walk(cli.directory.as_deref(), &options, cli.output, use_color);

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            error!("{e:#}");
            process::exit(1);
        },
    }
}

/// Log lines go to stderr so the final report on stdout stays parseable.
fn init_logging(verbose: bool, use_color: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(use_color)
        .init();
}
