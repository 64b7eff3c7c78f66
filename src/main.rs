//! Blogshift - Jekyll to Docusaurus blog migration
//!
//! Converts Jekyll posts and author listings into a Docusaurus blog and
//! normalizes existing Docusaurus posts in place.

use clap::Parser;

mod authors;
mod batch;
mod cli;
mod commands;
mod common;
mod config;
mod error;
mod frontmatter;
mod normalize;
mod operations;
mod rewrite;
mod ui;

use cli::{Cli, Commands};
use commands::RunOptions;
use error::Result;

/// `warn` by default, `info` for this crate with `--verbose`; `RUST_LOG`
/// overrides both.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,blogshift=info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config,
        source,
        target,
        verbose,
        dry_run,
        command,
    } = cli;
    let options = RunOptions { verbose, dry_run };
    let load_config = || commands::load_config(config.as_deref(), source, target);

    match command {
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
        Commands::Convert(args) => commands::convert::run(&load_config()?, options, args),
        Commands::Authors(args) => commands::authors::run(&load_config()?, options, args),
        Commands::Fix(args) => commands::fix::run(&load_config()?, options, args),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
