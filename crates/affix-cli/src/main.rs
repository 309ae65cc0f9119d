//! affix CLI — naming-prefix enforcement for compiled type metadata.
//!
//! This binary provides the `affix` command with subcommands for checking
//! type manifests, listing rules, and explaining finding codes. See
//! `affix --help` for usage.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("AFFIX_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let formatter: Box<dyn affix_output::OutputFormatter> = if cli.json {
        Box::new(affix_output::json::JsonFormatter)
    } else {
        Box::new(affix_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check {
            manifests,
            severity,
            confidence,
            suppress,
            sequential,
        } => commands::check::run(
            &*formatter,
            commands::check::CheckArgs {
                manifests,
                severity,
                confidence,
                suppress,
                sequential,
            },
        ),
        Commands::Rules => commands::rules::run(&*formatter),
        Commands::Explain { code } => commands::explain::run(&*formatter, &code),
        Commands::Completion { shell } => commands::completion::run(&shell),
    };

    std::process::exit(exit_code);
}
