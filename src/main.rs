//! mojicount CLI entry point

use clap::Parser;
use mojicount::cli::count::CountOptions;
use mojicount::cli::init::InitOutcome;
use mojicount::cli::{Cli, Command, common};
use std::process;

fn main() {
    let cli = Cli::parse();
    common::init_tracing(cli.verbose);

    let exit_code = match &cli.command {
        Command::Count {
            paths,
            format,
            rules,
        } => mojicount::cli::count::run_count(&CountOptions {
            config_path: &cli.config,
            paths,
            format: *format,
            color: cli.color,
            rules,
            verbose: cli.verbose,
        }),
        Command::Status {
            file,
            language,
            format,
            rules,
        } => mojicount::cli::status::run_status(
            &cli.config,
            file,
            language.as_deref(),
            *format,
            rules,
        ),
        Command::Rules { format, rules } => {
            mojicount::cli::rules::run_rules(&cli.config, *format, cli.color, rules, cli.verbose)
        }
        Command::Init { force } => match mojicount::cli::init::run_init(&cli.config, *force) {
            Ok(outcome) => {
                let verb = match outcome {
                    InitOutcome::Created => "Created",
                    InitOutcome::Overwritten => "Overwrote",
                    InitOutcome::Skipped => "Kept existing",
                };
                println!("{} {}", verb, cli.config.display());
                common::EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                common::EXIT_ERROR
            }
        },
    };

    process::exit(exit_code);
}
