//! daemon-gen - daemon launcher generator
//!
//! A build-time tool that validates an application descriptor, extracts the
//! bundled launcher scripts into an output directory and writes the
//! app-config.sh a shell-based process supervisor sources at startup.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod arguments;
mod bundle;
mod cli;
mod commands;
mod descriptor;
mod emitter;
mod error;
mod extractor;
mod generator;
mod temp;

use cli::{Cli, Commands};

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "daemon_gen=debug"
    } else {
        "daemon_gen=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "Error producing daemon");
        eprintln!("Error: {}", e);
        if let Some(help) = miette::Diagnostic::help(&e) {
            eprintln!("Help: {}", help);
        }
        std::process::exit(1);
    }
}
