use std::process;

use clap::Parser;
use giticket::commit::Rejection;
use giticket::Cli;

fn main() {
    // Logs go to stderr and stay quiet unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        if let Some(rejection) = e.downcast_ref::<Rejection>() {
            for line in rejection.diagnostics() {
                eprintln!("{line}");
            }
            process::exit(1);
        }

        eprintln!("Error: {e}");

        // Print the full error chain if available
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("  Caused by: {err}");
            source = err.source();
        }

        process::exit(1);
    }
}
