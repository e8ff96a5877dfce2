use clap::Parser;
use tick::cli::commands::Cli;
use tick::cli::handlers;
use tracing_subscriber::EnvFilter;

fn main() {
    // Persistence failures are warnings, not errors; TICK_LOG controls
    // verbosity.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TICK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
