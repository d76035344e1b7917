use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use geowars_app::cli::Cli;

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("geowars_app=info,geowars_sim=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = geowars_app::run(&cli, Box::new(std::io::stdout())) {
        tracing::error!(%err, "geowars failed to run");
        process::exit(1);
    }
}
