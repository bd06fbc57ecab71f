//! adboard CLI - advertisement board HTTP service
//!
//! This is the entry point for the adboard binary. It parses arguments,
//! loads environment configuration, initializes tracing, and starts the
//! HTTP server.

use anyhow::Result;
use clap::{Parser, Subcommand};

use tracing_setup::TracingConfig;

mod config;
mod server;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "adboard",
    author,
    version,
    about = "Advertisement board HTTP service backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(server::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env files are optional; real environment always wins
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => server::run(args).await,
    }
}
