//! `adboard serve` - run the HTTP server

use std::net::SocketAddr;

use adboard_server::db;
use adboard_server::http::{run_server, ServerConfig};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::config;

#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = 8080)]
    pub port: u16,

    /// PostgreSQL connection string (overrides POSTGRES_* environment variables)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    pub cors_permissive: bool,
}

pub async fn run(args: ServeArgs) -> Result<()> {
    let database_url = args.database_url.unwrap_or_else(config::database_url);

    let pool = db::create_pool(&database_url)
        .await
        .context("could not connect to database")?;

    // Provision the advertisement table before accepting requests
    db::migrations::run(&pool)
        .await
        .context("could not provision database tables")?;

    let bind_addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("invalid host/port combination")?;
    info!("Starting adboard server on {}", bind_addr);

    let config = ServerConfig {
        bind_addr,
        cors_permissive: args.cors_permissive,
    };

    run_server(pool, config).await?;
    Ok(())
}
