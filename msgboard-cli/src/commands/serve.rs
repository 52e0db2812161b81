//! HTTP server command

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use msgboard_server::{bootstrap_schema, run_server, DbConfig, MySqlMessageStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "MSGBOARD_BIND", default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,

    /// Abort startup if the schema cannot be created
    #[arg(long)]
    pub strict_schema: bool,

    /// Answer storage failures with a generic message instead of the error text
    #[arg(long)]
    pub hide_error_detail: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DbConfig::from_env();
    tracing::info!(database = %db_config, "Starting msgboard on {}", args.bind);

    let store = Arc::new(MySqlMessageStore::new(db_config));
    bootstrap_schema(store.as_ref(), args.strict_schema)
        .await
        .context("Database initialization failed")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        expose_error_detail: !args.hide_error_detail,
    };

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
