//! msgboard CLI - runs the message board server and its maintenance commands
//!
//! - `serve`: bootstrap the schema and serve the board over HTTP
//! - `init-db`: create the `messages` table and exit
//! - `config`: show the resolved database connection (password redacted)

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "msgboard",
    author,
    version,
    about = "Minimal message board backed by MySQL",
    long_about = "Post short text messages through a web form and read them back newest first. \
                  Connection settings come from MYSQL_HOST, MYSQL_PORT, MYSQL_USER, \
                  MYSQL_PASSWORD and MYSQL_DB."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (bootstraps the schema first)
    Serve(commands::serve::ServeArgs),
    /// Create the messages table if it does not exist
    InitDb,
    /// Print the resolved database connection settings
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is normal
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb => commands::run_init_db().await?,
        Commands::Config => commands::run_config(),
    }

    Ok(())
}
