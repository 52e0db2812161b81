//! Schema bootstrap command

use anyhow::{Context, Result};

use msgboard_server::{DbConfig, MessageStore, MySqlMessageStore};

/// Create the messages table and exit
pub async fn run_init_db() -> Result<()> {
    let db_config = DbConfig::from_env();
    tracing::info!(database = %db_config, "Ensuring schema");

    MySqlMessageStore::new(db_config)
        .ensure_schema()
        .await
        .context("Failed to create messages table")?;

    println!("messages table ready");
    Ok(())
}
