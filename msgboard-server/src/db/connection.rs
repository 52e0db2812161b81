//! Per-operation connection handling
//!
//! Every storage call opens its own connection and hands it back through
//! [`release`], whatever the outcome of the statement.

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;

/// Open a fresh MySQL connection.
///
/// # Errors
///
/// Returns an error if the server is unreachable or rejects the credentials.
pub async fn connect(options: &MySqlConnectOptions) -> Result<MySqlConnection, sqlx::Error> {
    MySqlConnection::connect_with(options).await
}

/// Close a connection, logging (not propagating) a failed shutdown.
pub async fn release(conn: MySqlConnection) {
    if let Err(e) = conn.close().await {
        tracing::debug!(error = %e, "connection close failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DbConfig;

    // Run with: MYSQL_HOST=127.0.0.1 cargo test -p msgboard-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn connects_and_queries() {
        let options = DbConfig::from_env().connect_options();
        let mut conn = connect(&options).await.expect("connection failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&mut conn)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
        release(conn).await;
    }

    #[tokio::test]
    async fn unreachable_server_is_an_error() {
        let config = DbConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            ..DbConfig::default()
        };

        assert!(connect(&config.connect_options()).await.is_err());
    }
}
