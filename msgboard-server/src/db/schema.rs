//! Schema bootstrap for the `messages` table

use sqlx::mysql::MySqlConnection;

/// DDL for the single table the board uses
pub const CREATE_MESSAGES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS messages (
        id INT AUTO_INCREMENT PRIMARY KEY,
        message TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Create the `messages` table if absent.
///
/// Safe to call on every start; an existing table is left untouched.
pub async fn create_messages_table(conn: &mut MySqlConnection) -> Result<(), sqlx::Error> {
    tracing::debug!("Ensuring messages table exists");

    sqlx::query(CREATE_MESSAGES_TABLE).execute(conn).await?;

    Ok(())
}
