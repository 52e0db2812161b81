//! MySQL-backed message store

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;

use crate::config::DbConfig;
use crate::db::{connection, schema, DbError, MessageStore};
use crate::models::{Message, MessageId, MessageText};

const LIST_MESSAGES: &str = r#"
    SELECT id, message, created_at
    FROM messages
    ORDER BY created_at DESC, id DESC
"#;

const INSERT_MESSAGE: &str = "INSERT INTO messages (message) VALUES (?)";

/// Message store over a MySQL database
pub struct MySqlMessageStore {
    config: DbConfig,
    options: MySqlConnectOptions,
}

impl MySqlMessageStore {
    pub fn new(config: DbConfig) -> Self {
        let options = config.connect_options();
        Self { config, options }
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    async fn connect(&self) -> Result<MySqlConnection, DbError> {
        connection::connect(&self.options).await.map_err(|e| {
            tracing::debug!(host = %self.config.host, error = %e, "connection failed");
            DbError::from(e)
        })
    }
}

#[async_trait]
impl MessageStore for MySqlMessageStore {
    async fn ensure_schema(&self) -> Result<(), DbError> {
        let mut conn = self.connect().await?;
        let result = schema::create_messages_table(&mut conn).await;
        connection::release(conn).await;

        Ok(result?)
    }

    async fn list_messages(&self) -> Result<Vec<Message>, DbError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query_as::<_, Message>(LIST_MESSAGES)
            .fetch_all(&mut conn)
            .await;
        connection::release(conn).await;

        let messages = result?;
        tracing::debug!(count = messages.len(), "listed messages");
        Ok(messages)
    }

    async fn insert_message(&self, text: &MessageText) -> Result<MessageId, DbError> {
        let mut conn = self.connect().await?;
        let result = insert(&mut conn, text).await;
        connection::release(conn).await;

        let id = result?;
        tracing::debug!(id, "inserted message");
        Ok(id)
    }
}

async fn insert(conn: &mut MySqlConnection, text: &MessageText) -> Result<MessageId, sqlx::Error> {
    let mut tx = conn.begin().await?;

    let done = sqlx::query(INSERT_MESSAGE)
        .bind(text.as_str())
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(done.last_insert_id())
}
