//! Storage gateway - all database access goes through `MessageStore`
//!
//! # Design Principles
//!
//! - One connection per operation, released on every exit path
//! - One statement per operation, inserts committed in a transaction
//! - No pooling, no retries: failures surface to the caller as `DbError`

pub mod connection;
pub mod repos;
pub mod schema;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

use crate::models::{Message, MessageId, MessageText};

pub use repos::MySqlMessageStore;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Storage operations the HTTP layer depends on
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Create the `messages` table if it does not exist. Idempotent.
    async fn ensure_schema(&self) -> Result<(), DbError>;

    /// All messages, newest first.
    async fn list_messages(&self) -> Result<Vec<Message>, DbError>;

    /// Insert one message and return its engine-assigned id.
    async fn insert_message(&self, text: &MessageText) -> Result<MessageId, DbError>;
}

/// Run the startup schema bootstrap.
///
/// A failure is logged and swallowed so the HTTP listener still comes up,
/// unless `strict` is set, in which case it is returned.
pub async fn bootstrap_schema(store: &dyn MessageStore, strict: bool) -> Result<(), DbError> {
    match store.ensure_schema().await {
        Ok(()) => {
            tracing::info!("Schema ready");
            Ok(())
        }
        Err(e) if strict => Err(e),
        Err(e) => {
            tracing::error!(error = %e, "Database initialization failed, continuing without schema");
            Ok(())
        }
    }
}
