//! In-process stores for handler tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use super::{DbError, MessageStore};
use crate::models::{Message, MessageId, MessageText};

/// Vec-backed store; each insert is stamped one second after the previous
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Message>>,
    schema_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn schema_calls(&self) -> usize {
        self.schema_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn ensure_schema(&self) -> Result<(), DbError> {
        self.schema_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn list_messages(&self) -> Result<Vec<Message>, DbError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn insert_message(&self, text: &MessageText) -> Result<MessageId, DbError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i32 + 1;
        let base = Utc::now() - Duration::hours(1);
        rows.push(Message {
            id,
            text: text.as_str().to_owned(),
            created_at: base + Duration::seconds(id as i64),
        });
        Ok(id as MessageId)
    }
}

/// Store whose every operation fails like an unreachable server
pub struct FailingStore;

impl FailingStore {
    pub const DETAIL: &'static str = "connection refused";

    fn error() -> DbError {
        DbError::Sqlx(sqlx::Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            Self::DETAIL,
        )))
    }
}

#[async_trait]
impl MessageStore for FailingStore {
    async fn ensure_schema(&self) -> Result<(), DbError> {
        Err(Self::error())
    }

    async fn list_messages(&self) -> Result<Vec<Message>, DbError> {
        Err(Self::error())
    }

    async fn insert_message(&self, _text: &MessageText) -> Result<MessageId, DbError> {
        Err(Self::error())
    }
}
