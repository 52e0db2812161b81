//! Message entity and validated message text

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::ValidationError;

/// Capacity of a MySQL `TEXT` column in bytes
pub const MAX_TEXT_LEN: usize = 65535;

/// Engine-assigned message identifier
pub type MessageId = u64;

/// Stored message, as read back from the `messages` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Message {
    pub id: i32,
    #[sqlx(rename = "message")]
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Validated message text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    /// Create new message text.
    ///
    /// # Rules
    /// - Must not be empty
    /// - Max 65535 bytes
    /// - Stored verbatim otherwise (whitespace is not trimmed)
    ///
    /// # Example
    /// ```
    /// use msgboard_server::models::MessageText;
    ///
    /// assert!(MessageText::new("hello").is_ok());
    /// assert!(MessageText::new("").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "message" });
        }

        if s.len() > MAX_TEXT_LEN {
            return Err(ValidationError::TooLong {
                field: "message",
                max: MAX_TEXT_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for MessageText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
