//! Repository implementations for database access

pub mod messages;

pub use messages::MySqlMessageStore;
