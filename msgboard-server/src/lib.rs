//! msgboard-server: message board over a single MySQL table
//!
//! Users post short text messages through an HTML form; the board lists
//! them newest first. The crate is split into:
//! - `config`: connection parameters resolved from the environment
//! - `db`: the storage gateway (`MessageStore`) and its MySQL implementation
//! - `models`: validated domain types
//! - `view`: HTML rendering of the board
//! - `http`: axum router, handlers and error responses

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod view;

pub use config::DbConfig;
pub use db::{bootstrap_schema, DbError, MessageStore, MySqlMessageStore};
pub use http::{run_server, ServerConfig};
