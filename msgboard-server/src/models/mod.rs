//! Domain models with validation at construction
//!
//! User input is validated when building these types.
//! Invalid input returns ValidationError, not panic.

pub mod message;
pub mod validation;

pub use message::{Message, MessageId, MessageText};
pub use validation::ValidationError;
