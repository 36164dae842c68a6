//! Port trait definitions (Hexagonal Architecture)
//!
//! - Messenger: outbound chat operations (send, edit, acknowledge)
//!
//! Infrastructure adapters implement these so the services stay
//! independent of the chat platform.

pub mod messenger;

pub use messenger::Messenger;
