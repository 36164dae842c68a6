//! Domain layer for coeffbot
//!
//! Core models, errors and port traits. No platform or I/O code lives here.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ParseError, SessionError, SessionResult};
