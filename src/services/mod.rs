//! Service layer
//!
//! - `analyzer`: the multiplier heuristic and input parsing
//! - `history_store`: per-user bounded histories
//! - `session_controller`: event dispatch and replies
//! - `replies`: user-facing texts

pub mod analyzer;
pub mod history_store;
pub mod replies;
pub mod session_controller;

pub use analyzer::{analyze, parse_coefficients};
pub use history_store::{HistoryHandle, HistoryStore};
pub use replies::StatsReport;
pub use session_controller::SessionController;
