//! Coeffbot - crash-game multiplier advisor for Telegram
//!
//! Users send the multipliers of recent rounds; the bot keeps the last 50
//! per user and answers with a simple heuristic recommendation and
//! summary statistics.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, errors and port traits
//! - **Service Layer** (`services`): history store, analyzer, session controller
//! - **Infrastructure Layer** (`infrastructure`): Telegram, configuration, logging
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use coeffbot::domain::models::{Advice, Observation};
//! use coeffbot::services::analyze;
//!
//! let now = Utc::now();
//! let history: Vec<Observation> = [2.0, 1.0, 1.2, 1.1, 1.3, 1.0]
//!     .into_iter()
//!     .map(|value| Observation::new(value, now))
//!     .collect();
//!
//! let result = analyze(&history, now).expect("history is not empty");
//! assert_eq!(result.low_streak, 5);
//! assert_eq!(result.advice, Advice::HighExpected);
//! ```

pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Advice, AnalysisResult, BotEvent, Config, LastHigh, MenuAction, Observation, Reply,
    UserHistory, UserId,
};
pub use domain::ports::Messenger;
pub use domain::{ParseError, SessionError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{HistoryStore, SessionController};
