pub mod analysis;
pub mod config;
pub mod event;
pub mod history;
pub mod observation;

pub use analysis::{Advice, AnalysisResult, LastHigh};
pub use config::{Config, LogFormat, LoggingConfig, RotationPolicy, TelegramConfig};
pub use event::{BotEvent, ChatId, MenuAction, MessageRef, Reply, TextFormat};
pub use history::{UserHistory, HISTORY_CAPACITY};
pub use observation::{Observation, UserId};
