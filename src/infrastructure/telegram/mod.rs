//! Telegram integration (teloxide)
//!
//! - `messenger`: [`Messenger`](crate::domain::ports::Messenger) over the Bot API
//! - `dispatcher`: long-polling update loop feeding the session controller

pub mod dispatcher;
pub mod messenger;

pub use dispatcher::run;
pub use messenger::{main_menu, TelegramMessenger};
