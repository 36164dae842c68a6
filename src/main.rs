//! Coeffbot entry point.

use std::process::ExitCode;
use std::sync::Arc;

use teloxide::Bot;

use coeffbot::infrastructure::config::ConfigLoader;
use coeffbot::infrastructure::logging::LoggerImpl;
use coeffbot::infrastructure::telegram::{self, TelegramMessenger};
use coeffbot::services::{HistoryStore, SessionController};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let _logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    // Validated non-empty by the loader.
    let token = config.telegram.token.unwrap_or_default();
    let bot = Bot::new(token);

    let store = Arc::new(HistoryStore::new());
    let messenger = Arc::new(TelegramMessenger::new(bot.clone()));
    let controller = Arc::new(SessionController::new(Arc::clone(&store), messenger));

    telegram::run(bot, controller).await;

    tracing::info!(users = store.user_count().await, "shutting down");
    ExitCode::SUCCESS
}
