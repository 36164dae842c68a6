//! Session controller dispatching platform events to the history store and
//! analyzer and answering through the [`Messenger`] port.
//!
//! Input and empty-history errors never leave this module: they are turned
//! into fixed replies. Only messenger failures are returned to the caller.

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::domain::errors::{SessionError, SessionResult};
use crate::domain::models::{AnalysisResult, BotEvent, ChatId, MenuAction, MessageRef, Reply, UserId};
use crate::domain::ports::Messenger;
use crate::services::analyzer::{analyze, parse_coefficients};
use crate::services::history_store::HistoryStore;
use crate::services::replies::{self, StatsReport};

/// Handles bot events for all users.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use coeffbot::domain::models::{BotEvent, ChatId, UserId};
/// use coeffbot::domain::ports::Messenger;
/// use coeffbot::services::{HistoryStore, SessionController};
///
/// async fn example(messenger: Arc<dyn Messenger>) -> anyhow::Result<()> {
///     let controller = SessionController::new(Arc::new(HistoryStore::new()), messenger);
///     controller
///         .handle(BotEvent::Text {
///             user: UserId(7),
///             chat: ChatId(7),
///             text: "1.2 2.5 3.1".to_string(),
///         })
///         .await
/// }
/// ```
pub struct SessionController {
    store: Arc<HistoryStore>,
    messenger: Arc<dyn Messenger>,
}

impl SessionController {
    pub fn new(store: Arc<HistoryStore>, messenger: Arc<dyn Messenger>) -> Self {
        Self { store, messenger }
    }

    pub const fn store(&self) -> &Arc<HistoryStore> {
        &self.store
    }

    /// Routes one inbound event to its handler
    ///
    /// # Errors
    /// Returns error only if the reply could not be delivered
    #[instrument(skip_all, fields(user = %event.user()))]
    pub async fn handle(&self, event: BotEvent) -> Result<()> {
        match event {
            BotEvent::Start { chat, .. } => self.on_start(chat).await,
            BotEvent::MenuAction {
                user,
                callback_id,
                message,
                data,
            } => self.on_menu_action(user, &callback_id, message, &data).await,
            BotEvent::Text { user, chat, text } => self.on_text(user, chat, &text).await,
        }
    }

    /// `/start`: greeting plus the menu
    pub async fn on_start(&self, chat: ChatId) -> Result<()> {
        self.messenger.send_message(chat, replies::welcome()).await
    }

    /// Inline menu button press.
    ///
    /// The reply replaces the message that carried the menu; when that
    /// message is no longer accessible it goes to the user's private chat.
    pub async fn on_menu_action(
        &self,
        user: UserId,
        callback_id: &str,
        message: Option<MessageRef>,
        data: &str,
    ) -> Result<()> {
        if let Err(err) = self.messenger.answer_callback(callback_id).await {
            warn!(error = %err, "failed to acknowledge callback");
        }

        self.store.get_or_create(user).await;

        let action = match data.parse::<MenuAction>() {
            Ok(action) => action,
            Err(err) => {
                warn!(%err, "ignoring callback");
                return Ok(());
            }
        };
        debug!(%action, "menu action");

        let reply = match action {
            MenuAction::Add => replies::add_prompt(),
            MenuAction::Reset => {
                self.store.reset(user).await;
                info!("history reset");
                replies::reset_done()
            }
            MenuAction::Stats => match self.stats(user, Utc::now()).await {
                Ok(report) => Reply::with_menu(report.render()),
                Err(err) => {
                    debug!(%err, "no stats");
                    replies::no_data()
                }
            },
        };

        match message {
            Some(message) => self.messenger.edit_message(message, reply).await,
            None => self.messenger.send_message(ChatId::from(user), reply).await,
        }
    }

    /// Free-text message: a batch of multipliers, answered with advice
    pub async fn on_text(&self, user: UserId, chat: ChatId, text: &str) -> Result<()> {
        if text.trim_start().starts_with('/') {
            debug!("ignoring unsupported command");
            return Ok(());
        }

        let reply = match self.add_values(user, text, Utc::now()).await {
            Ok(result) => Reply::with_menu(result.advice.text()),
            Err(err) => {
                info!(%err, "rejected input");
                replies::parse_error()
            }
        };
        self.messenger.send_message(chat, reply).await
    }

    /// Parses `text`, records the values at `now` and analyzes the result.
    ///
    /// On a parse error the history is left untouched.
    pub async fn add_values(
        &self,
        user: UserId,
        text: &str,
        now: DateTime<Utc>,
    ) -> SessionResult<AnalysisResult> {
        let values = parse_coefficients(text)?;
        let snapshot = self.store.append(user, &values, now).await;
        analyze(&snapshot, now).ok_or(SessionError::EmptyHistory)
    }

    /// Summary statistics for the stats action
    pub async fn stats(&self, user: UserId, now: DateTime<Utc>) -> SessionResult<StatsReport> {
        let snapshot = self.store.snapshot(user).await;
        if snapshot.is_empty() {
            return Err(SessionError::EmptyHistory);
        }

        let analysis = analyze(&snapshot, now).ok_or(SessionError::EmptyHistory)?;
        Ok(StatsReport {
            total: snapshot.len(),
            analysis,
        })
    }
}
