//! Messenger port (trait) for outbound chat operations.
//!
//! The session controller talks to users only through this trait; the
//! Telegram adapter implements it over the Bot API and tests use a
//! recording mock.

use crate::domain::models::{ChatId, MessageRef, Reply};
use anyhow::Result;
use async_trait::async_trait;

/// Outbound side of the chat platform
///
/// Implementations render [`Reply::with_menu`] as the fixed three-button
/// inline menu. Failures are returned as-is; callers do not retry.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Sends a new message to a chat
    ///
    /// # Errors
    /// Returns error if the platform rejects the request or the transport fails
    async fn send_message(&self, chat: ChatId, reply: Reply) -> Result<()>;

    /// Replaces the text (and menu) of a message the bot sent earlier
    ///
    /// # Errors
    /// Returns error if the message no longer exists or the transport fails
    async fn edit_message(&self, message: MessageRef, reply: Reply) -> Result<()>;

    /// Acknowledges a button press so the client stops its loading indicator
    async fn answer_callback(&self, callback_id: &str) -> Result<()>;
}
