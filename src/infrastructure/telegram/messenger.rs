//! Telegram Bot API implementation of the [`Messenger`] port.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use teloxide::payloads::setters::*;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode};
use teloxide::RequestError;
use tracing::{debug, instrument};

use crate::domain::models::{ChatId, MenuAction, MessageRef, Reply, TextFormat};
use crate::domain::ports::Messenger;
use crate::infrastructure::logging::SecretScrubber;

/// Sends, edits and acknowledges through a teloxide [`Bot`]
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
    scrubber: SecretScrubber,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self {
            bot,
            scrubber: SecretScrubber::new(),
        }
    }

    /// Converts a transport error into one that is safe to log
    fn transport_error(&self, operation: &str, err: &RequestError) -> anyhow::Error {
        anyhow!(
            "{operation} failed: {}",
            self.scrubber.scrub_message(&err.to_string())
        )
    }
}

/// The fixed action menu, one button per row
pub fn main_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(
        MenuAction::ALL
            .map(|action| vec![InlineKeyboardButton::callback(action.label(), action.callback_data())]),
    )
}

const fn parse_mode(format: TextFormat) -> Option<ParseMode> {
    match format {
        TextFormat::Plain => None,
        TextFormat::Markdown => Some(ParseMode::MarkdownV2),
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    #[instrument(skip(self, reply), fields(chat = chat.0))]
    async fn send_message(&self, chat: ChatId, reply: Reply) -> Result<()> {
        let mut request = self
            .bot
            .send_message(teloxide::types::ChatId(chat.0), reply.text);
        if let Some(mode) = parse_mode(reply.format) {
            request = request.parse_mode(mode);
        }
        if reply.with_menu {
            request = request.reply_markup(main_menu());
        }

        request
            .await
            .map_err(|err| self.transport_error("sendMessage", &err))?;
        debug!("message sent");
        Ok(())
    }

    #[instrument(skip(self, reply), fields(chat = message.chat.0, message_id = message.message_id))]
    async fn edit_message(&self, message: MessageRef, reply: Reply) -> Result<()> {
        let mut request = self.bot.edit_message_text(
            teloxide::types::ChatId(message.chat.0),
            MessageId(message.message_id),
            reply.text,
        );
        if let Some(mode) = parse_mode(reply.format) {
            request = request.parse_mode(mode);
        }
        if reply.with_menu {
            request = request.reply_markup(main_menu());
        }

        request
            .await
            .map_err(|err| self.transport_error("editMessageText", &err))?;
        debug!("message edited");
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.bot
            .answer_callback_query(callback_id.to_string())
            .await
            .map_err(|err| self.transport_error("answerCallbackQuery", &err))?;
        Ok(())
    }
}
