//! Platform-neutral inbound events and outbound replies.
//!
//! The Telegram adapter converts updates into [`BotEvent`]s and renders
//! [`Reply`]s back into Bot API calls; nothing below the adapter knows
//! about teloxide types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::observation::UserId;

/// Chat the bot talks in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatId(pub i64);

impl From<UserId> for ChatId {
    /// A private chat shares its id with the user.
    fn from(user: UserId) -> Self {
        Self(i64::try_from(user.0).unwrap_or(i64::MAX))
    }
}

/// A bot message that can be edited in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRef {
    pub chat: ChatId,
    pub message_id: i32,
}

/// Actions offered by the inline menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    Add,
    Stats,
    Reset,
}

impl MenuAction {
    pub const ALL: [Self; 3] = [Self::Add, Self::Stats, Self::Reset];

    /// Callback payload carried by the inline button
    pub const fn callback_data(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Stats => "stats",
            Self::Reset => "reset",
        }
    }

    /// Button caption
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "➕ Добавить коэффициенты",
            Self::Stats => "📊 Статистика",
            Self::Reset => "♻️ Сбросить",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.callback_data())
    }
}

impl FromStr for MenuAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "stats" => Ok(Self::Stats),
            "reset" => Ok(Self::Reset),
            other => Err(format!("unknown menu action: {other}")),
        }
    }
}

/// Inbound event delivered by the hosting platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotEvent {
    /// `/start` command
    Start { user: UserId, chat: ChatId },

    /// Inline menu button press. `data` is the raw callback payload; it is
    /// resolved to a [`MenuAction`] by the controller.
    MenuAction {
        user: UserId,
        callback_id: String,
        message: Option<MessageRef>,
        data: String,
    },

    /// Free-text message
    Text {
        user: UserId,
        chat: ChatId,
        text: String,
    },
}

impl BotEvent {
    /// Classifies an incoming text message: `/start` (also `/start@bot` and
    /// `/start <payload>`) becomes [`BotEvent::Start`], anything else is text.
    pub fn from_message(user: UserId, chat: ChatId, text: String) -> Self {
        let command = text.split_whitespace().next().unwrap_or_default();
        let command = command.split('@').next().unwrap_or_default();
        if command == "/start" {
            Self::Start { user, chat }
        } else {
            Self::Text { user, chat, text }
        }
    }

    pub const fn user(&self) -> UserId {
        match self {
            Self::Start { user, .. } | Self::MenuAction { user, .. } | Self::Text { user, .. } => {
                *user
            }
        }
    }
}

/// How the platform should interpret reply text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    #[default]
    Plain,
    Markdown,
}

/// Outbound message, optionally carrying the action menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub format: TextFormat,
    pub with_menu: bool,
}

impl Reply {
    pub fn with_menu(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
            with_menu: true,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
            with_menu: false,
        }
    }

    #[must_use]
    pub const fn markdown(mut self) -> Self {
        self.format = TextFormat::Markdown;
        self
    }
}
