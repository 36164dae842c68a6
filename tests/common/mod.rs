//! Common test utilities for integration tests
//!
//! Provides a recording messenger and fixtures shared across test files.

#![allow(dead_code)]

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use coeffbot::domain::models::{ChatId, MessageRef, Observation, Reply, UserId};
use coeffbot::domain::ports::Messenger;
use coeffbot::services::{HistoryStore, SessionController};

/// One outbound call seen by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Message { chat: ChatId, reply: Reply },
    Edit { message: MessageRef, reply: Reply },
    Answer { callback_id: String },
}

/// Messenger that records every call instead of talking to Telegram
#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<Sent>>,
    fail: AtomicBool,
    fail_answers: AtomicBool,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail like a transport error
    pub fn fail_all(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    /// Make only callback acknowledgements fail
    pub fn fail_answers(&self) {
        self.fail_answers.store(true, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Replies (sent or edited), skipping callback acknowledgements
    pub fn replies(&self) -> Vec<Reply> {
        self.sent()
            .into_iter()
            .filter_map(|sent| match sent {
                Sent::Message { reply, .. } | Sent::Edit { reply, .. } => Some(reply),
                Sent::Answer { .. } => None,
            })
            .collect()
    }

    pub fn last_reply(&self) -> Reply {
        self.replies().pop().expect("no reply recorded")
    }

    fn record(&self, sent: Sent) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            bail!("transport unavailable");
        }
        self.sent.lock().unwrap().push(sent);
        Ok(())
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_message(&self, chat: ChatId, reply: Reply) -> Result<()> {
        self.record(Sent::Message { chat, reply })
    }

    async fn edit_message(&self, message: MessageRef, reply: Reply) -> Result<()> {
        self.record(Sent::Edit { message, reply })
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        if self.fail_answers.load(Ordering::SeqCst) {
            bail!("query is too old");
        }
        self.record(Sent::Answer {
            callback_id: callback_id.to_string(),
        })
    }
}

/// Controller wired to a fresh store and a recording messenger
pub fn controller() -> (SessionController, Arc<HistoryStore>, Arc<RecordingMessenger>) {
    let store = Arc::new(HistoryStore::new());
    let messenger = Arc::new(RecordingMessenger::new());
    let controller = SessionController::new(Arc::clone(&store), messenger.clone());
    (controller, store, messenger)
}

pub fn values(observations: &[Observation]) -> Vec<f64> {
    observations.iter().map(|o| o.value).collect()
}

pub fn observations(values: &[f64], at: DateTime<Utc>) -> Vec<Observation> {
    values.iter().map(|&v| Observation::new(v, at)).collect()
}

pub const USER: UserId = UserId(1001);
pub const CHAT: ChatId = ChatId(1001);

pub const MENU_MESSAGE: MessageRef = MessageRef {
    chat: CHAT,
    message_id: 77,
};
