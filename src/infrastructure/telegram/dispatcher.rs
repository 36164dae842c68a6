//! Long-polling dispatcher: Telegram updates in, [`BotEvent`]s out.

use std::sync::Arc;
use teloxide::dispatching::UpdateFilterExt;
use teloxide::prelude::*;
use tracing::{debug, error, info};

use crate::domain::models::{self, BotEvent, MessageRef};
use crate::services::SessionController;

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Polls for updates until Ctrl-C.
///
/// Handlers run concurrently across chats. Delivery failures are logged and
/// the loop keeps serving.
pub async fn run(bot: Bot, controller: Arc<SessionController>) {
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    info!("starting long polling");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![controller])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    info!("polling stopped");
}

async fn on_message(
    update: Update,
    msg: Message,
    controller: Arc<SessionController>,
) -> HandlerResult {
    let (Some(user), Some(text)) = (update.from(), msg.text()) else {
        debug!("ignoring non-text message");
        return Ok(());
    };

    let event = BotEvent::from_message(
        models::UserId(user.id.0),
        models::ChatId(msg.chat.id.0),
        text.to_string(),
    );
    deliver(&controller, event).await;
    Ok(())
}

async fn on_callback(query: CallbackQuery, controller: Arc<SessionController>) -> HandlerResult {
    let message = query.regular_message().map(|msg| MessageRef {
        chat: models::ChatId(msg.chat.id.0),
        message_id: msg.id.0,
    });

    let event = BotEvent::MenuAction {
        user: models::UserId(query.from.id.0),
        callback_id: query.id.clone(),
        message,
        data: query.data.clone().unwrap_or_default(),
    };
    deliver(&controller, event).await;
    Ok(())
}

async fn deliver(controller: &SessionController, event: BotEvent) {
    let user = event.user();
    if let Err(err) = controller.handle(event).await {
        error!(%user, error = %format!("{err:#}"), "failed to deliver reply");
    }
}
