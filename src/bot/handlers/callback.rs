use teloxide::prelude::*;

use crate::bot::flow;
use crate::bot::handlers::{advance, HandlerResult};
use crate::bot::inbound::ButtonPress;
use crate::bot::messenger::Messenger;
use crate::bot::state::RelayDialogue;

pub async fn callback_handler(bot: Bot, dialogue: RelayDialogue, q: CallbackQuery) -> HandlerResult {
    let user_id = q.from.id.0;
    let username = q.from.username.as_deref().unwrap_or("unknown");

    let Some(press) = ButtonPress::from_query(&q) else {
        tracing::warn!("Callback without data or message from user {} ({})", username, user_id);
        bot.answer_callback_query(q.id).await?;
        return Ok(());
    };

    tracing::info!(
        "Callback received: '{}' from user {} ({}) in chat {}",
        press.data, username, user_id, press.chat
    );

    handle_press(&bot, &dialogue, &press).await
}

/// Applies a button press and stores the state it leads to.
pub async fn handle_press<M: Messenger + ?Sized>(
    messenger: &M,
    dialogue: &RelayDialogue,
    press: &ButtonPress,
) -> HandlerResult {
    let from = dialogue.get_or_default().await?.name();
    let next = flow::on_button(messenger, press).await?;
    advance(dialogue, from, next).await
}
