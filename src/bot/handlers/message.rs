use teloxide::prelude::*;

use crate::bot::commands::{self, Command};
use crate::bot::flow::{self, RelaySettings};
use crate::bot::handlers::{advance, HandlerResult};
use crate::bot::inbound::Inbound;
use crate::bot::messenger::Messenger;
use crate::bot::state::RelayDialogue;

pub async fn command_handler(
    bot: Bot,
    dialogue: RelayDialogue,
    msg: Message,
    cmd: Command,
) -> HandlerResult {
    tracing::info!("Command {:?} in chat {}", cmd, msg.chat.id);
    run_command(&bot, &dialogue, cmd).await
}

pub async fn message_handler(
    bot: Bot,
    dialogue: RelayDialogue,
    msg: Message,
    settings: RelaySettings,
) -> HandlerResult {
    let Some(inbound) = Inbound::from_message(&msg) else {
        tracing::debug!("Skipping message without sender in chat {}", msg.chat.id);
        return Ok(());
    };
    relay_message(&bot, &dialogue, &settings, &inbound).await
}

/// Runs a command in the dialogue's chat and stores the state it leaves behind.
pub async fn run_command<M: Messenger + ?Sized>(
    messenger: &M,
    dialogue: &RelayDialogue,
    cmd: Command,
) -> HandlerResult {
    let from = dialogue.get_or_default().await?.name();
    let chat = dialogue.chat_id();
    let next = match cmd {
        Command::Start => commands::handle_start(messenger, chat).await?,
        Command::Cancel => commands::handle_cancel(messenger, chat).await?,
    };
    advance(dialogue, from, next).await
}

/// Feeds a message through the dispatch table and stores the next state.
pub async fn relay_message<M: Messenger + ?Sized>(
    messenger: &M,
    dialogue: &RelayDialogue,
    settings: &RelaySettings,
    inbound: &Inbound,
) -> HandlerResult {
    let state = dialogue.get_or_default().await?;
    let from = state.name();
    let next = flow::on_message(messenger, settings, state, inbound).await?;
    advance(dialogue, from, next).await
}
