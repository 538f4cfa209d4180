use teloxide::types::ChatId;
use teloxide::utils::command::BotCommands;

use crate::bot::keyboards;
use crate::bot::menu::Screen;
use crate::bot::messenger::{Messenger, Outgoing};
use crate::bot::state::ConversationState;
use crate::bot::texts;
use crate::error::RelayResult;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "Открыть главное меню")]
    Start,
    #[command(description = "Отменить текущий диалог")]
    Cancel,
}

/// `/start`: show the main menu and forget any open flow.
pub async fn handle_start<M: Messenger + ?Sized>(
    messenger: &M,
    chat: ChatId,
) -> RelayResult<ConversationState> {
    messenger.send(chat, Screen::MainMenu.render()).await?;
    Ok(ConversationState::Main)
}

/// `/cancel`: leave whatever flow the chat is in.
pub async fn handle_cancel<M: Messenger + ?Sized>(
    messenger: &M,
    chat: ChatId,
) -> RelayResult<ConversationState> {
    let reply = Outgoing::text(texts::CANCEL_TEXT).with_keyboard(keyboards::main_menu());
    messenger.send(chat, reply).await?;
    Ok(ConversationState::Main)
}
