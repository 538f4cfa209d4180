pub mod callback;
pub mod message;

use teloxide::{
    dispatching::{dialogue, UpdateHandler},
    prelude::*,
};

use crate::bot::commands::Command;
use crate::bot::flow::RelaySettings;
use crate::bot::state::{ConversationState, RelayDialogue, RelayStorage};
use crate::utils::logging::log_transition;

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = Result<(), HandlerError>;

pub struct BotHandler {
    pub settings: RelaySettings,
}

impl BotHandler {
    pub fn new(settings: RelaySettings) -> Self {
        Self { settings }
    }

    /// Update tree: commands first, then any other message, then button presses.
    /// Every branch runs inside the chat's dialogue.
    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        let settings = self.settings;

        dialogue::enter::<Update, RelayStorage, ConversationState, _>()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(message::command_handler),
            )
            .branch(Update::filter_message().endpoint(
                move |bot: Bot, dialogue: RelayDialogue, msg: Message| async move {
                    message::message_handler(bot, dialogue, msg, settings).await
                },
            ))
            .branch(Update::filter_callback_query().endpoint(callback::callback_handler))
    }
}

/// Persists the next state of a chat's dialogue.
pub(crate) async fn advance(
    dialogue: &RelayDialogue,
    from: &str,
    next: ConversationState,
) -> HandlerResult {
    log_transition(dialogue.chat_id().0, from, next.name());
    dialogue.update(next).await?;
    Ok(())
}
