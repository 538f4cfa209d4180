use support_relay_bot::bot::flow::RelaySettings;
use support_relay_bot::bot::handlers::BotHandler;
use support_relay_bot::bot::state::{ConversationState, RelayDialogue, RelayStorage};
use teloxide::types::ChatId;

#[tokio::test]
async fn test_schema_builds() {
    let handler = BotHandler::new(RelaySettings {
        operator_chat_id: ChatId(1138693316),
    });

    // This should not panic - create the schema
    let _schema = handler.schema();
}

#[tokio::test]
async fn test_sessions_are_per_chat() {
    let storage = RelayStorage::new();
    let operator = RelayDialogue::new(storage.clone(), ChatId(1));
    let customer = RelayDialogue::new(storage.clone(), ChatId(2));

    assert_eq!(operator.get_or_default().await.unwrap(), ConversationState::Main);

    operator
        .update(ConversationState::AdminReply { user_id: 2 })
        .await
        .unwrap();
    customer.update(ConversationState::AskQuestion).await.unwrap();

    assert_eq!(
        operator.get().await.unwrap(),
        Some(ConversationState::AdminReply { user_id: 2 })
    );
    assert_eq!(customer.get().await.unwrap(), Some(ConversationState::AskQuestion));
}

#[tokio::test]
async fn test_resetting_forgets_reply_target() {
    let storage = RelayStorage::new();
    let operator = RelayDialogue::new(storage, ChatId(1));

    operator
        .update(ConversationState::AdminReply { user_id: 77 })
        .await
        .unwrap();
    operator.update(ConversationState::Main).await.unwrap();

    let state = operator.get_or_default().await.unwrap();
    assert_eq!(state, ConversationState::Main);
    assert_eq!(state.reply_target(), None);
}
