use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

/// Per-chat conversation state kept in the dialogue storage.
///
/// The only remembered datum, the user an operator is answering, lives
/// inside [`ConversationState::AdminReply`], so resetting the dialogue to
/// [`ConversationState::Main`] also forgets the recipient.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConversationState {
    #[default]
    Main,
    /// Customer is describing a problem; text and files go to the operator.
    AskQuestion,
    /// Operator is writing one reply to `user_id`.
    AdminReply { user_id: i64 },
    /// Customer is writing one reply to the operator.
    UserReply,
}

impl ConversationState {
    pub fn name(&self) -> &'static str {
        match self {
            ConversationState::Main => "main",
            ConversationState::AskQuestion => "ask_question",
            ConversationState::AdminReply { .. } => "admin_reply",
            ConversationState::UserReply => "user_reply",
        }
    }

    /// Recipient remembered for an operator reply, if any.
    pub fn reply_target(&self) -> Option<i64> {
        match self {
            ConversationState::AdminReply { user_id } => Some(*user_id),
            _ => None,
        }
    }
}

pub type RelayStorage = InMemStorage<ConversationState>;
pub type RelayDialogue = Dialogue<ConversationState, RelayStorage>;
