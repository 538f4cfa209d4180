use teloxide::types::{
    CallbackQuery, ChatId, Message, MessageEntity, MessageEntityKind, MessageId, User,
};
use teloxide::utils::html;

/// Attachment kinds accepted from customers and operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Photo,
    Document,
    Video,
    Audio,
    VideoNote,
}

impl AttachmentKind {
    /// Short label used in delivery confirmations.
    pub fn label(&self) -> &'static str {
        match self {
            AttachmentKind::Photo => "фото",
            AttachmentKind::Document => "документ",
            AttachmentKind::Video => "видео",
            AttachmentKind::Audio => "аудио",
            AttachmentKind::VideoNote => "видеосообщение",
        }
    }

    /// Video notes are the only kind Telegram refuses a caption for.
    pub fn accepts_caption(&self) -> bool {
        !matches!(self, AttachmentKind::VideoNote)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Attachment {
        kind: AttachmentKind,
        caption: Option<String>,
    },
    /// Commands, stickers, locations and anything else the relay ignores.
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl Sender {
    /// `First Last (@username)` with every part HTML-escaped.
    pub fn display_html(&self) -> String {
        format!(
            "{} {} (@{})",
            html::escape(&self.first_name),
            html::escape(self.last_name.as_deref().unwrap_or("")),
            html::escape(self.username.as_deref().unwrap_or("нет")),
        )
    }
}

impl From<&User> for Sender {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0 as i64,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            username: user.username.clone(),
        }
    }
}

/// A message as seen by the conversation flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    pub chat: ChatId,
    pub message_id: MessageId,
    pub sender: Sender,
    pub content: Content,
}

impl Inbound {
    /// Returns `None` for messages without a sender (channel posts).
    pub fn from_message(msg: &Message) -> Option<Self> {
        let sender = Sender::from(msg.from()?);
        Some(Self {
            chat: msg.chat.id,
            message_id: msg.id,
            sender,
            content: classify(msg),
        })
    }
}

fn classify(msg: &Message) -> Content {
    if let Some(text) = msg.text() {
        return if starts_with_command(msg.entities().unwrap_or_default()) {
            Content::Unsupported
        } else {
            Content::Text(text.to_string())
        };
    }

    let kind = if msg.photo().is_some() {
        AttachmentKind::Photo
    } else if msg.document().is_some() {
        AttachmentKind::Document
    } else if msg.video().is_some() {
        AttachmentKind::Video
    } else if msg.audio().is_some() {
        AttachmentKind::Audio
    } else if msg.video_note().is_some() {
        AttachmentKind::VideoNote
    } else {
        return Content::Unsupported;
    };

    Content::Attachment {
        kind,
        caption: msg.caption().map(str::to_string),
    }
}

/// Telegram marks real commands with a `bot_command` entity at offset 0;
/// plain text that merely begins with `/` has none.
fn starts_with_command(entities: &[MessageEntity]) -> bool {
    entities
        .iter()
        .any(|e| e.kind == MessageEntityKind::BotCommand && e.offset == 0)
}

/// A button press on one of the bot's inline keyboards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonPress {
    pub query_id: String,
    pub chat: ChatId,
    pub message_id: MessageId,
    pub data: String,
}

impl ButtonPress {
    /// Returns `None` when the query has no payload or its message is gone.
    pub fn from_query(q: &CallbackQuery) -> Option<Self> {
        let message = q.message.as_ref()?;
        Some(Self {
            query_id: q.id.clone(),
            chat: message.chat.id,
            message_id: message.id,
            data: q.data.clone()?,
        })
    }
}
