//! Outbound side of the relay.
//!
//! Conversation flows only ever talk to Telegram through [`Messenger`], so the
//! dispatch table can be exercised against a recording stub in tests while
//! production uses [`teloxide::Bot`].

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardMarkup, InputFile, MessageId, ParseMode};
use url::Url;

use crate::error::RelayResult;

/// A message the bot sends on its own (as opposed to forwarding or copying).
#[derive(Debug, Clone, PartialEq)]
pub enum Outgoing {
    Text {
        text: String,
        keyboard: Option<InlineKeyboardMarkup>,
    },
    Photo {
        url: String,
        caption: Option<String>,
        keyboard: Option<InlineKeyboardMarkup>,
    },
}

impl Outgoing {
    pub fn text(text: impl Into<String>) -> Self {
        Outgoing::Text {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn photo(url: impl Into<String>) -> Self {
        Outgoing::Photo {
            url: url.into(),
            caption: None,
            keyboard: None,
        }
    }

    pub fn with_caption(self, value: impl Into<String>) -> Self {
        match self {
            Outgoing::Photo { url, keyboard, .. } => Outgoing::Photo {
                url,
                caption: Some(value.into()),
                keyboard,
            },
            text => text,
        }
    }

    pub fn with_keyboard(self, markup: InlineKeyboardMarkup) -> Self {
        match self {
            Outgoing::Text { text, .. } => Outgoing::Text {
                text,
                keyboard: Some(markup),
            },
            Outgoing::Photo { url, caption, .. } => Outgoing::Photo {
                url,
                caption,
                keyboard: Some(markup),
            },
        }
    }

    pub fn keyboard(&self) -> Option<&InlineKeyboardMarkup> {
        match self {
            Outgoing::Text { keyboard, .. } | Outgoing::Photo { keyboard, .. } => keyboard.as_ref(),
        }
    }
}

/// The handful of Bot API calls the relay needs.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, chat: ChatId, message: Outgoing) -> RelayResult<()>;

    async fn forward(&self, to: ChatId, from: ChatId, message_id: MessageId) -> RelayResult<()>;

    /// Re-sends a message without the "forwarded from" header, replacing its caption.
    async fn copy(
        &self,
        to: ChatId,
        from: ChatId,
        message_id: MessageId,
        caption: String,
        keyboard: InlineKeyboardMarkup,
    ) -> RelayResult<()>;

    async fn delete(&self, chat: ChatId, message_id: MessageId) -> RelayResult<()>;

    async fn answer_callback(&self, query_id: &str) -> RelayResult<()>;
}

#[async_trait]
impl Messenger for Bot {
    async fn send(&self, chat: ChatId, message: Outgoing) -> RelayResult<()> {
        match message {
            Outgoing::Text { text, keyboard } => {
                let mut request = self.send_message(chat, text).parse_mode(ParseMode::Html);
                if let Some(markup) = keyboard {
                    request = request.reply_markup(markup);
                }
                request.await?;
            }
            Outgoing::Photo { url, caption, keyboard } => {
                let mut request = self.send_photo(chat, InputFile::url(Url::parse(&url)?));
                if let Some(caption) = caption {
                    request = request.caption(caption).parse_mode(ParseMode::Html);
                }
                if let Some(markup) = keyboard {
                    request = request.reply_markup(markup);
                }
                request.await?;
            }
        }
        Ok(())
    }

    async fn forward(&self, to: ChatId, from: ChatId, message_id: MessageId) -> RelayResult<()> {
        self.forward_message(to, from, message_id).await?;
        Ok(())
    }

    async fn copy(
        &self,
        to: ChatId,
        from: ChatId,
        message_id: MessageId,
        caption: String,
        keyboard: InlineKeyboardMarkup,
    ) -> RelayResult<()> {
        self.copy_message(to, from, message_id)
            .caption(caption)
            .parse_mode(ParseMode::Html)
            .reply_markup(keyboard)
            .await?;
        Ok(())
    }

    async fn delete(&self, chat: ChatId, message_id: MessageId) -> RelayResult<()> {
        self.delete_message(chat, message_id).await?;
        Ok(())
    }

    async fn answer_callback(&self, query_id: &str) -> RelayResult<()> {
        self.answer_callback_query(query_id).await?;
        Ok(())
    }
}
