//! The relay's dispatch table: `(state, event) -> (Bot API calls, next state)`.
//!
//! Every function here takes the current event, performs its side effects
//! through a [`Messenger`] and returns the state the dialogue should move to.
//! Nothing in this module touches the dialogue storage itself.

use teloxide::types::{ChatId, InlineKeyboardMarkup};
use teloxide::utils::html;

use crate::bot::callback_data::{CallbackDataError, MenuButton};
use crate::bot::inbound::{AttachmentKind, ButtonPress, Content, Inbound, Sender};
use crate::bot::keyboards;
use crate::bot::menu;
use crate::bot::messenger::{Messenger, Outgoing};
use crate::bot::state::ConversationState;
use crate::bot::texts;
use crate::error::RelayResult;
use crate::utils::logging::{log_delivery_error, log_ignored_failure, log_relay};

/// Telegram measures text length in UTF-16 code units.
const MAX_TEXT_LEN: usize = 4096;
const MAX_CAPTION_LEN: usize = 1024;

/// Runtime settings shared by all conversations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelaySettings {
    /// Chat that receives every customer question.
    pub operator_chat_id: ChatId,
}

/// Handles a press on any inline button.
pub async fn on_button<M: Messenger + ?Sized>(
    messenger: &M,
    press: &ButtonPress,
) -> RelayResult<ConversationState> {
    if let Err(e) = messenger.answer_callback(&press.query_id).await {
        log_ignored_failure("answer_callback", press.chat.0, &e.to_string());
    }

    let button = match MenuButton::parse(&press.data) {
        Ok(button) => button,
        Err(e) => {
            tracing::warn!("Rejected callback in chat {}: {}", press.chat, e);
            if matches!(e, CallbackDataError::InvalidReplyTarget(_)) {
                let notice = Outgoing::text(texts::INVALID_REPLY_TARGET_TEXT);
                if let Err(e) = messenger.send(press.chat, notice).await {
                    log_ignored_failure("invalid_reply_target", press.chat.0, &e.to_string());
                }
            }
            return Ok(ConversationState::Main);
        }
    };

    if button.deletes_source_message() {
        if let Err(e) = messenger.delete(press.chat, press.message_id).await {
            log_ignored_failure("delete_message", press.chat.0, &e.to_string());
        }
    }

    if let Some((screen, next)) = menu::route(button) {
        send_or_apologize(messenger, press.chat, screen.render(), "menu").await;
        return Ok(next);
    }

    match button {
        MenuButton::AdminReply(user_id) => {
            let prompt = Outgoing::text(texts::admin_reply_prompt(user_id));
            send_or_apologize(messenger, press.chat, prompt, "reply_prompt").await;
            Ok(ConversationState::AdminReply { user_id })
        }
        MenuButton::UserReply => {
            let prompt = Outgoing::text(texts::USER_REPLY_PROMPT);
            send_or_apologize(messenger, press.chat, prompt, "reply_prompt").await;
            Ok(ConversationState::UserReply)
        }
        _ => Ok(ConversationState::Main),
    }
}

/// Sends a screen or prompt. If Telegram refuses it, the chat gets the
/// generic error text instead so it is never left without a response.
async fn send_or_apologize<M: Messenger + ?Sized>(
    messenger: &M,
    chat: ChatId,
    message: Outgoing,
    kind: &str,
) {
    let Err(e) = messenger.send(chat, message).await else {
        return;
    };
    log_delivery_error(kind, chat.0, &e.to_string());
    if let Err(e) = messenger.send(chat, Outgoing::text(texts::GENERIC_ERROR_TEXT)).await {
        log_ignored_failure("generic_error", chat.0, &e.to_string());
    }
}

/// Handles a non-command message according to the chat's current state.
pub async fn on_message<M: Messenger + ?Sized>(
    messenger: &M,
    settings: &RelaySettings,
    state: ConversationState,
    msg: &Inbound,
) -> RelayResult<ConversationState> {
    match (state, &msg.content) {
        (state, Content::Unsupported) => {
            tracing::debug!("Ignoring unsupported message in chat {}", msg.chat);
            Ok(state)
        }
        (ConversationState::Main, _) => {
            let nudge = Outgoing::text(texts::NUDGE_TEXT).with_keyboard(keyboards::back_to_main_menu());
            send_or_apologize(messenger, msg.chat, nudge, "nudge").await;
            Ok(ConversationState::Main)
        }
        (ConversationState::AskQuestion, Content::Text(text)) => {
            forward_question(messenger, settings, msg, text).await?;
            Ok(ConversationState::AskQuestion)
        }
        (ConversationState::AskQuestion, Content::Attachment { kind, .. }) => {
            forward_attachment(messenger, settings, msg, *kind).await?;
            Ok(ConversationState::AskQuestion)
        }
        (ConversationState::AdminReply { user_id }, content) => {
            reply_to_user(messenger, msg, user_id, content).await?;
            Ok(ConversationState::Main)
        }
        (ConversationState::UserReply, content) => {
            reply_to_operator(messenger, settings, msg, content).await?;
            Ok(ConversationState::Main)
        }
    }
}

fn appeal_header(sender: &Sender) -> String {
    format!(
        "<b>Обращение от:</b> {}\n<b>User ID:</b> {}\n",
        sender.display_html(),
        sender.id
    )
}

fn user_reply_header(sender: &Sender) -> String {
    format!(
        "<b>Ответ от пользователя:</b> {}\n<b>User ID:</b> {}",
        sender.display_html(),
        sender.id
    )
}

fn with_caption(header: String, caption: Option<&str>) -> String {
    match caption {
        Some(c) if !c.is_empty() => {
            let room = MAX_CAPTION_LEN.saturating_sub(utf16_len(&header) + 1);
            format!("{header}\n{}", escape_within(c, room))
        }
        _ => header,
    }
}

/// Appends escaped user text to an HTML header, cutting the text so the whole
/// message stays within Telegram's text limit.
fn with_body(header: String, text: &str) -> String {
    let room = MAX_TEXT_LEN.saturating_sub(utf16_len(&header));
    format!("{header}{}", escape_within(text, room))
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// HTML-escapes `text`, keeping the result within `budget` UTF-16 units.
/// A cut text ends with an ellipsis and never splits an escape sequence.
fn escape_within(text: &str, budget: usize) -> String {
    let escaped = html::escape(text);
    if utf16_len(&escaped) <= budget {
        return escaped;
    }

    let limit = budget.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    let mut buf = [0u8; 4];
    for c in text.chars() {
        let piece = html::escape(c.encode_utf8(&mut buf));
        let len = utf16_len(&piece);
        if used + len > limit {
            break;
        }
        used += len;
        out.push_str(&piece);
    }
    out.push('…');
    out
}

async fn forward_question<M: Messenger + ?Sized>(
    messenger: &M,
    settings: &RelaySettings,
    msg: &Inbound,
    text: &str,
) -> RelayResult<()> {
    let operator = settings.operator_chat_id;
    let header = format!("{}\n<b>Сообщение:</b> ", appeal_header(&msg.sender));
    let relayed = Outgoing::text(with_body(header, text))
        .with_keyboard(keyboards::admin_reply(msg.sender.id));

    match messenger.send(operator, relayed).await {
        Ok(()) => {
            log_relay("question", msg.sender.id, operator.0);
            let ack = Outgoing::text(texts::MESSAGE_RECEIVED_TEXT)
                .with_keyboard(keyboards::continue_appeal());
            messenger.send(msg.chat, ack).await
        }
        Err(e) => {
            log_delivery_error("question", operator.0, &e.to_string());
            messenger
                .send(msg.chat, Outgoing::text(texts::FORWARD_FAILED_TEXT))
                .await
        }
    }
}

async fn forward_attachment<M: Messenger + ?Sized>(
    messenger: &M,
    settings: &RelaySettings,
    msg: &Inbound,
    kind: AttachmentKind,
) -> RelayResult<()> {
    let operator = settings.operator_chat_id;
    let note = Outgoing::text(format!("{}{}", appeal_header(&msg.sender), texts::ATTACHMENT_NOTE))
        .with_keyboard(keyboards::admin_reply(msg.sender.id));

    if let Err(e) = messenger.forward(operator, msg.chat, msg.message_id).await {
        log_delivery_error(kind.label(), operator.0, &e.to_string());
        return messenger
            .send(msg.chat, Outgoing::text(texts::FORWARD_FAILED_TEXT))
            .await;
    }
    log_relay(kind.label(), msg.sender.id, operator.0);

    // The file already reached the operator, so the customer is still acknowledged.
    if let Err(e) = messenger.send(operator, note).await {
        log_delivery_error("attachment_note", operator.0, &e.to_string());
    }

    let ack = Outgoing::text(texts::FILE_RECEIVED_TEXT).with_keyboard(keyboards::continue_appeal());
    messenger.send(msg.chat, ack).await
}

/// Copies an attachment with a new caption; video notes cannot carry one,
/// so they are forwarded and followed by the caption as a separate message.
async fn relay_attachment<M: Messenger + ?Sized>(
    messenger: &M,
    to: ChatId,
    msg: &Inbound,
    kind: AttachmentKind,
    caption: String,
    keyboard: InlineKeyboardMarkup,
) -> RelayResult<()> {
    if kind.accepts_caption() {
        messenger
            .copy(to, msg.chat, msg.message_id, caption, keyboard)
            .await
    } else {
        messenger.forward(to, msg.chat, msg.message_id).await?;
        messenger
            .send(to, Outgoing::text(caption).with_keyboard(keyboard))
            .await
    }
}

async fn reply_to_user<M: Messenger + ?Sized>(
    messenger: &M,
    msg: &Inbound,
    user_id: i64,
    content: &Content,
) -> RelayResult<()> {
    let recipient = ChatId(user_id);
    let (delivered, kind_label) = match content {
        Content::Text(text) => {
            let body = with_body(format!("{}\n", texts::ADMIN_REPLY_HEADER), text);
            let reply = Outgoing::text(body).with_keyboard(keyboards::user_reply());
            (messenger.send(recipient, reply).await, None)
        }
        Content::Attachment { kind, caption } => {
            let caption = with_caption(texts::ADMIN_REPLY_HEADER.to_string(), caption.as_deref());
            let result =
                relay_attachment(messenger, recipient, msg, *kind, caption, keyboards::user_reply())
                    .await;
            (result, Some(kind.label()))
        }
        Content::Unsupported => return Ok(()),
    };

    let confirmation = match delivered {
        Ok(()) => {
            log_relay("operator_reply", msg.sender.id, user_id);
            match kind_label {
                Some(label) => format!("Ваш ответ ({label}) отправлен пользователю {user_id}."),
                None => texts::reply_sent_to_user(user_id),
            }
        }
        Err(e) => {
            log_delivery_error("operator_reply", user_id, &e.to_string());
            texts::REPLY_TO_USER_FAILED_TEXT.to_string()
        }
    };
    messenger.send(msg.chat, Outgoing::text(confirmation)).await
}

async fn reply_to_operator<M: Messenger + ?Sized>(
    messenger: &M,
    settings: &RelaySettings,
    msg: &Inbound,
    content: &Content,
) -> RelayResult<()> {
    let operator = settings.operator_chat_id;
    let keyboard = keyboards::admin_reply(msg.sender.id);
    let (delivered, kind_label) = match content {
        Content::Text(text) => {
            let body = with_body(format!("{}\n\n", user_reply_header(&msg.sender)), text);
            let reply = Outgoing::text(body).with_keyboard(keyboard);
            (messenger.send(operator, reply).await, None)
        }
        Content::Attachment { kind, caption } => {
            let caption = with_caption(user_reply_header(&msg.sender), caption.as_deref());
            let result = relay_attachment(messenger, operator, msg, *kind, caption, keyboard).await;
            (result, Some(kind.label()))
        }
        Content::Unsupported => return Ok(()),
    };

    let confirmation = match delivered {
        Ok(()) => {
            log_relay("user_reply", msg.sender.id, operator.0);
            match kind_label {
                Some(label) => format!("Ваш ответ ({label}) отправлен администратору."),
                None => texts::REPLY_SENT_TO_OPERATOR_TEXT.to_string(),
            }
        }
        Err(e) => {
            log_delivery_error("user_reply", operator.0, &e.to_string());
            texts::REPLY_TO_OPERATOR_FAILED_TEXT.to_string()
        }
    };
    messenger.send(msg.chat, Outgoing::text(confirmation)).await
}
