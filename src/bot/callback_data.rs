//! Callback payloads carried by inline keyboard buttons.

use std::fmt;
use thiserror::Error;

const ADMIN_REPLY_PREFIX: &str = "admin_reply_";

/// Every button the bot puts on a keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Approve,
    Reject,
    Contact,
    Back,
    MainMenu,
    AddMore,
    Done,
    /// Operator wants to answer the user with this id.
    AdminReply(i64),
    /// Customer wants to answer the operator.
    UserReply,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallbackDataError {
    #[error("cannot extract user id from '{0}'")]
    InvalidReplyTarget(String),
    #[error("unknown callback data '{0}'")]
    Unknown(String),
}

impl MenuButton {
    pub fn parse(data: &str) -> Result<Self, CallbackDataError> {
        let button = match data {
            "approve" => MenuButton::Approve,
            "reject" => MenuButton::Reject,
            "contact" => MenuButton::Contact,
            "back" => MenuButton::Back,
            "main_menu" => MenuButton::MainMenu,
            "add_more" => MenuButton::AddMore,
            "done" => MenuButton::Done,
            "user_reply" => MenuButton::UserReply,
            other => match other.strip_prefix(ADMIN_REPLY_PREFIX) {
                Some(id) => MenuButton::AdminReply(
                    id.parse()
                        .map_err(|_| CallbackDataError::InvalidReplyTarget(other.to_string()))?,
                ),
                None => return Err(CallbackDataError::Unknown(other.to_string())),
            },
        };
        Ok(button)
    }

    /// Reply-flow buttons keep the message they are attached to.
    pub fn deletes_source_message(&self) -> bool {
        !matches!(self, MenuButton::AdminReply(_) | MenuButton::UserReply)
    }
}

impl fmt::Display for MenuButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuButton::Approve => f.write_str("approve"),
            MenuButton::Reject => f.write_str("reject"),
            MenuButton::Contact => f.write_str("contact"),
            MenuButton::Back => f.write_str("back"),
            MenuButton::MainMenu => f.write_str("main_menu"),
            MenuButton::AddMore => f.write_str("add_more"),
            MenuButton::Done => f.write_str("done"),
            MenuButton::AdminReply(id) => write!(f, "{ADMIN_REPLY_PREFIX}{id}"),
            MenuButton::UserReply => f.write_str("user_reply"),
        }
    }
}
