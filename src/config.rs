use anyhow::{anyhow, Result};
use std::env;
use teloxide::types::ChatId;

use crate::bot::flow::RelaySettings;

/// How the bot receives updates from Telegram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateMode {
    /// Long polling, used when no webhook host is configured.
    Polling,
    /// Webhook served on `0.0.0.0:<port>` and registered at `<host>/<token>`.
    Webhook { host: String, port: u16 },
}

impl UpdateMode {
    pub fn name(&self) -> &'static str {
        match self {
            UpdateMode::Polling => "polling",
            UpdateMode::Webhook { .. } => "webhook",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub operator_chat_id: i64,
    pub update_mode: UpdateMode,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("BOT_TOKEN")
            .or_else(|_| env::var("TELEGRAM_BOT_TOKEN"))
            .map_err(|_| anyhow!("BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("BOT_TOKEN must be set"));
        }

        let operator_str = env::var("OPERATOR_CHAT_ID")
            .map_err(|_| anyhow!("OPERATOR_CHAT_ID must be set"))?;
        let operator_chat_id = operator_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid OPERATOR_CHAT_ID"))?;

        let webhook_host = env::var("WEBHOOK_HOST").unwrap_or_default();
        let update_mode = if webhook_host.trim().is_empty() {
            UpdateMode::Polling
        } else {
            let port_str = env::var("PORT").unwrap_or_else(|_| "10000".to_string());
            let port = port_str
                .trim()
                .parse()
                .map_err(|_| anyhow!("Invalid PORT"))?;
            UpdateMode::Webhook {
                host: webhook_host.trim().trim_end_matches('/').to_string(),
                port,
            }
        };

        let port_str = env::var("HTTP_PORT").unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            telegram_bot_token: token,
            operator_chat_id,
            update_mode,
            http_port,
        })
    }

    /// Public URL Telegram should deliver updates to, in webhook mode.
    pub fn webhook_url(&self) -> Option<String> {
        match &self.update_mode {
            UpdateMode::Webhook { host, .. } => {
                Some(format!("{}/{}", host, self.telegram_bot_token))
            }
            UpdateMode::Polling => None,
        }
    }

    pub fn relay_settings(&self) -> RelaySettings {
        RelaySettings {
            operator_chat_id: ChatId(self.operator_chat_id),
        }
    }
}
