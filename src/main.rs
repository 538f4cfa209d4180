//! # Support Relay Bot Main Entry Point
//!
//! Initializes logging, loads configuration, starts the health server and
//! runs the Telegram dispatcher in polling or webhook mode.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use teloxide::utils::command::BotCommands;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use support_relay_bot::bot::commands::Command;
use support_relay_bot::bot::handlers::BotHandler;
use support_relay_bot::bot::state::ConversationState;
use support_relay_bot::config::{Config, UpdateMode};
use support_relay_bot::services::health::HealthService;
use support_relay_bot::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "support_relay_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Support Relay Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Operator chat: {}, Mode: {}, HTTP Port: {}",
        config.operator_chat_id,
        config.update_mode.name(),
        config.http_port
    );

    let bot = Bot::new(&config.telegram_bot_token);
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        tracing::warn!("Failed to register bot commands: {}", e);
    }
    let handler = BotHandler::new(config.relay_settings());

    let health_service = HealthService::new(config.update_mode.name());
    let ready = health_service.readiness_flag();
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .with_context(|| format!("Failed to bind to port {}", config.http_port))?;
    info!("Health check server starting on port {}", config.http_port);

    let webhook = match (&config.update_mode, config.webhook_url()) {
        (UpdateMode::Webhook { port, .. }, Some(url)) => {
            let address = SocketAddr::from(([0, 0, 0, 0], *port));
            let url = url::Url::parse(&url).context("Invalid WEBHOOK_HOST")?;
            let options = webhooks::Options::new(address, url);
            let update_listener = webhooks::axum(bot.clone(), options)
                .await
                .context("Failed to set up webhook")?;
            log_system_event("Webhook registered", Some(&format!("listening on {address}")));
            Some(update_listener)
        }
        _ => None,
    };

    let bot_task = tokio::spawn(async move {
        let storage = InMemStorage::<ConversationState>::new();
        let mut dispatcher = Dispatcher::builder(bot, handler.schema())
            .dependencies(dptree::deps![storage])
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build();

        ready.store(true, Ordering::SeqCst);
        match webhook {
            Some(update_listener) => {
                log_system_event("Dispatcher started", Some("webhook"));
                dispatcher
                    .dispatch_with_listener(
                        update_listener,
                        LoggingErrorHandler::with_custom_text("An error from the update listener"),
                    )
                    .await;
            }
            None => {
                log_system_event("Dispatcher started", Some("polling"));
                dispatcher.dispatch().await;
            }
        }
        ready.store(false, Ordering::SeqCst);
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    info!("Application stopped");
    Ok(())
}
