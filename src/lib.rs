//! # Support Relay Bot
//!
//! A Telegram support bot for a storefront: it shows a static menu of typical
//! situations, forwards customer questions to a single operator and relays
//! replies in both directions.
//!
//! ## Features
//! - Main menu with fixed answers and marketplace links
//! - Questions (text and attachments) forwarded to the operator
//! - One-message reply flows: operator -> customer and customer -> operator
//! - Long polling or webhook delivery
//! - Health endpoints for hosting platforms

/// Bot commands, conversation flows and update handlers
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Error type shared by the conversation flows
pub mod error;
/// Background services like the health server
pub mod services;
/// Logging helpers
pub mod utils;
