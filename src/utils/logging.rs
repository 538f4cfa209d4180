use tracing::{debug, error, info, warn};

/// Logs a message relayed between two chats
pub fn log_relay(kind: &str, from: i64, to: i64) {
    info!("RELAY: {} from {} to {}", kind, from, to);
}

/// Logs a failed delivery that was replaced by a generic error reply
pub fn log_delivery_error(kind: &str, to: i64, error: &str) {
    error!("DELIVERY_ERROR: {} to {} failed: {}", kind, to, error);
}

/// Logs a best-effort call (delete, callback answer) that failed and was ignored
pub fn log_ignored_failure(operation: &str, chat_id: i64, error: &str) {
    warn!("IGNORED: {} in chat {} failed: {}", operation, chat_id, error);
}

/// Logs a conversation state change
pub fn log_transition(chat_id: i64, from: &str, to: &str) {
    if from != to {
        debug!("STATE: chat {} {} -> {}", chat_id, from, to);
    }
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
