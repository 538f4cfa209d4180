use teloxide::RequestError;
use thiserror::Error;

/// Errors raised while talking to Telegram on behalf of a conversation.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("telegram request failed: {0}")]
    Request(#[from] RequestError),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

pub type RelayResult<T> = Result<T, RelayError>;
