use reqwest::StatusCode;
use thiserror::Error;

/// Errors a single poll iteration can produce.
///
/// None of these are fatal: the poll loop logs the error, reports it to the
/// chat best-effort and retries after the next sleep.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("request to the Practicum API failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Practicum API returned {code}: {body}")]
    Status { code: StatusCode, body: String },

    #[error("malformed API response: {0}")]
    Shape(String),

    #[error("cannot parse homework record: {0}")]
    Parse(String),
}
