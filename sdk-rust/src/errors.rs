use thiserror::Error;

#[derive(Error, Debug)]
pub enum LanguageModelError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the provider failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returns a non-OK status code
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The response from the provider was unexpected. (e.g. a candidate part
    /// that carries neither text nor a recognizable payload)
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
}

pub type LanguageModelResult<T> = Result<T, LanguageModelError>;
