use crate::AiRequestKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Network failure, non-OK status (auth, rate limit), or a response the
    /// provider adapter could not parse.
    #[error("Provider call failed for {operation}")]
    ProviderCallFailed {
        operation: AiRequestKind,
        #[source]
        source: pulse_sdk::LanguageModelError,
    },
}

impl GatewayError {
    pub fn operation(&self) -> AiRequestKind {
        match self {
            Self::ProviderCallFailed { operation, .. } => *operation,
        }
    }
}
