use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("source text is empty")]
    EmptyInput,

    #[error("provider rejected the credential")]
    Unauthorized,

    #[error("provider is rate limiting requests")]
    RateLimited,

    #[error("provider unreachable: {0}")]
    Unreachable(String),

    #[error("provider returned status {status}")]
    Upstream { status: u16 },

    #[error("malformed provider response: {reason}")]
    MalformedResponse { reason: String, raw: String },

    #[error("client config error: {0}")]
    Config(String),
}
