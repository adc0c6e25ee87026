use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store rejected the credential")]
    Unauthorized,

    #[error("saved item not found: {id}")]
    NotFound { id: String },

    #[error("store unreachable: {0}")]
    TransportFailure(String),

    #[error("saved item {id} still present after delete")]
    DeletionNotConfirmed { id: String },

    #[error("store returned status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("unexpected store response: {0}")]
    UnexpectedResponse(String),

    #[error("content is {chars} characters, over the {max} limit")]
    ContentTooLong { chars: usize, max: usize },

    #[error("content is empty")]
    EmptyContent,

    #[error("store config error: {0}")]
    Config(String),
}
