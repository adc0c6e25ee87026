use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    #[error("source text is empty")]
    EmptySource,

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
