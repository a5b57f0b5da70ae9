use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmbeddingError>;

#[derive(Error, Debug)]
pub enum EmbeddingError {
    #[error("Embedding request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed embedding response: {0}")]
    MalformedResponse(String),

    #[error("Embedding count mismatch: sent {sent} lines, received {received} vectors")]
    CountMismatch { sent: usize, received: usize },

    #[error("Empty input: at least one line is required")]
    EmptyInput,
}
