use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Cannot encode an empty vector")]
    EmptyVector,

    #[error("Vector element {index} is not finite: {value}")]
    NonFiniteElement { index: usize, value: f32 },

    #[error("Invalid query configuration: {0}")]
    InvalidQuery(String),

    #[error("Index '{index}' does not exist")]
    IndexNotFound { index: String },

    #[error("Query vector dimension rejected by the index: {0}")]
    DimensionMismatch(String),

    #[error("Malformed index response: {0}")]
    MalformedResponse(String),

    #[error("Index returned unordered results: score {current} follows {previous}")]
    UnorderedResponse { previous: f32, current: f32 },

    #[error("Index backend error: {0}")]
    Backend(String),
}
