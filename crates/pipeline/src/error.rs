use retrieval_embeddings::EmbeddingError;
use retrieval_index::IndexError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

/// The pipeline stage at which a retrieval stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Embedding,
    Encoding,
    Search,
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Embedding stage failed: {0}")]
    Embedding(#[source] EmbeddingError),

    /// The provider answered well-formed but with zero vectors. Distinct
    /// from a malformed response, which surfaces as [`Self::Embedding`].
    #[error("Embedding provider returned no vectors")]
    NoEmbedding,

    #[error("Vector encoding failed: {0}")]
    Encoding(#[source] IndexError),

    #[error("Search stage failed: {0}")]
    Search(#[source] IndexError),
}

impl PipelineError {
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Self::Embedding(_) | Self::NoEmbedding => Stage::Embedding,
            Self::Encoding(_) => Stage::Encoding,
            Self::Search(_) => Stage::Search,
        }
    }
}
