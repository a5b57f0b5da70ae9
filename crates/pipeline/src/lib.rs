//! # Retrieval Pipeline
//!
//! Semantic retrieval end to end: free-form text in, documents ranked by
//! similarity distance out.
//!
//! ```text
//! text ──> EmbeddingProvider ──> Vec<f32> ──> encode ──> EncodedVector
//!                                                            │
//!                       ResultSet <── SearchExecutor <───────┘
//! ```
//!
//! Both collaborators are injected: the embedding provider through the
//! [`EmbeddingProvider`](retrieval_embeddings::EmbeddingProvider) trait and
//! the index through the executor's backend seam, so the whole pipeline runs
//! against fakes in tests and against HTTP + the index protocol in
//! production.
//!
//! ## Example
//!
//! ```no_run
//! use retrieval_embeddings::HttpEmbeddingClient;
//! use retrieval_index::{QueryDescriptor, RedisIndexBackend, SearchExecutor};
//! use retrieval_pipeline::RetrievalPipeline;
//! use std::sync::Arc;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let provider = HttpEmbeddingClient::new(
//!     "https://api.example.com/v1/embeddings",
//!     reqwest::Client::new(),
//! );
//! let backend = RedisIndexBackend::connect("redis://127.0.0.1:6379").await?;
//!
//! let descriptor = QueryDescriptor::builder()
//!     .k(5)
//!     .vector_field("vector")
//!     .param_name("query_vector")
//!     .score_alias("vector_score")
//!     .return_field("vector_score")
//!     .return_field("text")
//!     .build()?;
//!
//! let pipeline = RetrievalPipeline::new(
//!     Arc::new(provider),
//!     SearchExecutor::new(Arc::new(backend)),
//! );
//!
//! let results = pipeline
//!     .retrieve("gas field revenue", "idx:books", &descriptor)
//!     .await?;
//! for doc in &results {
//!     println!("{} {:.4} {:?}", doc.id, doc.score, doc.field("text"));
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod pipeline;

pub use error::{PipelineError, Result, Stage};
pub use pipeline::RetrievalPipeline;

// Re-export the building blocks so hosts only need this crate.
pub use retrieval_embeddings::{EmbeddingError, EmbeddingProvider, HttpEmbeddingClient};
pub use retrieval_index::{
    Document, IndexError, QueryDescriptor, RedisIndexBackend, ResultSet, SearchExecutor,
};
