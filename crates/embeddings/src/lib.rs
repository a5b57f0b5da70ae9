//! # Retrieval Embeddings
//!
//! Client for a remote embedding provider: text lines in, one embedding
//! vector per line out, order preserved.
//!
//! The provider is consumed through a narrow contract: a single batched
//! HTTP request carrying `{"input": [..lines..]}`, answered with
//! `{"data": [{"embedding": [..floats..]}, ..]}`. Anything else the provider
//! sends back is a routine, representable failure
//! ([`EmbeddingError::MalformedResponse`]), not a panic.
//!
//! ## Example
//!
//! ```no_run
//! use retrieval_embeddings::{EmbeddingProvider, HttpEmbeddingClient};
//!
//! # async fn run() -> retrieval_embeddings::Result<()> {
//! let client = HttpEmbeddingClient::new(
//!     "https://api.example.com/v1/embeddings",
//!     reqwest::Client::new(),
//! );
//! let vectors = client.embed(&["gas field revenue".to_string()]).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::{EmbeddingProvider, HttpEmbeddingClient};
pub use error::{EmbeddingError, Result};
