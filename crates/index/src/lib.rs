//! # Retrieval Index
//!
//! Query construction and execution against an external vector index.
//!
//! ## Architecture
//!
//! ```text
//! Vec<f32>
//!     │
//!     ├──> encode (little-endian f32 blob)
//!     │      └─> EncodedVector
//!     │
//!     ├──> QueryDescriptor (filter + KNN clause, built once, reused)
//!     │      └─> "(*)=>[KNN 5 @vector $query_vector AS vector_score]"
//!     │
//!     └──> SearchExecutor ──> IndexBackend (RedisIndexBackend in production)
//!            └─> ResultSet, ascending by distance
//! ```
//!
//! The executor interprets raw index replies (score extraction, field
//! selection) and asserts the ascending-score ordering the query requested;
//! an out-of-order reply is surfaced as an error rather than repaired.
//!
//! ## Example
//!
//! ```no_run
//! use retrieval_index::{encode, QueryDescriptor, RedisIndexBackend, SearchExecutor};
//! use std::sync::Arc;
//!
//! # async fn run() -> retrieval_index::Result<()> {
//! let descriptor = QueryDescriptor::builder()
//!     .k(5)
//!     .vector_field("vector")
//!     .param_name("query_vector")
//!     .score_alias("vector_score")
//!     .return_field("vector_score")
//!     .return_field("text")
//!     .build()?;
//!
//! let backend = RedisIndexBackend::connect("redis://127.0.0.1:6379").await?;
//! let executor = SearchExecutor::new(Arc::new(backend));
//!
//! let vector = encode(&[0.1, 0.2, 0.3, 0.4])?;
//! let results = executor.search("idx:books", &descriptor, &vector).await?;
//! # Ok(())
//! # }
//! ```

mod encode;
mod error;
mod executor;
mod query;
mod redis_backend;
mod types;

pub use encode::{decode, encode, EncodedVector};
pub use error::{IndexError, Result};
pub use executor::{IndexBackend, RawHit, SearchExecutor};
pub use query::{QueryDescriptor, QueryDescriptorBuilder};
pub use redis_backend::RedisIndexBackend;
pub use types::{Document, ResultSet};
