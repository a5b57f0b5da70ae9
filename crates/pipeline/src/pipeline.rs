use crate::error::{PipelineError, Result};
use retrieval_embeddings::EmbeddingProvider;
use retrieval_index::{encode, QueryDescriptor, ResultSet, SearchExecutor};
use std::sync::Arc;

/// End-to-end semantic retrieval: text → embedding → binary vector →
/// bound query → executed search → ranked documents.
///
/// Strictly linear and stateless across calls; safe to share between tasks.
/// Either a complete, correctly ordered [`ResultSet`] comes back, or a typed
/// failure naming the stage — never partial results.
#[derive(Clone)]
pub struct RetrievalPipeline {
    provider: Arc<dyn EmbeddingProvider>,
    executor: SearchExecutor,
}

impl RetrievalPipeline {
    pub fn new(provider: Arc<dyn EmbeddingProvider>, executor: SearchExecutor) -> Self {
        Self { provider, executor }
    }

    /// Retrieves the documents closest to `query` from the named index.
    pub async fn retrieve(
        &self,
        query: &str,
        index: &str,
        descriptor: &QueryDescriptor,
    ) -> Result<ResultSet> {
        log::debug!("Retrieval: index='{}', query='{}'", index, query);

        let lines = [query.to_string()];
        let vectors = self
            .provider
            .embed(&lines)
            .await
            .map_err(PipelineError::Embedding)?;
        let vector = vectors
            .into_iter()
            .next()
            .ok_or(PipelineError::NoEmbedding)?;

        let encoded = encode(&vector).map_err(PipelineError::Encoding)?;

        let results = self
            .executor
            .search(index, descriptor, &encoded)
            .await
            .map_err(PipelineError::Search)?;

        log::info!(
            "Retrieval completed: {} documents from '{}'",
            results.len(),
            index
        );
        Ok(results)
    }
}
