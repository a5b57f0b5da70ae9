use crate::error::{EmbeddingError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A collaborator that turns text lines into embedding vectors.
///
/// Output vector `i` corresponds to input line `i`; implementations must
/// preserve order. The trait exists so the retrieval pipeline can be wired
/// with a fake provider in tests.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, lines: &[String]) -> Result<Vec<Vec<f32>>>;
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingEntry>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingEntry {
    embedding: Vec<f32>,
}

/// Client for an HTTP embedding provider.
///
/// Sends one batched request per `embed` call; does not retry and does not
/// cache. The endpoint and the underlying `reqwest::Client` are injected so
/// connection pooling and timeouts stay under the caller's control.
#[derive(Debug, Clone)]
pub struct HttpEmbeddingClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpEmbeddingClient {
    pub fn new(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmbeddingProvider for HttpEmbeddingClient {
    async fn embed(&self, lines: &[String]) -> Result<Vec<Vec<f32>>> {
        if lines.is_empty() {
            return Err(EmbeddingError::EmptyInput);
        }

        log::debug!(
            "Requesting embeddings for {} lines from {}",
            lines.len(),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&EmbeddingRequest { input: lines })
            .send()
            .await?;

        // The body is consumed on both paths; a non-JSON or wrongly shaped
        // body is a routine upstream failure, reported as data.
        let body = response.text().await?;
        let vectors = parse_embedding_body(&body)?;

        if vectors.len() != lines.len() {
            return Err(EmbeddingError::CountMismatch {
                sent: lines.len(),
                received: vectors.len(),
            });
        }

        log::debug!("Received {} embedding vectors", vectors.len());
        Ok(vectors)
    }
}

/// Parses the provider's response body into one vector per input entry,
/// preserving response order.
fn parse_embedding_body(body: &str) -> Result<Vec<Vec<f32>>> {
    let parsed: EmbeddingResponse = serde_json::from_str(body)
        .map_err(|e| EmbeddingError::MalformedResponse(e.to_string()))?;
    Ok(parsed.data.into_iter().map(|entry| entry.embedding).collect())
}
