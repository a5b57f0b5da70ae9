use crate::encode::EncodedVector;
use crate::error::{IndexError, Result};
use crate::query::QueryDescriptor;
use crate::types::{Document, ResultSet};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// One raw result entry as reported by the index, before interpretation:
/// the entry id plus its returned field/value pairs in reply order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHit {
    pub id: String,
    pub fields: Vec<(String, String)>,
}

/// Transport seam to the vector index. The production implementation speaks
/// the index's wire protocol; tests substitute a fake returning canned hits.
///
/// Implementations submit the descriptor's expression with the vector bytes
/// bound to its parameter name and return the hits in the index's reported
/// order, without reordering or filtering.
#[async_trait]
pub trait IndexBackend: Send + Sync {
    async fn knn_search(
        &self,
        index: &str,
        descriptor: &QueryDescriptor,
        vector: &EncodedVector,
    ) -> Result<Vec<RawHit>>;
}

/// Executes a bound KNN query against a named index and interprets the raw
/// reply into an ordered [`ResultSet`].
#[derive(Clone)]
pub struct SearchExecutor {
    backend: Arc<dyn IndexBackend>,
}

impl SearchExecutor {
    pub fn new(backend: Arc<dyn IndexBackend>) -> Self {
        Self { backend }
    }

    /// Binds `vector` to the descriptor's parameter, runs the query, and
    /// maps each raw hit into a [`Document`].
    ///
    /// The score is read from the descriptor's score alias; the remaining
    /// fields are restricted to the descriptor's return list. Ascending
    /// score order is asserted, not restored: an out-of-order reply is an
    /// index-level anomaly and surfaces as
    /// [`IndexError::UnorderedResponse`].
    pub async fn search(
        &self,
        index: &str,
        descriptor: &QueryDescriptor,
        vector: &EncodedVector,
    ) -> Result<ResultSet> {
        log::debug!(
            "KNN search: index='{}', expression='{}', blob={} bytes",
            index,
            descriptor.expression(),
            vector.len()
        );

        let hits = self.backend.knn_search(index, descriptor, vector).await?;

        let mut documents = Vec::with_capacity(hits.len());
        let mut previous: Option<f32> = None;
        for hit in hits {
            let document = interpret_hit(hit, descriptor)?;
            if let Some(previous) = previous {
                if document.score < previous {
                    return Err(IndexError::UnorderedResponse {
                        previous,
                        current: document.score,
                    });
                }
            }
            previous = Some(document.score);
            documents.push(document);
        }

        log::debug!("KNN search returned {} documents", documents.len());
        Ok(ResultSet::new(documents))
    }
}

fn interpret_hit(hit: RawHit, descriptor: &QueryDescriptor) -> Result<Document> {
    let mut score: Option<f32> = None;
    let mut fields: HashMap<String, String> = HashMap::new();

    for (name, value) in hit.fields {
        if name == descriptor.score_alias() {
            let parsed = value.parse::<f32>().map_err(|_| {
                IndexError::MalformedResponse(format!(
                    "entry '{}' has non-numeric score '{}' under '{}'",
                    hit.id,
                    value,
                    descriptor.score_alias()
                ))
            })?;
            score = Some(parsed);
        } else if descriptor.return_fields().iter().any(|f| f == &name) {
            fields.insert(name, value);
        }
    }

    let score = score.ok_or_else(|| {
        IndexError::MalformedResponse(format!(
            "entry '{}' is missing the score field '{}'",
            hit.id,
            descriptor.score_alias()
        ))
    })?;

    Ok(Document {
        id: hit.id,
        score,
        fields,
    })
}
