use std::collections::HashMap;

/// One search hit: an opaque identifier, a similarity distance (lower is
/// closer), and the requested stored fields. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub score: f32,
    pub fields: HashMap<String, String>,
}

impl Document {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Documents ordered ascending by score (closest first). The ordering is an
/// invariant enforced by the executor at construction, not an incidental
/// property of the index reply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    documents: Vec<Document>,
}

impl ResultSet {
    pub(crate) fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    #[must_use]
    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

impl IntoIterator for ResultSet {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}

impl std::ops::Index<usize> for ResultSet {
    type Output = Document;

    fn index(&self, index: usize) -> &Document {
        &self.documents[index]
    }
}
