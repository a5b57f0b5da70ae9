use crate::error::{IndexError, Result};

/// Immutable description of how to search: a scalar pre-filter combined with
/// a KNN vector clause, score exposure, sort order, and returned fields.
///
/// The vector itself is referenced through `param_name` rather than embedded
/// literally, so one descriptor is built once per search shape and reused
/// across many bound vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    k: usize,
    vector_field: String,
    param_name: String,
    filter: String,
    score_alias: String,
    sort_by: String,
    return_fields: Vec<String>,
    dialect: u32,
}

impl QueryDescriptor {
    #[must_use]
    pub fn builder() -> QueryDescriptorBuilder {
        QueryDescriptorBuilder::default()
    }

    /// Renders the hybrid filter+KNN query expression, e.g.
    /// `(*)=>[KNN 5 @vector $query_vector AS vector_score]`.
    #[must_use]
    pub fn expression(&self) -> String {
        format!(
            "({})=>[KNN {} @{} ${} AS {}]",
            self.filter, self.k, self.vector_field, self.param_name, self.score_alias
        )
    }

    #[must_use]
    pub fn k(&self) -> usize {
        self.k
    }

    #[must_use]
    pub fn vector_field(&self) -> &str {
        &self.vector_field
    }

    #[must_use]
    pub fn param_name(&self) -> &str {
        &self.param_name
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    #[must_use]
    pub fn score_alias(&self) -> &str {
        &self.score_alias
    }

    #[must_use]
    pub fn sort_by(&self) -> &str {
        &self.sort_by
    }

    #[must_use]
    pub fn return_fields(&self) -> &[String] {
        &self.return_fields
    }

    #[must_use]
    pub fn dialect(&self) -> u32 {
        self.dialect
    }
}

/// Builder for [`QueryDescriptor`]. Validation happens in [`build`]
/// (`QueryDescriptorBuilder::build`) so a bad configuration fails at
/// construction time, not at execution time.
#[derive(Debug, Clone, Default)]
pub struct QueryDescriptorBuilder {
    k: Option<usize>,
    vector_field: Option<String>,
    param_name: Option<String>,
    filter: Option<String>,
    score_alias: Option<String>,
    sort_by: Option<String>,
    return_fields: Vec<String>,
    dialect: Option<u32>,
}

impl QueryDescriptorBuilder {
    #[must_use]
    pub fn k(mut self, k: usize) -> Self {
        self.k = Some(k);
        self
    }

    #[must_use]
    pub fn vector_field(mut self, name: impl Into<String>) -> Self {
        self.vector_field = Some(name.into());
        self
    }

    #[must_use]
    pub fn param_name(mut self, name: impl Into<String>) -> Self {
        self.param_name = Some(name.into());
        self
    }

    /// Scalar/boolean pre-filter expression. Defaults to `*` (match all).
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn score_alias(mut self, alias: impl Into<String>) -> Self {
        self.score_alias = Some(alias.into());
        self
    }

    /// Sort key. Defaults to the score alias.
    #[must_use]
    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }

    #[must_use]
    pub fn return_field(mut self, field: impl Into<String>) -> Self {
        self.return_fields.push(field.into());
        self
    }

    #[must_use]
    pub fn return_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.return_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Query-language dialect version. Defaults to 2, the first dialect with
    /// parameterized vector clauses.
    #[must_use]
    pub fn dialect(mut self, dialect: u32) -> Self {
        self.dialect = Some(dialect);
        self
    }

    pub fn build(self) -> Result<QueryDescriptor> {
        let k = self.k.unwrap_or(0);
        if k < 1 {
            return Err(IndexError::InvalidQuery(format!(
                "k must be a positive integer, got {k}"
            )));
        }

        let vector_field = require_identifier("vector_field", self.vector_field)?;
        let param_name = require_identifier("param_name", self.param_name)?;
        let score_alias = require_identifier("score_alias", self.score_alias)?;
        let sort_by = match self.sort_by {
            Some(field) => require_identifier("sort_by", Some(field))?,
            None => score_alias.clone(),
        };

        Ok(QueryDescriptor {
            k,
            vector_field,
            param_name,
            filter: self.filter.unwrap_or_else(|| "*".to_string()),
            score_alias,
            sort_by,
            return_fields: self.return_fields,
            dialect: self.dialect.unwrap_or(2),
        })
    }
}

fn require_identifier(what: &str, value: Option<String>) -> Result<String> {
    let value = value.unwrap_or_default();
    if value.is_empty() {
        return Err(IndexError::InvalidQuery(format!("{what} must not be empty")));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(IndexError::InvalidQuery(format!(
            "{what} '{value}' is not a valid identifier"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base_builder() -> QueryDescriptorBuilder {
        QueryDescriptor::builder()
            .k(5)
            .vector_field("vector")
            .param_name("query_vector")
            .score_alias("vector_score")
    }

    #[test]
    fn renders_match_all_expression() {
        let descriptor = base_builder().build().unwrap();
        assert_eq!(
            descriptor.expression(),
            "(*)=>[KNN 5 @vector $query_vector AS vector_score]"
        );
    }

    #[test]
    fn renders_custom_filter() {
        let descriptor = base_builder().filter("@year:[2020 2024]").build().unwrap();
        assert_eq!(
            descriptor.expression(),
            "(@year:[2020 2024])=>[KNN 5 @vector $query_vector AS vector_score]"
        );
    }

    #[test]
    fn defaults_sort_by_to_score_alias_and_dialect_to_2() {
        let descriptor = base_builder().build().unwrap();
        assert_eq!(descriptor.sort_by(), "vector_score");
        assert_eq!(descriptor.dialect(), 2);
        assert_eq!(descriptor.filter(), "*");
    }

    #[test]
    fn collects_return_fields_in_order() {
        let descriptor = base_builder()
            .return_field("vector_score")
            .return_field("text")
            .build()
            .unwrap();
        assert_eq!(descriptor.return_fields(), ["vector_score", "text"]);
    }

    #[test]
    fn rejects_zero_k() {
        let err = base_builder().k(0).build().unwrap_err();
        assert!(matches!(err, IndexError::InvalidQuery(_)));
    }

    #[test]
    fn rejects_missing_vector_field() {
        let err = QueryDescriptor::builder()
            .k(5)
            .param_name("query_vector")
            .score_alias("vector_score")
            .build()
            .unwrap_err();
        assert!(matches!(err, IndexError::InvalidQuery(_)));
    }

    #[test]
    fn rejects_empty_param_name() {
        let err = base_builder().param_name("").build().unwrap_err();
        assert!(matches!(err, IndexError::InvalidQuery(_)));
    }

    #[test]
    fn rejects_non_identifier_score_alias() {
        let err = base_builder().score_alias("vector score").build().unwrap_err();
        assert!(matches!(err, IndexError::InvalidQuery(_)));
    }

    #[test]
    fn descriptor_is_reusable_and_comparable() {
        let a = base_builder().build().unwrap();
        let b = a.clone();
        assert_eq!(a, b);
    }
}
