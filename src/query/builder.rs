//! The query builder: produces backend parameters for one search request.

use std::cell::OnceCell;

use crate::error::Result;
use crate::query::boost::BoostedField;
use crate::query::{Params, QueryMode};
use crate::schema::TextFieldSource;
use crate::util::escape::escape_query_chars;

/// No-op type restriction used when no types are given: a tautology on the
/// `type` field, since the backend rejects an empty `q`.
const OPEN_TYPES_PHRASE: &str = "type:[* TO *]";

/// Builds the flat parameter set for a single search request.
///
/// A builder is created per request with the set of result types under
/// search, optionally mutated during setup (keywords, explicit field
/// selections), then asked for its parameters. The derived type phrase and
/// query-field list are memoized for the builder's lifetime, so all
/// mutation must happen before the first [`to_params`](Self::to_params)
/// call; construct a fresh builder for the next request instead of reusing
/// one.
pub struct QueryBuilder<'a> {
    /// Type identifiers restricting the result set; empty means open.
    types: Vec<String>,
    schema: &'a dyn TextFieldSource,
    keywords: Option<String>,
    /// Explicit keyword-matching fields; `None` falls back to all text fields.
    fulltext_fields: Option<Vec<BoostedField>>,
    /// Fields for phrase-proximity boosting; never widens field selection.
    phrase_fields: Option<Vec<BoostedField>>,
    types_phrase: OnceCell<String>,
    query_fields: OnceCell<String>,
}

impl std::fmt::Debug for QueryBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("types", &self.types)
            .field("keywords", &self.keywords)
            .field("fulltext_fields", &self.fulltext_fields)
            .field("phrase_fields", &self.phrase_fields)
            .finish_non_exhaustive()
    }
}

impl<'a> QueryBuilder<'a> {
    /// Create a builder over `types`, resolving fields through `schema`.
    ///
    /// An empty type set means no type restriction.
    pub fn new<I, S>(types: I, schema: &'a dyn TextFieldSource) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QueryBuilder {
            types: types.into_iter().map(Into::into).collect(),
            schema,
            keywords: None,
            fulltext_fields: None,
            phrase_fields: None,
            types_phrase: OnceCell::new(),
            query_fields: OnceCell::new(),
        }
    }

    /// Set the free-text keyword phrase.
    ///
    /// The text is passed to the backend verbatim; its own query language
    /// interprets it. An empty string clears the phrase, reverting the
    /// builder to filter-only mode.
    pub fn set_keywords<S: Into<String>>(&mut self, keywords: S) {
        let keywords = keywords.into();
        self.keywords = if keywords.is_empty() {
            None
        } else {
            Some(keywords)
        };
    }

    /// Clear the keyword phrase, reverting to filter-only mode.
    pub fn clear_keywords(&mut self) {
        self.keywords = None;
    }

    /// The output shape this builder will produce.
    pub fn mode(&self) -> QueryMode {
        if self.keywords.is_some() {
            QueryMode::RankedFulltext
        } else {
            QueryMode::FilterOnly
        }
    }

    /// Select `name` for keyword matching, optionally boosted.
    ///
    /// One logical name may resolve to several indexed fields; all of them
    /// are appended in resolution order. Once any field has been selected
    /// explicitly, the default of querying every text field no longer
    /// applies. Unknown names surface the schema's error unchanged.
    pub fn add_fulltext_field(&mut self, name: &str, boost: Option<f32>) -> Result<()> {
        let resolved = self.schema.text_fields(name)?;
        self.fulltext_fields
            .get_or_insert_with(Vec::new)
            .extend(resolved.into_iter().map(|field| BoostedField::new(field, boost)));
        Ok(())
    }

    /// Register `name` for phrase-proximity boosting, optionally boosted.
    pub fn add_phrase_field(&mut self, name: &str, boost: Option<f32>) -> Result<()> {
        let resolved = self.schema.text_fields(name)?;
        self.phrase_fields
            .get_or_insert_with(Vec::new)
            .extend(resolved.into_iter().map(|field| BoostedField::new(field, boost)));
        Ok(())
    }

    /// Produce the backend parameter set.
    ///
    /// With keywords set this is a dismax query: the keywords in `q`, all
    /// stored fields plus the relevance score in `fl`, the type
    /// restriction in `fq`, the boosted query fields in `qf`, and `pf`
    /// only when phrase fields were registered. Without keywords the type
    /// restriction goes directly in `q` and nothing else is set.
    ///
    /// Calling this repeatedly without intervening mutation yields the
    /// same map every time.
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        match &self.keywords {
            Some(keywords) => {
                params.insert("q".to_string(), keywords.clone());
                params.insert("fl".to_string(), "* score".to_string());
                params.insert("fq".to_string(), self.types_phrase().to_string());
                params.insert("qf".to_string(), self.query_fields().to_string());
                params.insert("defType".to_string(), "dismax".to_string());
                if let Some(phrase_fields) = &self.phrase_fields {
                    params.insert("pf".to_string(), join_tokens(phrase_fields));
                }
            }
            None => {
                params.insert("q".to_string(), self.types_phrase().to_string());
            }
        }
        params
    }

    /// Boolean phrase restricting results to the types under query.
    ///
    /// Each identifier goes through query-syntax escaping before being
    /// embedded, so namespaced names like `Blog::Post` stay a single term.
    /// Memoized: the type set is fixed at construction.
    fn types_phrase(&self) -> &str {
        self.types_phrase.get_or_init(|| {
            let escaped: Vec<String> = self
                .types
                .iter()
                .map(|name| escape_query_chars(name))
                .collect();
            match escaped.as_slice() {
                [] => OPEN_TYPES_PHRASE.to_string(),
                [only] => format!("type:{only}"),
                many => format!("type:({})", many.join(" OR ")),
            }
        })
    }

    /// Space-joined boosted tokens for the fields queried by keywords:
    /// the explicit selections when any were made, otherwise every text
    /// field at default weight. Memoized on first use.
    fn query_fields(&self) -> &str {
        self.query_fields.get_or_init(|| match &self.fulltext_fields {
            Some(fields) => join_tokens(fields),
            None => {
                let defaults: Vec<BoostedField> = self
                    .schema
                    .all_text_fields()
                    .into_iter()
                    .map(|field| BoostedField::new(field, None))
                    .collect();
                join_tokens(&defaults)
            }
        })
    }
}

fn join_tokens(fields: &[BoostedField]) -> String {
    fields
        .iter()
        .map(BoostedField::to_token)
        .collect::<Vec<_>>()
        .join(" ")
}
