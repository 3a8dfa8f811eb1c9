// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_parser::{Pos, types::ExecutableDocument};
use flureeql_env::{EnvError, Environment};
use flureeql_model::FlureeDocument;
use tracing::{error, instrument, trace};

use crate::{
    config::TranslatorConfig,
    query_cache::{QueryCache, normalize_query},
    translation::{document_translator::translate_document, translation_error::TranslationError},
};

/// Translates GraphQL query text, remembering earlier translations when caching is enabled.
///
/// The cache never evicts: every distinct query that translates successfully stays until
/// [`Translator::clear_cache`] is called or the translator is dropped. Hosts that see unbounded
/// query variety should disable caching or clear it periodically.
///
/// ```ignore
/// let translator = Translator::new(TranslatorConfig::default());
/// let document = translator.translate("{ _block(from: 3, to: 5) }")?;
/// assert_eq!(document.to_json()?, json!({ "_block": { "block": [3, 5] } }));
/// ```
#[derive(Debug)]
pub struct Translator {
    config: TranslatorConfig,
    cache: Option<QueryCache>,
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        let cache = config.cache_queries.then(QueryCache::new);
        Self { config, cache }
    }

    pub fn from_env(env: &dyn Environment) -> Result<Self, EnvError> {
        TranslatorConfig::from_env(env).map(Self::new)
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    #[instrument(name = "Translator::translate", skip_all)]
    pub fn translate(&self, query: &str) -> Result<FlureeDocument, TranslationError> {
        let Some(cache) = &self.cache else {
            return self.translate_uncached(query);
        };

        let key = normalize_query(query);
        if let Some(document) = cache.get(&key) {
            trace!("Query cache hit");
            return Ok(document);
        }
        trace!("Query cache miss");

        let document = self.translate_uncached(query)?;
        cache.insert(key, document.clone());
        Ok(document)
    }

    /// Number of cached translations (zero when caching is disabled).
    pub fn cached(&self) -> usize {
        self.cache.as_ref().map_or(0, QueryCache::len)
    }

    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }

    fn translate_uncached(&self, query: &str) -> Result<FlureeDocument, TranslationError> {
        translate_document(&parse_query(query)?, &self.config)
    }
}

/// Parse and translate `query` with the default configuration, without caching.
pub fn translate(query: &str) -> Result<FlureeDocument, TranslationError> {
    translate_document(&parse_query(query)?, &TranslatorConfig::default())
}

#[instrument(name = "translator::parse_query", skip_all)]
pub fn parse_query(query: &str) -> Result<ExecutableDocument, TranslationError> {
    async_graphql_parser::parse_query(query).map_err(|error| {
        error!(%error, "Failed to parse query");
        let (message, pos1, pos2) = match error {
            async_graphql_parser::Error::Syntax {
                message,
                start,
                end,
            } => (format!("Syntax error: {message}"), start, end),
            async_graphql_parser::Error::MultipleRoots { root, schema, pos } => {
                (format!("Multiple roots of {root} type"), schema, Some(pos))
            }
            async_graphql_parser::Error::MissingQueryRoot { pos } => {
                ("Missing query root".to_string(), pos, None)
            }
            async_graphql_parser::Error::MultipleOperations {
                anonymous,
                operation,
            } => (
                "Multiple operations".to_string(),
                anonymous,
                Some(operation),
            ),
            async_graphql_parser::Error::OperationDuplicated {
                operation,
                first,
                second,
            } => (
                format!("Operation {operation} duplicated"),
                first,
                Some(second),
            ),
            async_graphql_parser::Error::FragmentDuplicated {
                fragment,
                first,
                second,
            } => (
                format!("Fragment {fragment} duplicated"),
                first,
                Some(second),
            ),
            async_graphql_parser::Error::MissingOperation => {
                ("Missing operation".to_string(), Pos::default(), None)
            }
            _ => ("Unknown error".to_string(), Pos::default(), None),
        };

        TranslationError::QueryParsingFailed(message, pos1, pos2)
    })
}
