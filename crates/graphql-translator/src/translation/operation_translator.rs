// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_parser::{
    Positioned,
    types::{Field, OperationDefinition, OperationType},
};
use flureeql_model::{FlureeDocument, FlureeQuery};
use tracing::debug;

use crate::config::TranslatorConfig;

use super::{
    Arguments,
    query_shape::{QueryShape, block_query, graph_query, history_query},
    selection_set_translator::as_field,
    translation_error::TranslationError,
    variables::variable_placeholders,
};

/// Context for translating an operation.
pub(super) struct OperationTranslator<'a> {
    config: &'a TranslatorConfig,
}

impl<'a> OperationTranslator<'a> {
    #[must_use]
    pub fn new(config: &'a TranslatorConfig) -> Self {
        Self { config }
    }

    /// Translate a query operation such as
    /// ```graphql
    ///    query ($from: Int!) {
    ///       allUsers: _user { _id username }
    ///       _block(from: $from)
    ///    }
    /// ```
    ///
    /// Each top-level field becomes one query, stored under its alias (or its name when there
    /// is no alias); a later field with the same output name replaces an earlier one. Declared
    /// variables are attached as `vars`.
    pub(super) fn translate(
        &self,
        operation: &Positioned<OperationDefinition>,
    ) -> Result<FlureeDocument, TranslationError> {
        if operation.node.ty != OperationType::Query {
            return Err(TranslationError::UnsupportedOperation(
                operation.node.ty,
                operation.pos,
            ));
        }

        let mut document = FlureeDocument::new();

        for selection in &operation.node.selection_set.node.items {
            let field = as_field(selection)?;
            let output_name = field
                .node
                .alias
                .as_ref()
                .unwrap_or(&field.node.name)
                .node
                .to_string();

            document.insert(output_name, self.translate_field(field)?);
        }

        document.set_vars(variable_placeholders(&operation.node.variable_definitions));

        Ok(document)
    }

    fn translate_field(&self, field: &Positioned<Field>) -> Result<FlureeQuery, TranslationError> {
        let field_name = field.node.name.node.as_str();
        let arguments = Arguments::from_field(field)?;
        let shape = QueryShape::of(field_name);

        debug!(field_name, ?shape, arguments = arguments.len(), "Translating field");

        Ok(match shape {
            QueryShape::Graph => FlureeQuery::Graph(graph_query(
                field,
                &arguments,
                self.config.optional_arguments,
            )?),
            QueryShape::Block => FlureeQuery::Block(block_query(&arguments, field.pos)?),
            QueryShape::History => {
                FlureeQuery::History(history_query(field_name, &arguments, field.pos)?)
            }
        })
    }
}
