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
    types::{DocumentOperations, ExecutableDocument, OperationDefinition},
};
use flureeql_model::FlureeDocument;
use tracing::instrument;

use crate::config::TranslatorConfig;

use super::{operation_translator::OperationTranslator, translation_error::TranslationError};

/// Translate a parsed GraphQL document.
///
/// Only the first operation of the document is translated; later operations and all fragment
/// definitions are ignored.
#[instrument(name = "translate_document", skip_all)]
pub fn translate_document(
    document: &ExecutableDocument,
    config: &TranslatorConfig,
) -> Result<FlureeDocument, TranslationError> {
    OperationTranslator::new(config).translate(first_operation(document)?)
}

fn first_operation(
    document: &ExecutableDocument,
) -> Result<&Positioned<OperationDefinition>, TranslationError> {
    match &document.operations {
        DocumentOperations::Single(operation) => Ok(operation),
        // async-graphql groups named operations by name, losing their order, so recover the
        // first one from its source position
        DocumentOperations::Multiple(operations) => operations
            .values()
            .min_by_key(|operation| (operation.pos.line, operation.pos.column))
            .ok_or(TranslationError::NoOperationFound),
    }
}
