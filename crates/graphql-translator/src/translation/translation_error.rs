// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_parser::{Pos, types::OperationType};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("{0}")]
    QueryParsingFailed(String, Pos, Option<Pos>),

    #[error("No operation found")]
    NoOperationFound,

    #[error("Only query operations are supported, found '{0}'")]
    UnsupportedOperation(OperationType, Pos),

    #[error("Fragments are not supported")]
    FragmentsNotSupported(Pos),

    #[error("Argument '{argument}' uses an unsupported value kind '{kind}'")]
    UnsupportedValueKind {
        kind: &'static str,
        argument: String,
        pos: Pos,
    },

    #[error("Block queries must have a 'from' argument and optionally a 'to' argument.")]
    InvalidBlockArguments(Pos),

    #[error("History query must always have a subject key.")]
    MissingHistorySubject(Pos),

    #[error("History query subject must always be a JSON string.")]
    NonStringHistorySubject(Pos),

    #[error("History query subject '{subject}' is not valid JSON: {source}")]
    MalformedHistorySubject {
        subject: String,
        #[source]
        source: serde_json::Error,
    },
}

impl TranslationError {
    pub fn position(&self) -> Option<Pos> {
        match self {
            TranslationError::QueryParsingFailed(_, pos, _) => Some(*pos),
            TranslationError::UnsupportedOperation(_, pos) => Some(*pos),
            TranslationError::FragmentsNotSupported(pos) => Some(*pos),
            TranslationError::UnsupportedValueKind { pos, .. } => Some(*pos),
            TranslationError::InvalidBlockArguments(pos) => Some(*pos),
            TranslationError::MissingHistorySubject(pos) => Some(*pos),
            TranslationError::NonStringHistorySubject(pos) => Some(*pos),
            TranslationError::NoOperationFound => None,
            TranslationError::MalformedHistorySubject { .. } => None,
        }
    }
}
