// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The FlureeQL side of the translation: a document of named queries, each one a graph, block
//! or history query. Serializing a [`FlureeDocument`] produces the JSON body expected by a
//! FlureeQL query endpoint.

pub mod document;
pub mod pattern;
pub mod query;

pub use document::FlureeDocument;
pub use pattern::{PatternEntry, SelectPattern};
pub use query::{BlockQuery, FlureeQuery, GraphQuery, HistoryQuery};

/// Prefix marking a value as a variable bound at execution time (`$user` becomes `?user`).
pub const VARIABLE_SIGIL: char = '?';

/// Render a variable name the way FlureeQL expects to see it referenced.
pub fn variable_reference(name: &str) -> String {
    format!("{VARIABLE_SIGIL}{name}")
}
