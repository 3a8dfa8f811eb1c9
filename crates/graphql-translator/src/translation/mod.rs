// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Translate a parsed GraphQL document into a FlureeQL document.
//!
//! The walk is a single recursive descent over the executable document: the document
//! translator picks the operation, the operation translator routes each top-level field to one
//! of the query shapes (graph, block or history), and the selection set translator turns nested
//! fields into a select pattern.
pub mod document_translator;
pub mod query_shape;
pub mod translation_error;

mod arguments_translator;
mod operation_translator;
mod selection_set_translator;
mod variables;

pub use arguments_translator::Arguments;
