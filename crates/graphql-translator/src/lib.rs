// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Translate GraphQL queries into FlureeQL.
//!
//! Every top-level field of the query becomes one FlureeQL query:
//!
//! - `_block(from: .., to: ..)` becomes a block query,
//! - `_history(subject: "..")` becomes a history query,
//! - any other field names a collection and becomes a graph query whose `select` mirrors the
//!   field's selection set.
//!
//! Declared variables are not resolved; they are carried as `?name` references and listed under
//! `vars`, to be bound when the FlureeQL query executes.

pub mod config;
pub mod query_cache;
pub mod translation;
pub mod translator;

pub use config::{OptionalArgumentPolicy, TranslatorConfig};
pub use translation::document_translator::translate_document;
pub use translation::query_shape::decode_legacy_subject;
pub use translation::translation_error::TranslationError;
pub use translator::{Translator, parse_query, translate};

pub use flureeql_model as model;
