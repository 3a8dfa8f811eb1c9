// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::Serialize;
use serde_json::Value;

use crate::pattern::SelectPattern;

/// One entry of a [`crate::FlureeDocument`]. The three shapes share no keys, so they are
/// serialized without a tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FlureeQuery {
    Graph(GraphQuery),
    Block(BlockQuery),
    History(HistoryQuery),
}

/// Query against a collection (or a single subject when `from` is a subject id or ident).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQuery {
    pub select: SelectPattern,
    pub from: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<Value>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<Value>,
}

impl GraphQuery {
    pub fn new(select: SelectPattern, from: Value) -> Self {
        Self {
            select,
            from,
            block: None,
            where_clause: None,
            limit: None,
            offset: None,
        }
    }
}

/// Query for the contents of a single block (`[from]`) or a block range (`[from, to]`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockQuery {
    pub block: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryQuery {
    pub history: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<Value>,
    #[serde(rename = "show-auth", skip_serializing_if = "Option::is_none")]
    pub show_auth: Option<Value>,
    #[serde(rename = "pretty-print", skip_serializing_if = "Option::is_none")]
    pub pretty_print: Option<Value>,
}

impl HistoryQuery {
    pub fn new(history: Value) -> Self {
        Self {
            history,
            block: None,
            show_auth: None,
            pretty_print: None,
        }
    }
}
