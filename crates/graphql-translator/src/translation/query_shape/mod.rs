// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The three kinds of FlureeQL query a top-level field can turn into.

mod block;
mod graph;
mod history;

pub(super) use block::block_query;
pub(super) use graph::graph_query;
pub use history::decode_legacy_subject;
pub(super) use history::history_query;

/// Top-level field requesting a block query.
pub const BLOCK_FIELD: &str = "_block";
/// Top-level field requesting a history query.
pub const HISTORY_FIELD: &str = "_history";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryShape {
    /// Any field that is not reserved names a collection to query.
    Graph,
    Block,
    History,
}

impl QueryShape {
    pub fn of(field_name: &str) -> Self {
        match field_name {
            BLOCK_FIELD => QueryShape::Block,
            HISTORY_FIELD => QueryShape::History,
            _ => QueryShape::Graph,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_names() {
        assert_eq!(QueryShape::of("_block"), QueryShape::Block);
        assert_eq!(QueryShape::of("_history"), QueryShape::History);
        assert_eq!(QueryShape::of("_user"), QueryShape::Graph);
        assert_eq!(QueryShape::of("_blocks"), QueryShape::Graph);
    }
}
