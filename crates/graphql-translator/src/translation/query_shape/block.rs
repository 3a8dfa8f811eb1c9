// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_parser::Pos;
use flureeql_model::BlockQuery;

use crate::translation::{Arguments, translation_error::TranslationError};

/// `_block(from: ..)` selects one block, `_block(from: .., to: ..)` a range. Any subfields are
/// ignored.
pub(in crate::translation) fn block_query(
    arguments: &Arguments,
    pos: Pos,
) -> Result<BlockQuery, TranslationError> {
    match (arguments.supplied("from"), arguments.supplied("to")) {
        (Some(from), Some(to)) => Ok(BlockQuery {
            block: vec![from.clone(), to.clone()],
        }),
        (Some(from), None) => Ok(BlockQuery {
            block: vec![from.clone()],
        }),
        (None, _) => Err(TranslationError::InvalidBlockArguments(pos)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::test_support::field;
    use serde_json::json;

    fn translate(query: &str) -> Result<BlockQuery, TranslationError> {
        let field = field(query);
        block_query(&Arguments::from_field(&field).unwrap(), field.pos)
    }

    #[test]
    fn range() {
        assert_eq!(translate("{ _block(from: 3, to: 5) }").unwrap().block, vec![json!(3), json!(5)]);
    }

    #[test]
    fn single_block() {
        assert_eq!(translate("{ _block(from: 3) }").unwrap().block, vec![json!(3)]);
        assert_eq!(
            translate(r#"{ _block(from: "2018-03-08T09:57:13.861Z", to: null) }"#)
                .unwrap()
                .block,
            vec![json!("2018-03-08T09:57:13.861Z")]
        );
    }

    #[test]
    fn from_is_required() {
        for query in ["{ _block }", "{ _block(to: 5) }", "{ _block(from: null) }"] {
            let error = translate(query).unwrap_err();
            assert_eq!(
                error.to_string(),
                "Block queries must have a 'from' argument and optionally a 'to' argument."
            );
        }
    }
}
