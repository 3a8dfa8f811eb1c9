// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_parser::{Positioned, types::Field};
use flureeql_model::GraphQuery;
use serde_json::Value;

use crate::config::OptionalArgumentPolicy;
use crate::translation::{
    Arguments, selection_set_translator::select_pattern, translation_error::TranslationError,
};

/// Query the collection named by the field.
///
/// `from` is the collection unless narrowed to a single subject: `_id` replaces it, and `ident`
/// replaces that in turn, so `ident` wins when both are given.
pub(in crate::translation) fn graph_query(
    field: &Positioned<Field>,
    arguments: &Arguments,
    policy: OptionalArgumentPolicy,
) -> Result<GraphQuery, TranslationError> {
    let select = select_pattern(&field.node.selection_set)?;

    let mut from = Value::String(field.node.name.node.to_string());
    if let Some(id) = arguments.supplied("_id") {
        from = id.clone();
    }
    if let Some(ident) = arguments.supplied("ident") {
        from = ident.clone();
    }

    let optional = |name| arguments.included(name, policy).cloned();

    Ok(GraphQuery {
        select,
        from,
        block: optional("block"),
        where_clause: optional("where"),
        limit: optional("limit"),
        offset: optional("offset"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::test_support::field;
    use serde_json::json;

    fn translate(query: &str, policy: OptionalArgumentPolicy) -> Value {
        let field = field(query);
        let arguments = Arguments::from_field(&field).unwrap();
        serde_json::to_value(graph_query(&field, &arguments, policy).unwrap()).unwrap()
    }

    #[test]
    fn collection_is_the_default_source() {
        assert_eq!(
            translate("{ _user { _id username } }", OptionalArgumentPolicy::Truthy),
            json!({ "select": ["_id", "username"], "from": "_user" })
        );
    }

    #[test]
    fn ident_overrides_id() {
        assert_eq!(
            translate(
                r#"{ _user(_id: 12345, ident: "[\"_user/username\", \"jdoe\"]") { username } }"#,
                OptionalArgumentPolicy::Truthy
            ),
            json!({ "select": ["username"], "from": r#"["_user/username", "jdoe"]"# })
        );
        assert_eq!(
            translate("{ _user(_id: 12345, ident: null) }", OptionalArgumentPolicy::Truthy),
            json!({ "select": ["*"], "from": 12345 })
        );
    }

    #[test]
    fn optional_keys_follow_the_policy() {
        let query = r#"{ chat(block: 0, where: "chat/instant > 0", limit: 0, offset: 5) { _id } }"#;

        assert_eq!(
            translate(query, OptionalArgumentPolicy::Truthy),
            json!({
                "select": ["_id"],
                "from": "chat",
                "where": "chat/instant > 0",
                "offset": 5
            })
        );
        assert_eq!(
            translate(query, OptionalArgumentPolicy::Present),
            json!({
                "select": ["_id"],
                "from": "chat",
                "block": 0,
                "where": "chat/instant > 0",
                "limit": 0,
                "offset": 5
            })
        );
    }

    #[test]
    fn unknown_arguments_are_ignored() {
        assert_eq!(
            translate(r#"{ chat(orderBy: "instant") }"#, OptionalArgumentPolicy::Truthy),
            json!({ "select": ["*"], "from": "chat" })
        );
    }
}
