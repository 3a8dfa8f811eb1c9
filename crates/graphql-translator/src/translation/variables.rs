// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_parser::{Positioned, types::VariableDefinition};
use flureeql_model::variable_reference;
use indexmap::IndexMap;
use serde_json::Value;

/// Placeholders for the declared variables: `$name` becomes `"?name": null`, whether or not the
/// operation ever references it. Values are bound by whoever executes the FlureeQL query.
pub(super) fn variable_placeholders(
    variable_definitions: &[Positioned<VariableDefinition>],
) -> IndexMap<String, Value> {
    variable_definitions
        .iter()
        .map(|definition| {
            (
                variable_reference(definition.node.name.node.as_str()),
                Value::Null,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translation::test_support::operation;

    #[test]
    fn declared_variables_in_order() {
        let operation = operation(
            "query ($limit: Int!, $offset: Int = 10, $unused: String) { chat(limit: $limit) }",
        );
        let placeholders = variable_placeholders(&operation.node.variable_definitions);

        assert_eq!(
            placeholders.keys().collect::<Vec<_>>(),
            vec!["?limit", "?offset", "?unused"]
        );
        assert!(placeholders.values().all(Value::is_null));
    }

    #[test]
    fn no_declarations() {
        let operation = operation("{ chat }");

        assert!(variable_placeholders(&operation.node.variable_definitions).is_empty());
    }
}
