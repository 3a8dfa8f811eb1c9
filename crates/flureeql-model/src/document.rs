// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use indexmap::IndexMap;
use serde::{Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;

use crate::query::FlureeQuery;

/// Key under which the declared variables are attached.
pub const VARS_KEY: &str = "vars";

/// A translated GraphQL document: one query per top-level selection, keyed by its alias (or
/// field name), plus the placeholder map of declared variables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlureeDocument {
    queries: IndexMap<String, FlureeQuery>,
    vars: Option<IndexMap<String, Value>>,
}

impl FlureeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query under `alias`. A later query with the same alias replaces the earlier one
    /// (keeping its original position).
    pub fn insert(&mut self, alias: impl Into<String>, query: FlureeQuery) {
        self.queries.insert(alias.into(), query);
    }

    /// Attach the variable placeholders (`"?name" -> null`). An empty map clears them, so that
    /// documents without variables never carry a `vars` key.
    pub fn set_vars(&mut self, vars: IndexMap<String, Value>) {
        self.vars = if vars.is_empty() { None } else { Some(vars) };
    }

    pub fn get(&self, alias: &str) -> Option<&FlureeQuery> {
        self.queries.get(alias)
    }

    pub fn queries(&self) -> impl Iterator<Item = (&str, &FlureeQuery)> {
        self.queries.iter().map(|(alias, query)| (alias.as_str(), query))
    }

    pub fn vars(&self) -> Option<&IndexMap<String, Value>> {
        self.vars.as_ref()
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl Serialize for FlureeDocument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // `vars` is attached last and overwrites a query aliased `vars`
        let shadowed = |alias: &str| self.vars.is_some() && alias == VARS_KEY;
        let len = self.queries.keys().filter(|alias| !shadowed(alias.as_str())).count()
            + usize::from(self.vars.is_some());

        let mut map = serializer.serialize_map(Some(len))?;
        for (alias, query) in &self.queries {
            if !shadowed(alias.as_str()) {
                map.serialize_entry(alias, query)?;
            }
        }
        if let Some(vars) = &self.vars {
            map.serialize_entry(VARS_KEY, vars)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlockQuery, GraphQuery, SelectPattern};
    use serde_json::json;

    fn block(values: &[i64]) -> FlureeQuery {
        FlureeQuery::Block(BlockQuery {
            block: values.iter().map(|v| json!(v)).collect(),
        })
    }

    #[test]
    fn later_alias_wins() {
        let mut document = FlureeDocument::new();
        document.insert("b", block(&[1]));
        document.insert("a", block(&[2]));
        document.insert("b", block(&[3, 4]));

        assert_eq!(document.len(), 2);
        assert_eq!(
            document.queries().map(|(alias, _)| alias).collect::<Vec<_>>(),
            vec!["b", "a"]
        );
        assert_eq!(document.get("b"), Some(&block(&[3, 4])));
        assert_eq!(document.get("c"), None);
        assert_eq!(
            document.to_json().unwrap(),
            json!({ "b": { "block": [3, 4] }, "a": { "block": [2] } })
        );
    }

    #[test]
    fn empty_vars_are_dropped() {
        let mut document = FlureeDocument::new();
        document.insert("_block", block(&[3]));
        document.set_vars(IndexMap::new());

        assert!(document.vars().is_none());
        assert_eq!(document.to_json().unwrap(), json!({ "_block": { "block": [3] } }));
    }

    #[test]
    fn vars_shadow_a_query_aliased_vars() {
        let mut document = FlureeDocument::new();
        document.insert(
            "vars",
            FlureeQuery::Graph(GraphQuery::new(SelectPattern::wildcard(), json!("chat"))),
        );
        document.insert("_block", block(&[1, 2]));
        document.set_vars(IndexMap::from([("?x".to_string(), Value::Null)]));

        insta::assert_json_snapshot!(document, @r#"
        {
          "_block": {
            "block": [
              1,
              2
            ]
          },
          "vars": {
            "?x": null
          }
        }
        "#);
    }
}
