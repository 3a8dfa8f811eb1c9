// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use async_graphql_parser::{Pos, Positioned, types::Field};
use async_graphql_value::Value;
use flureeql_model::variable_reference;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::config::OptionalArgumentPolicy;

use super::translation_error::TranslationError;

/// The arguments of a field, coerced to JSON values and keyed by argument name.
///
/// No argument name is validated here; each query shape picks the names it understands and
/// ignores the rest.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Arguments {
    values: IndexMap<String, JsonValue>,
}

impl Arguments {
    pub(super) fn from_field(field: &Positioned<Field>) -> Result<Self, TranslationError> {
        let mut values = IndexMap::new();

        // A repeated argument overwrites the earlier one
        for (name, value) in &field.node.arguments {
            let name = name.node.as_str();
            values.insert(name.to_string(), coerce_value(&value.node, name, value.pos)?);
        }

        Ok(Self { values })
    }

    /// The argument as written, which may be `null`.
    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.values.get(name)
    }

    /// The argument if it was given a non-null value.
    pub fn supplied(&self, name: &str) -> Option<&JsonValue> {
        self.get(name).filter(|value| !value.is_null())
    }

    /// The argument if `policy` considers it worth carrying into the output.
    pub fn included(&self, name: &str, policy: OptionalArgumentPolicy) -> Option<&JsonValue> {
        self.get(name).filter(|value| policy.includes(value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Convert one argument value. Variables become `?name` references, to be bound when the
/// FlureeQL query executes.
fn coerce_value(value: &Value, argument: &str, pos: Pos) -> Result<JsonValue, TranslationError> {
    let unsupported = |kind| TranslationError::UnsupportedValueKind {
        kind,
        argument: argument.to_string(),
        pos,
    };

    match value {
        Value::Variable(name) => Ok(JsonValue::String(variable_reference(name.as_str()))),
        Value::Null => Ok(JsonValue::Null),
        Value::Number(number) => Ok(JsonValue::Number(number.clone())),
        Value::String(string) => Ok(JsonValue::String(string.clone())),
        Value::Boolean(boolean) => Ok(JsonValue::Bool(*boolean)),
        Value::List(elems) => elems
            .iter()
            .map(|elem| coerce_value(elem, argument, pos))
            .collect::<Result<Vec<_>, _>>()
            .map(JsonValue::Array),
        Value::Enum(_) => Err(unsupported("enum")),
        Value::Object(_) => Err(unsupported("object")),
        Value::Binary(_) => Err(unsupported("binary")),
    }
}
